use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};

use crate::effects::ParticleField;
use crate::effects::particles::Palette;
use crate::ui::theme::Theme;

/// Connections fainter than this are not drawn; terminals have no alpha.
const MIN_LINK_OPACITY: f64 = 0.05;

pub struct ParticleCanvas<'a> {
    field: &'a ParticleField,
    theme: &'a Theme,
}

impl<'a> ParticleCanvas<'a> {
    pub fn new(field: &'a ParticleField, theme: &'a Theme) -> Self {
        Self { field, theme }
    }
}

/// Particle coordinates grow downward, canvas coordinates grow upward.
fn flip(y: f64, height: f64) -> f64 {
    height - y
}

impl Widget for ParticleCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (width, height) = self.field.bounds();

        let mut by_palette: [(Palette, Vec<(f64, f64)>); 3] = [
            (Palette::Cyan, Vec::new()),
            (Palette::Indigo, Vec::new()),
            (Palette::Violet, Vec::new()),
        ];
        for p in self.field.particles() {
            if let Some((_, coords)) = by_palette.iter_mut().find(|(c, _)| *c == p.color) {
                coords.push((p.x, flip(p.y, height)));
            }
        }
        let links: Vec<_> = self
            .field
            .connections()
            .into_iter()
            .filter(|l| l.opacity >= MIN_LINK_OPACITY)
            .collect();

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(colors.bg())
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for link in &links {
                    ctx.draw(&CanvasLine {
                        x1: link.from.0,
                        y1: flip(link.from.1, height),
                        x2: link.to.0,
                        y2: flip(link.to.1, height),
                        color: colors.border(),
                    });
                }
                ctx.layer();
                for (palette, coords) in &by_palette {
                    ctx.draw(&Points {
                        coords,
                        color: colors.particle(*palette),
                    });
                }
            })
            .render(area, buf);
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

pub const OWNER_NAME: &str = "Manish Singh Rana";

pub const ROLES: &[&str] = &[
    "Full Stack Developer",
    "Mobile & Web Developer",
    "AI Integration Specialist",
];

/// Name banner with the currently rotated role underneath.
pub struct Hero<'a> {
    role: &'a str,
    theme: &'a Theme,
}

impl<'a> Hero<'a> {
    pub fn new(role: &'a str, theme: &'a Theme) -> Self {
        Self { role, theme }
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        // Alternate the two accents letter by letter for a gradient feel.
        let name: Vec<Span> = OWNER_NAME
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let fg = if i % 2 == 0 {
                    colors.accent()
                } else {
                    colors.accent_alt()
                };
                Span::styled(
                    ch.to_string(),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        let lines = vec![
            Line::from(""),
            Line::from(name),
            Line::from(""),
            Line::from(Span::styled(
                self.role,
                Style::default().fg(colors.fg()).add_modifier(Modifier::ITALIC),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

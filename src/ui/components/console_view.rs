use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::console::CommandInterpreter;
use crate::ui::theme::Theme;

const PROMPT: &str = "\u{279c} ~ ";

/// Scrollback plus the live prompt. Follows the newest line unless the
/// interpreter has been scrolled back.
pub struct ConsoleView<'a> {
    interpreter: &'a CommandInterpreter,
    theme: &'a Theme,
}

impl<'a> ConsoleView<'a> {
    pub fn new(interpreter: &'a CommandInterpreter, theme: &'a Theme) -> Self {
        Self { interpreter, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        let prompt_style = Style::default()
            .fg(colors.prompt())
            .add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        for entry in self.interpreter.transcript() {
            if !entry.input.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(PROMPT, prompt_style),
                    Span::styled(entry.input.clone(), Style::default().fg(colors.fg())),
                    Span::styled(
                        format!("  [{}]", entry.timestamp),
                        Style::default().fg(colors.text_pending()),
                    ),
                ]));
            }
            for out in &entry.output {
                lines.push(Line::from(Span::styled(
                    out.clone(),
                    Style::default().fg(colors.output()),
                )));
            }
        }

        let (before, cursor, after) = self.interpreter.line().render_parts();
        let cursor_style = Style::default()
            .fg(colors.text_cursor_fg())
            .bg(colors.text_cursor_bg());
        let mut prompt = vec![
            Span::styled(PROMPT, prompt_style),
            Span::styled(before.to_string(), Style::default().fg(colors.fg())),
        ];
        match cursor {
            Some(ch) => {
                prompt.push(Span::styled(ch.to_string(), cursor_style));
                prompt.push(Span::styled(after.to_string(), Style::default().fg(colors.fg())));
            }
            None => prompt.push(Span::styled(" ", cursor_style)),
        }
        lines.push(Line::from(prompt));
        lines
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let title = match self.interpreter.scroll_offset() {
            0 => " terminal ".to_string(),
            n => format!(" terminal \u{2191}{n} "),
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner_height = block.inner(area).height as usize;

        let lines = self.lines();
        let newest = lines.len().saturating_sub(inner_height);
        let skip = newest.saturating_sub(self.interpreter.scroll_offset());
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

        Paragraph::new(visible).block(block).render(area, buf);
    }
}

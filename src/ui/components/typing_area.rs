use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::challenge::TypingSession;
use crate::challenge::session::CharState;
use crate::ui::theme::Theme;

pub struct TypingArea<'a> {
    session: &'a TypingSession,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(session: &'a TypingSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }
}

/// One target character and how it is drawn.
struct RenderToken {
    target_idx: usize,
    display: String,
    is_line_break: bool,
}

fn build_render_tokens(target: &[char]) -> Vec<RenderToken> {
    let mut tokens = Vec::with_capacity(target.len());
    let mut col = 0usize;

    for (i, &ch) in target.iter().enumerate() {
        let (display, is_line_break) = match ch {
            '\n' => {
                col = 0;
                ("\u{21b5}".to_string(), true)
            }
            '\t' => {
                let tab_width = 4 - (col % 4);
                col += tab_width;
                let mut display = String::from("\u{2192}");
                display.extend(std::iter::repeat_n('\u{00b7}', tab_width - 1));
                (display, false)
            }
            _ => {
                col += 1;
                (ch.to_string(), false)
            }
        };
        tokens.push(RenderToken {
            target_idx: i,
            display,
            is_line_break,
        });
    }

    tokens
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let target = self.session.target();
        let typed: Vec<char> = self.session.input().chars().collect();
        let cursor = typed.len();
        let tokens = build_render_tokens(target);

        let incorrect = Style::default()
            .fg(colors.text_incorrect())
            .bg(colors.text_incorrect_bg())
            .add_modifier(Modifier::UNDERLINED);

        let mut lines: Vec<Vec<Span>> = vec![Vec::new()];
        for token in &tokens {
            let idx = token.target_idx;
            let state = self.session.char_state(idx);

            let style = match state {
                CharState::Correct => Style::default().fg(colors.text_correct()),
                CharState::Incorrect => incorrect,
                CharState::Pending if idx == cursor && !self.session.is_complete() => {
                    Style::default()
                        .fg(colors.text_cursor_fg())
                        .bg(colors.text_cursor_bg())
                }
                CharState::Pending => Style::default().fg(colors.text_pending()),
            };

            // Show what was actually typed, except over whitespace markers.
            let display = match (state, typed.get(idx)) {
                (CharState::Incorrect, Some(&actual))
                    if !matches!(target[idx], '\n' | '\t') && actual != '\n' =>
                {
                    actual.to_string()
                }
                _ => token.display.clone(),
            };

            if let Some(line) = lines.last_mut() {
                line.push(Span::styled(display, style));
            }
            if token.is_line_break {
                lines.push(Vec::new());
            }
        }

        let overflow: String = self
            .session
            .overflow()
            .map(|ch| if ch == '\n' { '\u{21b5}' } else { ch })
            .collect();
        if !overflow.is_empty() {
            if let Some(line) = lines.last_mut() {
                line.push(Span::styled(overflow, incorrect));
            }
        }

        let ratatui_lines: Vec<Line> = lines.into_iter().map(Line::from).collect();

        let title = format!(
            " {} \u{00b7} {} ",
            self.session.snippet.title, self.session.snippet.language
        );
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(ratatui_lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::challenge::CodeSnippet;

    #[test]
    fn test_render_tokens_newline() {
        let target: Vec<char> = "a\nb".chars().collect();
        let tokens = build_render_tokens(&target);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].display, "\u{21b5}");
        assert!(tokens[1].is_line_break);
        assert_eq!(tokens[2].target_idx, 2);
    }

    #[test]
    fn test_render_tokens_tab_alignment() {
        let target: Vec<char> = "ab\t\n\t".chars().collect();
        let tokens = build_render_tokens(&target);
        assert_eq!(tokens[2].display, "\u{2192}\u{00b7}");
        assert_eq!(tokens[4].display, "\u{2192}\u{00b7}\u{00b7}\u{00b7}");
    }

    #[test]
    fn test_mistyped_char_is_shown() {
        let theme = Theme::default();
        let snippet = CodeSnippet {
            language: "Rust",
            title: "t",
            code: "abc",
        };
        let mut session = TypingSession::new(snippet);
        session.set_input("ax", Utc::now());

        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        TypingArea::new(&session, &theme).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "a");
        assert_eq!(buf[(2, 1)].symbol(), "x");
        assert_eq!(buf[(3, 1)].symbol(), "c");
        assert_eq!(buf[(2, 1)].fg, theme.colors.text_incorrect());
        assert_eq!(buf[(3, 1)].bg, theme.colors.text_cursor_bg());
    }
}

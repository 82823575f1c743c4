use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::challenge::{CodeSnippet, ScoreRecord};
use crate::ui::theme::Theme;

/// Snippet catalog on the left, best score and recent runs on the right.
pub struct SnippetList<'a> {
    snippets: &'a [CodeSnippet],
    selected: usize,
    best: Option<&'a ScoreRecord>,
    history: &'a [ScoreRecord],
    theme: &'a Theme,
}

impl<'a> SnippetList<'a> {
    pub fn new(
        snippets: &'a [CodeSnippet],
        selected: usize,
        best: Option<&'a ScoreRecord>,
        history: &'a [ScoreRecord],
        theme: &'a Theme,
    ) -> Self {
        Self {
            snippets,
            selected,
            best,
            history,
            theme,
        }
    }
}

fn format_record(record: &ScoreRecord) -> String {
    format!(
        "{:>3} WPM  {:>3}%  {:<10} {}",
        record.wpm,
        record.accuracy,
        record.language,
        record.date.format("%Y-%m-%d")
    )
}

impl Widget for SnippetList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let mut rows = Vec::new();
        for (i, snippet) in self.snippets.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let label_style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            rows.push(Line::from(vec![
                Span::styled(format!(" {indicator} {}", snippet.title), label_style),
                Span::styled(
                    format!("  {} \u{00b7} {} chars", snippet.language, snippet.char_count()),
                    Style::default().fg(colors.text_pending()),
                ),
            ]));
        }
        Paragraph::new(rows)
            .block(
                Block::bordered()
                    .title(" Choose a snippet ")
                    .border_style(Style::default().fg(colors.border_focused()))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(columns[0], buf);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(columns[1]);

        let best_line = match self.best {
            Some(best) => Line::from(vec![
                Span::styled(
                    format!(" {} WPM", best.wpm),
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}% \u{00b7} {}", best.accuracy, best.language),
                    Style::default().fg(colors.fg()),
                ),
            ]),
            None => Line::from(Span::styled(
                " No scores yet",
                Style::default().fg(colors.text_pending()),
            )),
        };
        Paragraph::new(vec![Line::from(""), best_line])
            .block(
                Block::bordered()
                    .title(" Best ")
                    .border_style(Style::default().fg(colors.border()))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(side[0], buf);

        // Newest first.
        let history: Vec<Line> = self
            .history
            .iter()
            .rev()
            .map(|r| {
                Line::from(Span::styled(
                    format!(" {}", format_record(r)),
                    Style::default().fg(colors.text_pending()),
                ))
            })
            .collect();
        Paragraph::new(history)
            .block(
                Block::bordered()
                    .title(" Recent ")
                    .border_style(Style::default().fg(colors.border()))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(side[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_format_record() {
        let record = ScoreRecord {
            wpm: 42,
            accuracy: 97,
            language: "Python".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        assert_eq!(format_record(&record), " 42 WPM   97%  Python     2024-05-01");
    }
}

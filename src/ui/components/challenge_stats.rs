use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::challenge::{ScoreRecord, TypingSession};
use crate::ui::theme::{Theme, ThemeColors};

fn accuracy_color(accuracy: f64, colors: &ThemeColors) -> Color {
    if accuracy >= 95.0 {
        colors.success()
    } else if accuracy >= 85.0 {
        colors.warning()
    } else {
        colors.error()
    }
}

/// Live time, WPM, accuracy and error count for the running session.
pub struct ChallengeStats<'a> {
    session: &'a TypingSession,
    now: DateTime<Utc>,
    theme: &'a Theme,
}

impl<'a> ChallengeStats<'a> {
    pub fn new(session: &'a TypingSession, now: DateTime<Utc>, theme: &'a Theme) -> Self {
        Self {
            session,
            now,
            theme,
        }
    }
}

/// WPM only exists once a session completes.
fn wpm_label(session: &TypingSession) -> String {
    session
        .wpm()
        .map_or_else(|| "--".to_string(), |wpm| wpm.to_string())
}

impl Widget for ChallengeStats<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let accuracy = self.session.accuracy();
        let label = Style::default().fg(colors.text_pending());

        let line = Line::from(vec![
            Span::styled(" Time: ", label),
            Span::styled(
                format!("{:.1}s", self.session.elapsed_secs_at(self.now)),
                Style::default().fg(colors.fg()),
            ),
            Span::styled("   WPM: ", label),
            Span::styled(wpm_label(self.session), Style::default().fg(colors.accent())),
            Span::styled("   Accuracy: ", label),
            Span::styled(
                format!("{accuracy:.0}%"),
                Style::default().fg(accuracy_color(accuracy, colors)),
            ),
            Span::styled("   Errors: ", label),
            Span::styled(
                self.session.error_count().to_string(),
                Style::default().fg(colors.error()),
            ),
        ]);

        Paragraph::new(line)
            .block(
                Block::bordered()
                    .title(" Stats ")
                    .border_style(Style::default().fg(colors.border()))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(area, buf);
    }
}

/// Popup shown after the snippet matches exactly.
pub struct CompletionPanel<'a> {
    session: &'a TypingSession,
    best: Option<&'a ScoreRecord>,
    theme: &'a Theme,
}

impl<'a> CompletionPanel<'a> {
    pub fn new(session: &'a TypingSession, best: Option<&'a ScoreRecord>, theme: &'a Theme) -> Self {
        Self {
            session,
            best,
            theme,
        }
    }
}

impl Widget for CompletionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let accuracy = self.session.accuracy();
        let wpm = self.session.wpm();
        let is_new_best = match (wpm, self.best) {
            (Some(wpm), Some(best)) => wpm >= best.wpm,
            (Some(_), None) => true,
            _ => false,
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Challenge complete!",
                Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("WPM: ", Style::default().fg(colors.fg())),
                Span::styled(
                    wpm_label(self.session),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Accuracy: ", Style::default().fg(colors.fg())),
                Span::styled(
                    format!("{accuracy:.0}%"),
                    Style::default().fg(accuracy_color(accuracy, colors)),
                ),
            ]),
        ];

        if is_new_best {
            lines.push(Line::from(Span::styled(
                "New best score!",
                Style::default().fg(colors.warning()),
            )));
        } else if let Some(best) = self.best {
            lines.push(Line::from(Span::styled(
                format!("Best: {} WPM", best.wpm),
                Style::default().fg(colors.text_pending()),
            )));
        }
        if wpm.is_none() {
            lines.push(Line::from(Span::styled(
                "Finished too fast to time; score not saved.",
                Style::default().fg(colors.text_pending()),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[r] Try another   [Esc] Back",
            Style::default().fg(colors.text_pending()),
        )));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(" Result ")
                    .border_style(Style::default().fg(colors.accent()))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(area, buf);
    }
}

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::challenge::scores::{ScoreBoard, ScoreRecord};
use crate::challenge::session::{InputOutcome, TypingSession};
use crate::challenge::snippets::CodeSnippet;
use crate::store::kv::KvStore;

/// Hosts at most one typing session and records completed ones.
pub struct TypingChallenge<S: KvStore> {
    session: Option<TypingSession>,
    scores: ScoreBoard<S>,
    allow_corrections: bool,
    last_record: Option<ScoreRecord>,
}

impl<S: KvStore> TypingChallenge<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: None,
            scores: ScoreBoard::new(store),
            allow_corrections: false,
            last_record: None,
        }
    }

    pub fn with_corrections(mut self, allow: bool) -> Self {
        self.allow_corrections = allow;
        self
    }

    pub fn on_snippet_selected(&mut self, snippet: CodeSnippet) {
        debug!(language = snippet.language, title = snippet.title, "snippet selected");
        self.session = Some(TypingSession::new(snippet).with_corrections(self.allow_corrections));
        self.last_record = None;
    }

    pub fn on_input_changed(&mut self, value: &str) -> InputOutcome {
        self.on_input_changed_at(value, Utc::now())
    }

    pub fn on_input_changed_at(&mut self, value: &str, now: DateTime<Utc>) -> InputOutcome {
        let Some(session) = self.session.as_mut() else {
            return InputOutcome::Rejected;
        };
        let outcome = session.set_input(value, now);
        if outcome == InputOutcome::Completed {
            if let Some(wpm) = session.wpm() {
                let record = ScoreRecord {
                    wpm,
                    accuracy: session.accuracy().round() as u32,
                    language: session.snippet.language.to_string(),
                    date: now,
                };
                info!(
                    wpm = record.wpm,
                    accuracy = record.accuracy,
                    language = %record.language,
                    "typing challenge completed"
                );
                self.scores.record(record.clone());
                self.last_record = Some(record);
            }
        }
        outcome
    }

    /// Append one character to the current input.
    pub fn type_char(&mut self, ch: char) -> InputOutcome {
        let Some(session) = self.session.as_ref() else {
            return InputOutcome::Rejected;
        };
        let mut value = session.input().to_string();
        value.push(ch);
        self.on_input_changed(&value)
    }

    /// Drop the last character; refused unless corrections are enabled.
    pub fn backspace(&mut self) -> InputOutcome {
        let Some(session) = self.session.as_ref() else {
            return InputOutcome::Rejected;
        };
        let mut value = session.input().to_string();
        if value.pop().is_none() {
            return InputOutcome::Rejected;
        }
        self.on_input_changed(&value)
    }

    /// Discard the current session (leave or change challenge).
    pub fn reset(&mut self) {
        self.session = None;
        self.last_record = None;
    }

    pub fn session(&self) -> Option<&TypingSession> {
        self.session.as_ref()
    }

    pub fn last_record(&self) -> Option<&ScoreRecord> {
        self.last_record.as_ref()
    }

    pub fn best_score(&self) -> Option<ScoreRecord> {
        self.scores.best()
    }

    pub fn history(&self) -> Vec<ScoreRecord> {
        self.scores.load()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::challenge::scores::MAX_SCORES;
    use crate::store::kv::MemoryStore;

    const ABC: CodeSnippet = CodeSnippet {
        language: "Test",
        title: "abc",
        code: "abc",
    };

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_input_without_session_is_rejected() {
        let mut challenge = TypingChallenge::new(MemoryStore::new());
        assert_eq!(challenge.on_input_changed("a"), InputOutcome::Rejected);
        assert_eq!(challenge.type_char('a'), InputOutcome::Rejected);
    }

    #[test]
    fn test_completion_persists_score() {
        let mut challenge = TypingChallenge::new(MemoryStore::new());
        challenge.on_snippet_selected(ABC);
        challenge.on_input_changed_at("a", t0());
        challenge.on_input_changed_at("ab", t0() + Duration::seconds(1));
        let outcome = challenge.on_input_changed_at("abc", t0() + Duration::seconds(2));
        assert_eq!(outcome, InputOutcome::Completed);

        let best = challenge.best_score().unwrap();
        assert_eq!(best.wpm, 30);
        assert_eq!(best.accuracy, 100);
        assert_eq!(best.language, "Test");
        assert_eq!(challenge.last_record(), Some(&best));
    }

    #[test]
    fn test_backspace_blocked_by_default() {
        let mut challenge = TypingChallenge::new(MemoryStore::new());
        challenge.on_snippet_selected(ABC);
        challenge.type_char('a');
        challenge.type_char('x');
        assert_eq!(challenge.backspace(), InputOutcome::Rejected);
        assert_eq!(challenge.session().unwrap().input(), "ax");
    }

    #[test]
    fn test_backspace_with_corrections() {
        let mut challenge = TypingChallenge::new(MemoryStore::new()).with_corrections(true);
        challenge.on_snippet_selected(ABC);
        challenge.type_char('a');
        challenge.type_char('x');
        assert_eq!(challenge.backspace(), InputOutcome::Updated);
        assert_eq!(challenge.session().unwrap().input(), "a");
    }

    #[test]
    fn test_eleven_completions_keep_ten() {
        let mut challenge = TypingChallenge::new(MemoryStore::new());
        for i in 0..11 {
            let start = t0() + Duration::minutes(i);
            challenge.on_snippet_selected(ABC);
            challenge.on_input_changed_at("a", start);
            challenge.on_input_changed_at("abc", start + Duration::seconds(i + 1));
        }
        let history = challenge.history();
        assert_eq!(history.len(), MAX_SCORES);
        assert_eq!(history[0].date, t0() + Duration::minutes(1) + Duration::seconds(2));
    }

    #[test]
    fn test_reset_discards_session() {
        let mut challenge = TypingChallenge::new(MemoryStore::new());
        challenge.on_snippet_selected(ABC);
        challenge.type_char('a');
        challenge.reset();
        assert!(challenge.session().is_none());
    }
}

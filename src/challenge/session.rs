use chrono::{DateTime, Utc};

use crate::challenge::snippets::CodeSnippet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Edit refused; the session is unchanged.
    Rejected,
    Updated,
    /// Input now equals the target exactly.
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharState {
    Correct,
    Incorrect,
    Pending,
}

pub struct TypingSession {
    pub snippet: CodeSnippet,
    target: Vec<char>,
    input: String,
    typed: usize,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    errors: usize,
    wpm: Option<u32>,
    allow_corrections: bool,
}

impl TypingSession {
    pub fn new(snippet: CodeSnippet) -> Self {
        Self {
            snippet,
            target: snippet.code.chars().collect(),
            input: String::new(),
            typed: 0,
            started_at: None,
            finished_at: None,
            errors: 0,
            wpm: None,
            allow_corrections: false,
        }
    }

    /// Accept edits that shorten the input (backspace) while the session is running.
    pub fn with_corrections(mut self, allow: bool) -> Self {
        self.allow_corrections = allow;
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn typed_len(&self) -> usize {
        self.typed
    }

    pub fn accuracy(&self) -> f64 {
        if self.typed == 0 {
            return 100.0;
        }
        ((self.typed - self.errors) as f64 / self.typed as f64 * 100.0).max(0.0)
    }

    /// Defined once the session completed with a non-zero elapsed time.
    pub fn wpm(&self) -> Option<u32> {
        self.wpm
    }

    pub fn elapsed_secs_at(&self, now: DateTime<Utc>) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => millis_between(start, end) as f64 / 1000.0,
            (Some(start), None) => millis_between(start, now) as f64 / 1000.0,
            _ => 0.0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.snippet.code.split(' ').count()
    }

    pub fn set_input(&mut self, value: &str, now: DateTime<Utc>) -> InputOutcome {
        if self.is_complete() {
            return InputOutcome::Rejected;
        }
        let new_len = value.chars().count();
        if new_len < self.typed && !self.allow_corrections {
            return InputOutcome::Rejected;
        }

        if self.started_at.is_none() && new_len > 0 {
            self.started_at = Some(now);
        }

        self.input = value.to_string();
        self.typed = new_len;
        self.errors = count_errors(&self.target, value);

        if self.input == self.snippet.code {
            self.finished_at = Some(now);
            self.wpm = self
                .started_at
                .and_then(|start| words_per_minute(self.word_count(), millis_between(start, now)));
            return InputOutcome::Completed;
        }
        InputOutcome::Updated
    }

    pub fn char_state(&self, idx: usize) -> CharState {
        match self.input.chars().nth(idx) {
            None => CharState::Pending,
            Some(ch) if self.target.get(idx) == Some(&ch) => CharState::Correct,
            Some(_) => CharState::Incorrect,
        }
    }

    /// Typed characters past the end of the target.
    pub fn overflow(&self) -> impl Iterator<Item = char> + '_ {
        self.input.chars().skip(self.target.len())
    }
}

/// Positions in `input` that differ from `target`; anything past the target counts.
pub fn count_errors(target: &[char], input: &str) -> usize {
    input
        .chars()
        .enumerate()
        .filter(|&(i, ch)| target.get(i) != Some(&ch))
        .count()
}

pub fn words_per_minute(words: usize, elapsed_ms: i64) -> Option<u32> {
    if elapsed_ms <= 0 {
        return None;
    }
    let minutes = elapsed_ms as f64 / 1000.0 / 60.0;
    Some((words as f64 / minutes).round() as u32)
}

fn millis_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().max(0)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn snippet(code: &'static str) -> CodeSnippet {
        CodeSnippet {
            language: "Test",
            title: "test",
            code,
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = TypingSession::new(snippet("abc"));
        assert_eq!(session.input(), "");
        assert_eq!(session.accuracy(), 100.0);
        assert_eq!(session.error_count(), 0);
        assert!(session.started_at.is_none());
        assert!(!session.is_complete());
        assert_eq!(session.wpm(), None);
    }

    #[test]
    fn test_first_keystroke_starts_clock() {
        let mut session = TypingSession::new(snippet("abc"));
        session.set_input("a", t0());
        session.set_input("ab", t0() + Duration::seconds(1));
        assert_eq!(session.started_at, Some(t0()));
    }

    #[test]
    fn test_error_and_accuracy_progression() {
        let mut session = TypingSession::new(snippet("abc"));
        session.set_input("a", t0());
        session.set_input("ab", t0());
        assert_eq!(session.set_input("abx", t0()), InputOutcome::Updated);
        assert_eq!(session.error_count(), 1);
        assert!((session.accuracy() - 66.666_666).abs() < 0.001);
        assert_eq!(session.accuracy().round(), 67.0);
    }

    #[test]
    fn test_shrinking_input_is_rejected() {
        let mut session = TypingSession::new(snippet("abcd"));
        session.set_input("abc", t0());
        assert_eq!(session.set_input("ab", t0()), InputOutcome::Rejected);
        assert_eq!(session.input(), "abc");
    }

    #[test]
    fn test_corrections_allow_shrinking() {
        let mut session = TypingSession::new(snippet("abc")).with_corrections(true);
        session.set_input("abx", t0());
        assert_eq!(session.set_input("ab", t0()), InputOutcome::Updated);
        assert_eq!(session.error_count(), 0);
        let outcome = session.set_input("abc", t0() + Duration::seconds(3));
        assert_eq!(outcome, InputOutcome::Completed);
    }

    #[test]
    fn test_overflow_counts_as_errors() {
        let mut session = TypingSession::new(snippet("ab"));
        session.set_input("abzz", t0());
        assert_eq!(session.error_count(), 2);
        assert_eq!(session.accuracy(), 50.0);
        assert_eq!(session.overflow().collect::<String>(), "zz");
        assert!(!session.is_complete());
    }

    #[test]
    fn test_completion_computes_wpm() {
        // 6 words over 30 seconds = 12 wpm
        let mut session = TypingSession::new(snippet("a b c d e f"));
        session.set_input("a", t0());
        let outcome = session.set_input("a b c d e f", t0() + Duration::seconds(30));
        assert_eq!(outcome, InputOutcome::Completed);
        assert_eq!(session.word_count(), 6);
        assert_eq!(session.wpm(), Some(12));
        assert_eq!(session.elapsed_secs_at(t0() + Duration::hours(1)), 30.0);
    }

    #[test]
    fn test_zero_elapsed_leaves_wpm_undefined() {
        let mut session = TypingSession::new(snippet("ab"));
        assert_eq!(session.set_input("ab", t0()), InputOutcome::Completed);
        assert_eq!(session.wpm(), None);
    }

    #[test]
    fn test_complete_session_rejects_input() {
        let mut session = TypingSession::new(snippet("ab"));
        session.set_input("a", t0());
        session.set_input("ab", t0() + Duration::seconds(1));
        assert_eq!(
            session.set_input("abc", t0() + Duration::seconds(2)),
            InputOutcome::Rejected
        );
        assert_eq!(session.input(), "ab");
    }

    #[test]
    fn test_word_count_splits_on_single_spaces() {
        let session = TypingSession::new(snippet("a  b\nc"));
        // "a", "", "b\nc"
        assert_eq!(session.word_count(), 3);
    }

    #[test]
    fn test_char_states() {
        let mut session = TypingSession::new(snippet("abc"));
        session.set_input("ax", t0());
        assert_eq!(session.char_state(0), CharState::Correct);
        assert_eq!(session.char_state(1), CharState::Incorrect);
        assert_eq!(session.char_state(2), CharState::Pending);
    }

    #[test]
    fn test_words_per_minute_rounds() {
        assert_eq!(words_per_minute(10, 0), None);
        assert_eq!(words_per_minute(10, 60_000), Some(10));
        assert_eq!(words_per_minute(1, 7_000), Some(9));
    }
}

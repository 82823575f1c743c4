use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
    /// Key not consumed by the editor (e.g. Up/Down); the owner decides.
    Ignored,
}

pub struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
    candidates: Vec<String>,
    completions: Vec<String>,
    completion_index: Option<usize>,
    /// Text snapshot when Tab was first pressed.
    completion_seed: String,
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        let cursor = text.chars().count();
        Self {
            text: text.to_string(),
            cursor,
            candidates: Vec::new(),
            completions: Vec::new(),
            completion_index: None,
            completion_seed: String::new(),
        }
    }

    /// Words offered by Tab completion.
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn set_value(&mut self, text: &str) {
        self.reset_completion();
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.set_value("");
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    /// When cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        match self.text[byte_offset..].chars().next() {
            None => (&self.text, None, ""),
            Some(ch) => {
                let next_byte = byte_offset + ch.len_utf8();
                (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
            }
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                self.reset_completion();
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                self.reset_completion();
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.reset_completion();
                self.cursor = 0;
            }
            KeyCode::End => {
                self.reset_completion();
                self.cursor = self.text.chars().count();
            }
            KeyCode::Backspace => {
                self.reset_completion();
                if self.cursor > 0 {
                    self.remove_char_at(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                self.reset_completion();
                if self.cursor < self.text.chars().count() {
                    self.remove_char_at(self.cursor);
                }
            }
            KeyCode::Tab => {
                self.tab_complete(true);
            }
            KeyCode::BackTab => {
                self.tab_complete(false);
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                self.cursor = self.text.chars().count();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                let byte_offset = self.char_to_byte(self.cursor);
                self.text.insert(byte_offset, ch);
                self.cursor += 1;
            }
            _ => return InputResult::Ignored,
        }
        InputResult::Continue
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn remove_char_at(&mut self, char_idx: usize) {
        let byte_offset = self.char_to_byte(char_idx);
        if let Some(ch) = self.text[byte_offset..].chars().next() {
            self.text
                .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
        }
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then non-whitespace).
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start_byte = self.char_to_byte(pos);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = pos;
    }

    fn reset_completion(&mut self) {
        self.completions.clear();
        self.completion_index = None;
        self.completion_seed.clear();
    }

    fn tab_complete(&mut self, forward: bool) {
        // Only activate when cursor is at end of line
        let len = self.text.chars().count();
        if self.cursor < len {
            return;
        }

        match self.completion_index {
            None => {
                self.completion_seed = self.text.clone();
                self.completions = self.build_completions();
                if self.completions.is_empty() {
                    return;
                }
                self.completion_index = Some(0);
                self.apply_completion(0);
            }
            Some(idx) if !self.completions.is_empty() => {
                let count = self.completions.len();
                let next = if forward {
                    (idx + 1) % count
                } else {
                    (idx + count - 1) % count
                };
                self.completion_index = Some(next);
                self.apply_completion(next);
            }
            Some(_) => {}
        }
    }

    fn apply_completion(&mut self, idx: usize) {
        self.text = self.completions[idx].clone();
        self.cursor = self.text.chars().count();
    }

    fn build_completions(&self) -> Vec<String> {
        let seed = self.completion_seed.trim_start().to_lowercase();
        let mut matches: Vec<String> = self
            .candidates
            .iter()
            .filter(|c| c.starts_with(&seed))
            .cloned()
            .collect();
        matches.sort();
        matches.dedup();
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn with_commands(text: &str) -> LineInput {
        LineInput::new(text).with_candidates(
            ["help", "whoami", "cat about.txt", "cat contact.vcf", "contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn insert_at_start_middle_end() {
        let mut input = LineInput::new("ac");
        input.handle(key(KeyCode::Char('d')));
        assert_eq!(input.value(), "acd");

        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('z')));
        assert_eq!(input.value(), "zacd");
        assert_eq!(input.cursor, 1);

        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "zabcd");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn backspace_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "a");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn delete_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
        assert_eq!(input.cursor, 0);

        input.handle(key(KeyCode::End));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn ctrl_w_word_delete() {
        let mut input = LineInput::new("cat about.txt  ");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "cat ");

        let mut empty = LineInput::new("");
        empty.handle(ctrl('w'));
        assert_eq!(empty.value(), "");
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut input = LineInput::new("whoami");
        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn multibyte_editing() {
        let mut input = LineInput::new("é✓");
        input.handle(key(KeyCode::Left));
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "✓");
        let (before, at, after) = input.render_parts();
        assert_eq!((before, at, after), ("", Some('✓'), ""));
    }

    #[test]
    fn enter_and_esc_results() {
        let mut input = LineInput::new("help");
        assert_eq!(input.handle(key(KeyCode::Enter)), InputResult::Submit);
        assert_eq!(input.handle(key(KeyCode::Esc)), InputResult::Cancel);
        assert_eq!(input.handle(key(KeyCode::Up)), InputResult::Ignored);
        assert_eq!(input.value(), "help");
    }

    #[test]
    fn tab_completes_single_match() {
        let mut input = with_commands("who");
        input.handle(key(KeyCode::Tab));
        assert_eq!(input.value(), "whoami");
    }

    #[test]
    fn tab_cycles_through_matches() {
        let mut input = with_commands("cat ");
        input.handle(key(KeyCode::Tab));
        assert_eq!(input.value(), "cat about.txt");
        input.handle(key(KeyCode::Tab));
        assert_eq!(input.value(), "cat contact.vcf");
        input.handle(key(KeyCode::Tab));
        assert_eq!(input.value(), "cat about.txt");
        input.handle(key(KeyCode::BackTab));
        assert_eq!(input.value(), "cat contact.vcf");
    }

    #[test]
    fn tab_without_match_leaves_text() {
        let mut input = with_commands("xyz");
        input.handle(key(KeyCode::Tab));
        assert_eq!(input.value(), "xyz");
    }

    #[test]
    fn tab_ignored_when_cursor_not_at_end() {
        let mut input = with_commands("who");
        input.handle(key(KeyCode::Left));
        input.handle(key(KeyCode::Tab));
        assert_eq!(input.value(), "who");
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut input = LineInput::new("");
        input.set_value("skills");
        assert_eq!(input.cursor, 6);
        assert_eq!(input.render_parts(), ("skills", None, ""));
    }
}

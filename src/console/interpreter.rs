use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::console::commands::{self, CLEAR_COMMAND, EXIT_COMMAND, WELCOME};
use crate::console::recall::{Recall, RecallBuffer};
use crate::console::transcript::CommandEntry;
use crate::ui::line_input::{InputResult, LineInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, nothing happened.
    Ignored,
    Appended,
    Cleared,
    /// The host should close the interpreter.
    Exit,
}

/// Lines moved by PageUp/PageDown.
pub const SCROLL_PAGE: usize = 10;
/// Lines moved per wheel notch.
pub const SCROLL_WHEEL: usize = 3;

pub struct CommandInterpreter {
    transcript: Vec<CommandEntry>,
    recall: RecallBuffer,
    line: LineInput,
    /// Lines scrolled back from the newest output; 0 follows the prompt.
    scroll: usize,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandInterpreter {
    pub fn new() -> Self {
        let welcome = CommandEntry::new("", WELCOME.iter().map(|l| l.to_string()).collect());
        Self {
            transcript: vec![welcome],
            recall: RecallBuffer::new(),
            line: LineInput::new("").with_candidates(commands::command_names()),
            scroll: 0,
        }
    }

    pub fn transcript(&self) -> &[CommandEntry] {
        &self.transcript
    }

    pub fn recall(&self) -> &RecallBuffer {
        &self.recall
    }

    pub fn line(&self) -> &LineInput {
        &self.line
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Rendered transcript lines, excluding the live prompt.
    pub fn transcript_lines(&self) -> usize {
        self.transcript
            .iter()
            .map(|e| usize::from(!e.input.is_empty()) + e.output.len())
            .sum()
    }

    pub fn scroll_back(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.transcript_lines());
    }

    pub fn scroll_forward(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Run one line of user input against the command table.
    pub fn submit(&mut self, raw: &str) -> Submission {
        self.scroll = 0;
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return Submission::Ignored;
        }

        if key == EXIT_COMMAND {
            self.line.clear();
            return Submission::Exit;
        }
        if key == CLEAR_COMMAND {
            self.transcript.clear();
            self.line.clear();
            return Submission::Cleared;
        }

        // Computed output sees the history before this submission is recorded.
        let output = match commands::lookup(&key) {
            Some(action) => action.output(&self.recall),
            None => commands::not_found(&key),
        };
        debug!(command = %key, lines = output.len(), "command executed");

        self.recall.push(raw.to_string());
        self.transcript.push(CommandEntry::new(raw, output));
        self.line.clear();
        Submission::Appended
    }

    /// Submit whatever is on the composition line.
    pub fn submit_line(&mut self) -> Submission {
        let raw = self.line.value().to_string();
        self.submit(&raw)
    }

    pub fn recall_back(&mut self) {
        if let Recall::Select(entry) = self.recall.back() {
            let entry = entry.to_string();
            self.line.set_value(&entry);
        }
    }

    pub fn recall_forward(&mut self) {
        match self.recall.forward() {
            Recall::Select(entry) => {
                let entry = entry.to_string();
                self.line.set_value(&entry);
            }
            Recall::Exhausted => self.line.clear(),
            Recall::Unchanged => {}
        }
    }

    /// Route a key press; returns a submission when Enter or Esc was pressed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Submission> {
        match key.code {
            KeyCode::Up => {
                self.recall_back();
                None
            }
            KeyCode::Down => {
                self.recall_forward();
                None
            }
            KeyCode::PageUp => {
                self.scroll_back(SCROLL_PAGE);
                None
            }
            KeyCode::PageDown => {
                self.scroll_forward(SCROLL_PAGE);
                None
            }
            _ => match self.line.handle(key) {
                InputResult::Submit => Some(self.submit_line()),
                InputResult::Cancel => Some(Submission::Exit),
                InputResult::Continue | InputResult::Ignored => None,
            },
        }
    }
}

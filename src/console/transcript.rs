use chrono::{DateTime, Local};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandEntry {
    /// Raw submitted text; empty for the welcome banner.
    pub input: String,
    pub output: Vec<String>,
    /// Local wall-clock time of execution, `HH:MM:SS`.
    pub timestamp: String,
}

impl CommandEntry {
    pub fn new(input: &str, output: Vec<String>) -> Self {
        Self::at(input, output, Local::now())
    }

    pub fn at(input: &str, output: Vec<String>, when: DateTime<Local>) -> Self {
        Self {
            input: input.to_string(),
            output,
            timestamp: when.format("%H:%M:%S").to_string(),
        }
    }
}

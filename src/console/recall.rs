/// Previously submitted raw inputs plus a navigation cursor.
///
/// `cursor` is `None` while not recalling, otherwise always a valid index.
#[derive(Clone, Debug, Default)]
pub struct RecallBuffer {
    entries: Vec<String>,
    cursor: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Nothing to move to.
    Unchanged,
    Select(&'a str),
    /// Moved past the newest entry; the composition line should be emptied.
    Exhausted,
}

impl RecallBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, raw: String) {
        self.entries.push(raw);
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn count_prefixed(&self, prefix: &str) -> usize {
        self.entries.iter().filter(|e| e.starts_with(prefix)).count()
    }

    /// Step toward older entries, stopping at the oldest.
    pub fn back(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Recall::Select(&self.entries[idx])
    }

    /// Step toward newer entries; past the newest leaves recall mode.
    pub fn forward(&mut self) -> Recall<'_> {
        let Some(i) = self.cursor else {
            return Recall::Unchanged;
        };
        let next = i + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            Recall::Exhausted
        } else {
            self.cursor = Some(next);
            Recall::Select(&self.entries[next])
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::kv::KvStore;

pub const SCORES_KEY: &str = "typingScores";
pub const MAX_SCORES: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub wpm: u32,
    pub accuracy: u32,
    pub language: String,
    pub date: DateTime<Utc>,
}

/// Capped, FIFO score history persisted as a JSON array under [`SCORES_KEY`].
pub struct ScoreBoard<S: KvStore> {
    store: S,
}

impl<S: KvStore> ScoreBoard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored records, oldest first. Missing or malformed data reads as
    /// empty; individual records that fail to parse are skipped.
    pub fn load(&self) -> Vec<ScoreRecord> {
        let Some(raw) = self.store.get(SCORES_KEY) else {
            return Vec::new();
        };
        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "discarding unreadable score history");
                return Vec::new();
            }
        };
        let total = entries.len();
        let scores: Vec<ScoreRecord> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        if scores.len() < total {
            warn!(skipped = total - scores.len(), "skipping unreadable score records");
        }
        scores
    }

    /// Append a record, evicting from the front past [`MAX_SCORES`].
    /// Storage failures are logged and otherwise ignored.
    pub fn record(&mut self, record: ScoreRecord) {
        let mut scores = self.load();
        scores.push(record);
        if scores.len() > MAX_SCORES {
            let excess = scores.len() - MAX_SCORES;
            scores.drain(..excess);
        }

        match serde_json::to_string(&scores) {
            Ok(json) => {
                if let Err(e) = self.store.set(SCORES_KEY, &json) {
                    warn!(error = %e, "failed to persist score history");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize score history"),
        }
    }

    /// Record with the highest WPM; the earliest one wins a tie.
    pub fn best(&self) -> Option<ScoreRecord> {
        best_of(&self.load()).cloned()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub fn best_of(scores: &[ScoreRecord]) -> Option<&ScoreRecord> {
    scores.iter().fold(None, |best, current| match best {
        Some(b) if current.wpm <= b.wpm => Some(b),
        _ => Some(current),
    })
}

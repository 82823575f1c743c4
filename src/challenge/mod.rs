pub mod engine;
pub mod scores;
pub mod session;
pub mod snippets;

pub use engine::TypingChallenge;
pub use scores::{ScoreBoard, ScoreRecord};
pub use session::{InputOutcome, TypingSession};
pub use snippets::{CodeSnippet, SNIPPETS};

pub mod commands;
pub mod interpreter;
pub mod recall;
pub mod transcript;

pub use interpreter::{CommandInterpreter, SCROLL_WHEEL, Submission};
pub use recall::RecallBuffer;
pub use transcript::CommandEntry;

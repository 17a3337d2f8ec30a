//! SwipeQuiz Answer Session
//!
//! Records one answer per question during a playthrough:
//! - Lives in the session namespace, never in durable storage
//! - Append-only while recording
//! - Cleared on start, quit and retry

mod error;
mod record;
mod recorder;
mod score;

pub use error::SessionError;
pub use record::AnswerRecord;
pub use recorder::{AnswerSession, SessionState};
pub use score::{Grade, ScoreSummary};

pub type Result<T> = std::result::Result<T, SessionError>;

//! SwipeQuiz Storage Layer
//!
//! Two independent key-value namespaces:
//! - durable: survives restarts (SQLite)
//! - session: scoped to one run of the app (in memory)
//!
//! Values are JSON documents stored under string keys.

mod backend;
mod database;
mod error;
mod memory;
mod migrations;
mod namespace;

pub use backend::KeyValueBackend;
pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryBackend;
pub use namespace::{JsonValue, Namespace, Storage};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable key holding every quiz set
pub const SETS_KEY: &str = "sets";
/// Durable key holding every quiz
pub const QUIZZES_KEY: &str = "quizzes";
/// Session key holding the current playthrough's answers
pub const ANSWER_SESSION_KEY: &str = "answer-session";

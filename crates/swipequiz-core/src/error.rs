//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] swipequiz_storage::StorageError),

    #[error("Store error: {0}")]
    Store(#[from] swipequiz_store::StoreError),

    #[error("Session error: {0}")]
    Session(#[from] swipequiz_session::SessionError),

    #[error("Validation error: {0}")]
    Validation(#[from] swipequiz_store::ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Quiz set not found: {0}")]
    SetNotFound(String),

    #[error("Quiz set has no quizzes: {0}")]
    NoQuizzes(String),
}

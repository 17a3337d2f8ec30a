//! SwipeQuiz Core
//!
//! Central coordination layer. `QuizApp` is built once at startup and handed
//! by reference to every screen; nothing here is a global.

mod app;
mod config;
mod error;
mod play;

pub use app::QuizApp;
pub use config::Config;
pub use error::CoreError;
pub use play::{answer_for, PlayEvent, Playthrough};

// Re-export core components
pub use swipequiz_gesture::{GestureConfig, SwipeDirection, SwipeEvent, SwipeInterpreter, SwipeState};
pub use swipequiz_session::{AnswerRecord, AnswerSession, Grade, ScoreSummary, SessionError, SessionState};
pub use swipequiz_storage::{Database, MemoryBackend, Namespace, Storage, StorageError};
pub use swipequiz_store::{
    CorrectAnswer, NewQuiz, NewQuizSet, Quiz, QuizSet, QuizSetUpdate, QuizStore, QuizUpdate,
    StoreError, ValidationError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

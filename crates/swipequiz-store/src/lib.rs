//! SwipeQuiz Entity Store
//!
//! Quiz sets and their two-option quizzes.
//! - Every mutation is persisted before it becomes visible
//! - Deleting a set deletes its quizzes
//! - Play order is insertion order

mod error;
mod quiz;
mod seed;
mod set;
mod store;
mod validate;

pub use error::{StoreError, ValidationError};
pub use quiz::{CorrectAnswer, NewQuiz, Quiz, QuizUpdate};
pub use set::{NewQuizSet, QuizSet, QuizSetUpdate};
pub use store::QuizStore;

pub type Result<T> = std::result::Result<T, StoreError>;

//! SwipeQuiz Gesture Interpreter
//!
//! Turns a horizontal drag into a left/right answer:
//! ```text
//! Idle
//!   ↓ drag start
//! Dragging ── release below threshold ──→ Idle
//!   ↓ release at or past threshold
//! Feedback
//!   ↓ feedback window elapsed
//! Idle
//! ```
//! A tap on a choice control commits directly from Idle.

mod config;
mod error;
mod interpreter;
mod state;

pub use config::GestureConfig;
pub use error::GestureError;
pub use interpreter::{SwipeDirection, SwipeEvent, SwipeInterpreter};
pub use state::SwipeState;

pub type Result<T> = std::result::Result<T, GestureError>;

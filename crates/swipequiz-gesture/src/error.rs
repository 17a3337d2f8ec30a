//! Gesture error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

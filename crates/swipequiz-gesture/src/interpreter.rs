//! Swipe interpreter
//!
//! Fed raw drag offsets and taps by the card view; emits progress, cancel
//! and commit events. Holds no quiz data.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::config::GestureConfig;
use crate::error::GestureError;
use crate::state::SwipeState;
use crate::Result;

/// Which way the card went. Left answers A, right answers B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    fn from_offset(offset: f64) -> Self {
        if offset < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// Signed drag progress in -1..=1, negative toward A
    Progress(f64),
    /// Released short of the threshold; progress is back to 0
    Cancelled,
    /// The answer for the current question
    Committed(SwipeDirection),
}

#[derive(Debug, Clone)]
pub struct SwipeInterpreter {
    config: GestureConfig,
    threshold: f64,
    state: SwipeState,
    /// Latest drag offset from the gesture's start point
    offset: f64,
    feedback_started_at: Option<Instant>,
}

impl SwipeInterpreter {
    pub fn new(config: GestureConfig, viewport_width: Option<f64>) -> Self {
        let threshold = config.threshold(viewport_width);

        Self {
            config,
            threshold,
            state: SwipeState::Idle,
            offset: 0.0,
            feedback_started_at: None,
        }
    }

    pub fn set_viewport_width(&mut self, viewport_width: Option<f64>) {
        self.threshold = self.config.threshold(viewport_width);
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn is_accepting_input(&self) -> bool {
        self.state.accepts_input()
    }

    /// Current signed progress toward a commit
    pub fn progress(&self) -> f64 {
        if self.state != SwipeState::Dragging {
            return 0.0;
        }
        let magnitude = (self.offset.abs() / self.threshold).clamp(0.0, 1.0);
        if self.offset < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }

    fn transition_to(&mut self, new_state: SwipeState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(GestureError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(from = %self.state, to = %new_state, "Swipe state transition");

        self.state = new_state;
        match new_state {
            SwipeState::Feedback => self.feedback_started_at = Some(Instant::now()),
            SwipeState::Idle | SwipeState::Dragging => {
                self.feedback_started_at = None;
                self.offset = 0.0;
            }
        }

        Ok(())
    }

    /// Finger down on the card. Returns false when input is locked.
    pub fn begin_drag(&mut self) -> bool {
        if !self.is_accepting_input() {
            return false;
        }
        self.transition_to(SwipeState::Dragging).is_ok()
    }

    pub fn drag_to(&mut self, offset: f64) -> Option<SwipeEvent> {
        if self.state != SwipeState::Dragging {
            return None;
        }
        self.offset = offset;
        Some(SwipeEvent::Progress(self.progress()))
    }

    /// Finger up at the last reported offset
    pub fn release(&mut self) -> Option<SwipeEvent> {
        self.release_at(self.offset)
    }

    pub fn release_at(&mut self, offset: f64) -> Option<SwipeEvent> {
        if self.state != SwipeState::Dragging {
            return None;
        }

        if offset.abs() >= self.threshold {
            let direction = SwipeDirection::from_offset(offset);
            self.transition_to(SwipeState::Feedback).ok()?;
            tracing::debug!(%direction, offset, "Swipe committed");
            Some(SwipeEvent::Committed(direction))
        } else {
            self.transition_to(SwipeState::Idle).ok()?;
            Some(SwipeEvent::Cancelled)
        }
    }

    /// Tap on a choice control. Ignored unless Idle.
    pub fn tap(&mut self, direction: SwipeDirection) -> Option<SwipeEvent> {
        if !self.is_accepting_input() {
            return None;
        }
        self.transition_to(SwipeState::Feedback).ok()?;
        tracing::debug!(%direction, "Choice tapped");
        Some(SwipeEvent::Committed(direction))
    }

    /// Time left in the feedback window
    pub fn feedback_remaining(&self, now: Instant) -> Option<Duration> {
        let started = self.feedback_started_at?;
        Some(
            self.config
                .feedback_duration()
                .saturating_sub(now.saturating_duration_since(started)),
        )
    }

    /// Close the feedback window once it has run its course.
    ///
    /// Returns true when this call moved the interpreter back to Idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.feedback_remaining(now) {
            Some(remaining) if remaining.is_zero() => self.finish_feedback(),
            _ => false,
        }
    }

    /// End the feedback window now
    pub fn finish_feedback(&mut self) -> bool {
        if self.state != SwipeState::Feedback {
            return false;
        }
        self.transition_to(SwipeState::Idle).is_ok()
    }

    /// Abandon whatever is in progress
    pub fn reset(&mut self) {
        self.state = SwipeState::Idle;
        self.offset = 0.0;
        self.feedback_started_at = None;
    }
}

impl Default for SwipeInterpreter {
    fn default() -> Self {
        Self::new(GestureConfig::default(), None)
    }
}

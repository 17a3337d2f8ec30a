//! Swipe state machine

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeState {
    /// Waiting for a drag or a tap
    Idle,
    /// Finger down, card following the drag
    Dragging,
    /// Answer committed, showing right/wrong
    Feedback,
}

impl SwipeState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: SwipeState) -> bool {
        match (self, target) {
            (SwipeState::Idle, SwipeState::Idle) => true,
            (SwipeState::Idle, SwipeState::Dragging) => true,
            // Tap on a choice control
            (SwipeState::Idle, SwipeState::Feedback) => true,
            // Released short of the threshold
            (SwipeState::Dragging, SwipeState::Idle) => true,
            (SwipeState::Dragging, SwipeState::Feedback) => true,
            (SwipeState::Feedback, SwipeState::Idle) => true,
            _ => false,
        }
    }

    /// Only Idle accepts a new drag or tap
    pub fn accepts_input(&self) -> bool {
        matches!(self, SwipeState::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeState::Idle => "idle",
            SwipeState::Dragging => "dragging",
            SwipeState::Feedback => "feedback",
        }
    }
}

impl std::fmt::Display for SwipeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SwipeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(SwipeState::Idle),
            "dragging" => Ok(SwipeState::Dragging),
            "feedback" => Ok(SwipeState::Feedback),
            _ => Err(format!("Unknown swipe state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(SwipeState::Idle.can_transition_to(SwipeState::Dragging));
        assert!(SwipeState::Idle.can_transition_to(SwipeState::Feedback));
        assert!(SwipeState::Dragging.can_transition_to(SwipeState::Idle));
        assert!(SwipeState::Dragging.can_transition_to(SwipeState::Feedback));
        assert!(SwipeState::Feedback.can_transition_to(SwipeState::Idle));
    }

    #[test]
    fn test_invalid_transitions() {
        // A second commit for the same question
        assert!(!SwipeState::Feedback.can_transition_to(SwipeState::Feedback));
        // No dragging during feedback
        assert!(!SwipeState::Feedback.can_transition_to(SwipeState::Dragging));
        assert!(!SwipeState::Dragging.can_transition_to(SwipeState::Dragging));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dragging".parse::<SwipeState>().unwrap(), SwipeState::Dragging);
        assert!("flying".parse::<SwipeState>().is_err());
    }
}

//! Quiz card data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the two answer options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrectAnswer {
    A,
    B,
}

impl CorrectAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectAnswer::A => "A",
            CorrectAnswer::B => "B",
        }
    }

    pub fn other(&self) -> CorrectAnswer {
        match self {
            CorrectAnswer::A => CorrectAnswer::B,
            CorrectAnswer::B => CorrectAnswer::A,
        }
    }
}

impl std::fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CorrectAnswer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(CorrectAnswer::A),
            "B" => Ok(CorrectAnswer::B),
            _ => Err(format!("Unknown answer option: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    /// Owning set
    pub set_id: String,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub correct_answer: CorrectAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    pub(crate) fn create(new: NewQuiz) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            set_id: new.set_id,
            question: new.question,
            option_a: new.option_a,
            option_b: new.option_b,
            correct_answer: new.correct_answer,
            explanation: new.explanation,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn apply(&mut self, update: QuizUpdate) {
        if let Some(set_id) = update.set_id {
            self.set_id = set_id;
        }
        if let Some(question) = update.question {
            self.question = question;
        }
        if let Some(option_a) = update.option_a {
            self.option_a = option_a;
        }
        if let Some(option_b) = update.option_b {
            self.option_b = option_b;
        }
        if let Some(correct_answer) = update.correct_answer {
            self.correct_answer = correct_answer;
        }
        if let Some(explanation) = update.explanation {
            self.explanation = explanation;
        }
        self.updated_at = Utc::now();
    }

    /// Text shown for the given option
    pub fn option_text(&self, answer: CorrectAnswer) -> &str {
        match answer {
            CorrectAnswer::A => &self.option_a,
            CorrectAnswer::B => &self.option_b,
        }
    }

    pub fn is_correct(&self, selected: CorrectAnswer) -> bool {
        selected == self.correct_answer
    }
}

/// Fields supplied by the author when creating a quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub set_id: String,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub correct_answer: CorrectAnswer,
    pub explanation: Option<String>,
}

impl NewQuiz {
    pub fn new(
        set_id: impl Into<String>,
        question: impl Into<String>,
        option_a: impl Into<String>,
        option_b: impl Into<String>,
        correct_answer: CorrectAnswer,
    ) -> Self {
        Self {
            set_id: set_id.into(),
            question: question.into(),
            option_a: option_a.into(),
            option_b: option_b.into(),
            correct_answer,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// Partial update for a quiz. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizUpdate {
    pub set_id: Option<String>,
    pub question: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub correct_answer: Option<CorrectAnswer>,
    /// `Some(None)` clears the explanation
    pub explanation: Option<Option<String>>,
}

impl From<NewQuiz> for QuizUpdate {
    /// Replace every editable field, as the quiz editor does on save
    fn from(new: NewQuiz) -> Self {
        Self {
            set_id: Some(new.set_id),
            question: Some(new.question),
            option_a: Some(new.option_a),
            option_b: Some(new.option_b),
            correct_answer: Some(new.correct_answer),
            explanation: Some(new.explanation),
        }
    }
}

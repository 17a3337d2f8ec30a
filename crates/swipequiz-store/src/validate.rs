//! Caller-side validation of author input
//!
//! The store accepts whatever it is given. Editors run these checks first and
//! only hand over payloads that pass.

use crate::error::ValidationError;
use crate::quiz::{NewQuiz, QuizUpdate};
use crate::set::{NewQuizSet, QuizSetUpdate};

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Trimmed optional text, with blank mapped to `None`
fn optional_text(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn finish(fields: Vec<&'static str>) -> Result<(), ValidationError> {
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields })
    }
}

impl NewQuizSet {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if is_blank(&self.title) {
            fields.push("title");
        }
        finish(fields)
    }

    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: optional_text(self.description),
        }
    }
}

impl QuizSetUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if self.title.as_deref().is_some_and(is_blank) {
            fields.push("title");
        }
        finish(fields)
    }

    pub fn normalized(self) -> Self {
        Self {
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description.map(optional_text),
        }
    }
}

impl NewQuiz {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if is_blank(&self.question) {
            fields.push("question");
        }
        if is_blank(&self.option_a) {
            fields.push("optionA");
        }
        if is_blank(&self.option_b) {
            fields.push("optionB");
        }
        finish(fields)
    }

    pub fn normalized(self) -> Self {
        Self {
            set_id: self.set_id,
            question: self.question.trim().to_string(),
            option_a: self.option_a.trim().to_string(),
            option_b: self.option_b.trim().to_string(),
            correct_answer: self.correct_answer,
            explanation: optional_text(self.explanation),
        }
    }
}

impl QuizUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if self.question.as_deref().is_some_and(is_blank) {
            fields.push("question");
        }
        if self.option_a.as_deref().is_some_and(is_blank) {
            fields.push("optionA");
        }
        if self.option_b.as_deref().is_some_and(is_blank) {
            fields.push("optionB");
        }
        finish(fields)
    }

    pub fn normalized(self) -> Self {
        Self {
            set_id: self.set_id,
            question: self.question.map(|s| s.trim().to_string()),
            option_a: self.option_a.map(|s| s.trim().to_string()),
            option_b: self.option_b.map(|s| s.trim().to_string()),
            correct_answer: self.correct_answer,
            explanation: self.explanation.map(optional_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::CorrectAnswer;

    #[test]
    fn test_blank_title_rejected() {
        let err = NewQuizSet::new("   ").validate().unwrap_err();
        assert_eq!(err.fields, vec!["title"]);
        assert!(NewQuizSet::new("Capitals").validate().is_ok());
    }

    #[test]
    fn test_every_blank_quiz_field_reported() {
        let quiz = NewQuiz::new("set-1", "", " ", "Tokyo", CorrectAnswer::B);
        let err = quiz.validate().unwrap_err();
        assert!(err.contains("question"));
        assert!(err.contains("optionA"));
        assert!(!err.contains("optionB"));
        assert_eq!(err.to_string(), "required fields are empty: question, optionA");
    }

    #[test]
    fn test_normalized_trims_and_drops_blank_optionals() {
        let set = NewQuizSet::new("  Capitals ").with_description("   ").normalized();
        assert_eq!(set.title, "Capitals");
        assert_eq!(set.description, None);

        let quiz = NewQuiz::new("set-1", " Q ", " A ", " B ", CorrectAnswer::A)
            .with_explanation(" because ")
            .normalized();
        assert_eq!(quiz.question, "Q");
        assert_eq!(quiz.option_a, "A");
        assert_eq!(quiz.explanation.as_deref(), Some("because"));
    }

    #[test]
    fn test_update_only_checks_supplied_fields() {
        assert!(QuizUpdate::default().validate().is_ok());

        let update = QuizUpdate {
            option_b: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(update.validate().unwrap_err().fields, vec!["optionB"]);

        let update = QuizSetUpdate {
            title: Some(" ".to_string()),
            description: Some(Some("  ".to_string())),
        };
        assert!(update.validate().is_err());
        assert_eq!(update.normalized().description, Some(None));
    }
}

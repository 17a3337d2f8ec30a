//! Answer record data structure

use serde::{Deserialize, Serialize};
use swipequiz_store::{CorrectAnswer, Quiz};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// Copy of the quiz as it was when answered
    pub quiz: Quiz,
    pub selected_answer: CorrectAnswer,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(quiz: &Quiz, selected_answer: CorrectAnswer) -> Self {
        Self {
            quiz: quiz.clone(),
            selected_answer,
            is_correct: quiz.is_correct(selected_answer),
        }
    }

    pub fn selected_text(&self) -> &str {
        self.quiz.option_text(self.selected_answer)
    }

    pub fn correct_text(&self) -> &str {
        self.quiz.option_text(self.quiz.correct_answer)
    }
}

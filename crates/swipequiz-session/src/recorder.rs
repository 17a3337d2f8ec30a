//! Answer session recorder

use swipequiz_storage::{Namespace, ANSWER_SESSION_KEY};
use swipequiz_store::{CorrectAnswer, Quiz};

use crate::record::AnswerRecord;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No playthrough in progress
    Empty,
    /// A playthrough has started; zero or more answers recorded
    Recording,
}

/// Clones share the same session namespace.
#[derive(Debug, Clone)]
pub struct AnswerSession {
    session: Namespace,
}

impl AnswerSession {
    pub fn new(session: Namespace) -> Self {
        Self { session }
    }

    /// Drop any previous playthrough and start recording from zero
    pub fn init_session(&self) -> Result<()> {
        self.session
            .set_json::<[AnswerRecord]>(ANSWER_SESSION_KEY, &[])?;

        tracing::debug!("Started answer session");
        Ok(())
    }

    /// Append the answer to `quiz`. Records are never edited or removed singly.
    pub fn add_record(&self, quiz: &Quiz, selected: CorrectAnswer) -> Result<AnswerRecord> {
        let mut records = self.records()?;
        let record = AnswerRecord::new(quiz, selected);
        records.push(record.clone());

        self.session.set_json(ANSWER_SESSION_KEY, &records)?;

        tracing::debug!(
            quiz_id = %quiz.id,
            selected = %selected,
            is_correct = record.is_correct,
            position = records.len(),
            "Recorded answer"
        );

        Ok(record)
    }

    /// Answers in the order they were given; empty when no session exists
    pub fn records(&self) -> Result<Vec<AnswerRecord>> {
        let records: Option<Vec<AnswerRecord>> = self.session.get_json(ANSWER_SESSION_KEY)?;
        Ok(records.unwrap_or_default())
    }

    pub fn clear_session(&self) -> Result<()> {
        self.session.remove(ANSWER_SESSION_KEY)?;
        tracing::debug!("Cleared answer session");
        Ok(())
    }

    pub fn state(&self) -> Result<SessionState> {
        Ok(match self.session.get_raw(ANSWER_SESSION_KEY)? {
            Some(_) => SessionState::Recording,
            None => SessionState::Empty,
        })
    }
}

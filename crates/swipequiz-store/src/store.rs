//! Quiz Store
//!
//! Single source of truth for sets and quizzes.
//! Each mutation builds the next collection, persists it, and only then
//! replaces the in-memory copy, so a failed write leaves memory matching
//! what is on disk.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use swipequiz_storage::{Namespace, QUIZZES_KEY, SETS_KEY};

use crate::quiz::{NewQuiz, Quiz, QuizUpdate};
use crate::seed::seed_content;
use crate::set::{NewQuizSet, QuizSet, QuizSetUpdate};
use crate::Result;

#[derive(Debug, Default)]
struct StoreState {
    sets: Vec<QuizSet>,
    quizzes: Vec<Quiz>,
}

pub struct QuizStore {
    state: Arc<RwLock<StoreState>>,
    /// Durable namespace holding the `sets` and `quizzes` keys
    durable: Namespace,
}

impl QuizStore {
    /// Load both collections, seeding demo content on first run
    pub fn load(durable: Namespace) -> Result<Self> {
        let stored_sets: Option<Vec<QuizSet>> = durable.get_json(SETS_KEY)?;

        let state = match stored_sets {
            Some(sets) if !sets.is_empty() => {
                let quizzes: Vec<Quiz> = durable.get_json(QUIZZES_KEY)?.unwrap_or_default();
                StoreState { sets, quizzes }
            }
            _ => {
                let (set, quizzes) = seed_content();
                let sets = vec![set];
                durable.set_many_json(&[(SETS_KEY, &sets), (QUIZZES_KEY, &quizzes)])?;

                tracing::info!(
                    set_id = %sets[0].id,
                    quiz_count = quizzes.len(),
                    "Seeded demonstration set"
                );
                StoreState { sets, quizzes }
            }
        };

        tracing::info!(
            set_count = state.sets.len(),
            quiz_count = state.quizzes.len(),
            "Loaded quiz store"
        );

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            durable,
        })
    }

    // === Queries ===

    pub fn sets(&self) -> Vec<QuizSet> {
        self.state.read().sets.clone()
    }

    pub fn quizzes(&self) -> Vec<Quiz> {
        self.state.read().quizzes.clone()
    }

    pub fn get_set(&self, set_id: &str) -> Option<QuizSet> {
        self.state
            .read()
            .sets
            .iter()
            .find(|s| s.id == set_id)
            .cloned()
    }

    pub fn get_quiz(&self, quiz_id: &str) -> Option<Quiz> {
        self.state
            .read()
            .quizzes
            .iter()
            .find(|q| q.id == quiz_id)
            .cloned()
    }

    /// Quizzes of a set in insertion order, which is also play order
    pub fn quizzes_by_set_id(&self, set_id: &str) -> Vec<Quiz> {
        self.state
            .read()
            .quizzes
            .iter()
            .filter(|q| q.set_id == set_id)
            .cloned()
            .collect()
    }

    /// Number of quizzes per set id
    pub fn quiz_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for quiz in &self.state.read().quizzes {
            *counts.entry(quiz.set_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Sets that have at least one quiz to play
    pub fn playable_sets(&self) -> Vec<QuizSet> {
        let state = self.state.read();
        state
            .sets
            .iter()
            .filter(|s| state.quizzes.iter().any(|q| q.set_id == s.id))
            .cloned()
            .collect()
    }

    // === Set mutations ===

    pub fn add_set(&self, new: NewQuizSet) -> Result<QuizSet> {
        let set = QuizSet::create(new);

        let mut state = self.state.write();
        let mut sets = state.sets.clone();
        sets.push(set.clone());

        self.persist_sets(&sets)?;
        state.sets = sets;

        tracing::info!(set_id = %set.id, title = %set.title, "Created quiz set");

        Ok(set)
    }

    /// Create a set together with its first quizzes in one write.
    ///
    /// The `set_id` of each draft is replaced with the new set's id.
    pub fn add_set_with_quizzes(
        &self,
        new: NewQuizSet,
        drafts: Vec<NewQuiz>,
    ) -> Result<(QuizSet, Vec<Quiz>)> {
        let set = QuizSet::create(new);
        let created: Vec<Quiz> = drafts
            .into_iter()
            .map(|mut draft| {
                draft.set_id = set.id.clone();
                Quiz::create(draft)
            })
            .collect();

        let mut state = self.state.write();
        let mut sets = state.sets.clone();
        sets.push(set.clone());
        let mut quizzes = state.quizzes.clone();
        quizzes.extend(created.iter().cloned());

        self.persist_both(&sets, &quizzes)?;
        state.sets = sets;
        state.quizzes = quizzes;

        tracing::info!(
            set_id = %set.id,
            title = %set.title,
            quiz_count = created.len(),
            "Created quiz set with quizzes"
        );

        Ok((set, created))
    }

    /// Merge `update` into the set. Unknown ids are ignored.
    pub fn update_set(&self, set_id: &str, update: QuizSetUpdate) -> Result<Option<QuizSet>> {
        let mut state = self.state.write();
        let Some(index) = state.sets.iter().position(|s| s.id == set_id) else {
            tracing::debug!(set_id = %set_id, "Update for unknown set ignored");
            return Ok(None);
        };

        let mut sets = state.sets.clone();
        sets[index].apply(update);
        let updated = sets[index].clone();

        self.persist_sets(&sets)?;
        state.sets = sets;

        tracing::info!(set_id = %set_id, "Updated quiz set");

        Ok(Some(updated))
    }

    /// Delete a set and every quiz that belongs to it.
    ///
    /// Returns whether a set was removed.
    pub fn delete_set(&self, set_id: &str) -> Result<bool> {
        let mut state = self.state.write();

        let sets: Vec<QuizSet> = state
            .sets
            .iter()
            .filter(|s| s.id != set_id)
            .cloned()
            .collect();
        let quizzes: Vec<Quiz> = state
            .quizzes
            .iter()
            .filter(|q| q.set_id != set_id)
            .cloned()
            .collect();

        let removed_set = sets.len() != state.sets.len();
        let removed_quizzes = state.quizzes.len() - quizzes.len();
        if !removed_set && removed_quizzes == 0 {
            tracing::debug!(set_id = %set_id, "Delete for unknown set ignored");
            return Ok(false);
        }

        self.persist_both(&sets, &quizzes)?;
        state.sets = sets;
        state.quizzes = quizzes;

        tracing::info!(
            set_id = %set_id,
            removed_quizzes,
            "Deleted quiz set"
        );

        Ok(removed_set)
    }

    // === Quiz mutations ===

    pub fn add_quiz(&self, new: NewQuiz) -> Result<Quiz> {
        let quiz = Quiz::create(new);

        let mut state = self.state.write();
        let mut quizzes = state.quizzes.clone();
        quizzes.push(quiz.clone());

        self.persist_quizzes(&quizzes)?;
        state.quizzes = quizzes;

        tracing::info!(quiz_id = %quiz.id, set_id = %quiz.set_id, "Created quiz");

        Ok(quiz)
    }

    /// Merge `update` into the quiz. Unknown ids are ignored.
    pub fn update_quiz(&self, quiz_id: &str, update: QuizUpdate) -> Result<Option<Quiz>> {
        let mut state = self.state.write();
        let Some(index) = state.quizzes.iter().position(|q| q.id == quiz_id) else {
            tracing::debug!(quiz_id = %quiz_id, "Update for unknown quiz ignored");
            return Ok(None);
        };

        let mut quizzes = state.quizzes.clone();
        quizzes[index].apply(update);
        let updated = quizzes[index].clone();

        self.persist_quizzes(&quizzes)?;
        state.quizzes = quizzes;

        tracing::info!(quiz_id = %quiz_id, "Updated quiz");

        Ok(Some(updated))
    }

    /// Returns whether a quiz was removed
    pub fn delete_quiz(&self, quiz_id: &str) -> Result<bool> {
        let mut state = self.state.write();
        if !state.quizzes.iter().any(|q| q.id == quiz_id) {
            tracing::debug!(quiz_id = %quiz_id, "Delete for unknown quiz ignored");
            return Ok(false);
        }

        let quizzes: Vec<Quiz> = state
            .quizzes
            .iter()
            .filter(|q| q.id != quiz_id)
            .cloned()
            .collect();

        self.persist_quizzes(&quizzes)?;
        state.quizzes = quizzes;

        tracing::info!(quiz_id = %quiz_id, "Deleted quiz");

        Ok(true)
    }

    // === Persistence ===

    fn persist_sets(&self, sets: &[QuizSet]) -> Result<()> {
        self.durable.set_json(SETS_KEY, sets).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist quiz sets");
            e.into()
        })
    }

    fn persist_quizzes(&self, quizzes: &[Quiz]) -> Result<()> {
        self.durable.set_json(QUIZZES_KEY, quizzes).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist quizzes");
            e.into()
        })
    }

    fn persist_both(&self, sets: &[QuizSet], quizzes: &[Quiz]) -> Result<()> {
        self.durable
            .set_many_json(&[(SETS_KEY, &sets), (QUIZZES_KEY, &quizzes)])
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to persist quiz sets and quizzes");
                e.into()
            })
    }
}

impl Clone for QuizStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            durable: self.durable.clone(),
        }
    }
}

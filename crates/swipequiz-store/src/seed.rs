//! Built-in demonstration content for first run

use crate::quiz::{CorrectAnswer, NewQuiz, Quiz};
use crate::set::{NewQuizSet, QuizSet};

const SEED_TITLE: &str = "Getting started";
const SEED_DESCRIPTION: &str = "A short warm-up. Swipe left for A, right for B.";

const SEED_QUIZZES: &[(&str, &str, &str, CorrectAnswer, &str)] = &[
    (
        "Which planet is closest to the Sun?",
        "Mercury",
        "Venus",
        CorrectAnswer::A,
        "Mercury orbits at about 0.39 AU, closer than any other planet.",
    ),
    (
        "What is the largest ocean on Earth?",
        "Atlantic Ocean",
        "Pacific Ocean",
        CorrectAnswer::B,
        "The Pacific covers roughly a third of the planet's surface.",
    ),
    (
        "How many sides does a hexagon have?",
        "6",
        "8",
        CorrectAnswer::A,
        "Hexa- means six. An eight-sided shape is an octagon.",
    ),
    (
        "Which gas do plants mainly absorb for photosynthesis?",
        "Oxygen",
        "Carbon dioxide",
        CorrectAnswer::B,
        "Plants take in carbon dioxide and release oxygen.",
    ),
    (
        "In which direction does the Sun rise?",
        "East",
        "West",
        CorrectAnswer::A,
        "The Earth rotates from west to east, so the Sun appears in the east.",
    ),
];

/// The demonstration set and its quizzes, in play order
pub(crate) fn seed_content() -> (QuizSet, Vec<Quiz>) {
    let set = QuizSet::create(NewQuizSet::new(SEED_TITLE).with_description(SEED_DESCRIPTION));

    let quizzes: Vec<Quiz> = SEED_QUIZZES
        .iter()
        .map(|(question, a, b, correct, explanation)| {
            Quiz::create(
                NewQuiz::new(set.id.clone(), *question, *a, *b, *correct)
                    .with_explanation(*explanation),
            )
        })
        .collect();

    (set, quizzes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_quizzes_belong_to_seed_set() {
        let (set, quizzes) = seed_content();
        assert_eq!(quizzes.len(), SEED_QUIZZES.len());
        assert!(quizzes.iter().all(|q| q.set_id == set.id));
        assert!(quizzes
            .iter()
            .all(|q| !q.question.is_empty() && !q.option_a.is_empty() && !q.option_b.is_empty()));
    }
}

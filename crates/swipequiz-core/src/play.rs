//! One playthrough of a quiz set
//!
//! Wires the swipe interpreter to the answer session: a committed swipe or
//! tap records exactly one answer for the current quiz, the feedback window
//! holds input, then the next quiz comes up.

use std::time::Instant;

use swipequiz_gesture::{GestureConfig, SwipeDirection, SwipeEvent, SwipeInterpreter, SwipeState};
use swipequiz_session::{AnswerRecord, AnswerSession};
use swipequiz_store::{CorrectAnswer, Quiz, QuizSet};

use crate::Result;

/// Left answers A, right answers B
pub fn answer_for(direction: SwipeDirection) -> CorrectAnswer {
    match direction {
        SwipeDirection::Left => CorrectAnswer::A,
        SwipeDirection::Right => CorrectAnswer::B,
    }
}

fn direction_for(answer: CorrectAnswer) -> SwipeDirection {
    match answer {
        CorrectAnswer::A => SwipeDirection::Left,
        CorrectAnswer::B => SwipeDirection::Right,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayEvent {
    /// Drag emphasis for the choice controls, -1..=1
    Progress(f64),
    /// Drag released short of the threshold
    Cancelled,
    /// Answer recorded; feedback window is open
    Answered(AnswerRecord),
    /// Feedback over, quiz at this zero-based index is up
    Advanced(usize),
    /// Feedback over on the last quiz
    Finished,
}

pub struct Playthrough {
    set: QuizSet,
    quizzes: Vec<Quiz>,
    index: usize,
    interpreter: SwipeInterpreter,
    session: AnswerSession,
    finished: bool,
}

impl Playthrough {
    /// `quizzes` must not be empty
    pub(crate) fn new(
        set: QuizSet,
        quizzes: Vec<Quiz>,
        session: AnswerSession,
        gesture: GestureConfig,
        viewport_width: Option<f64>,
    ) -> Self {
        Self {
            set,
            quizzes,
            index: 0,
            interpreter: SwipeInterpreter::new(gesture, viewport_width),
            session,
            finished: false,
        }
    }

    pub fn set(&self) -> &QuizSet {
        &self.set
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn current_quiz(&self) -> Option<&Quiz> {
        if self.finished {
            return None;
        }
        self.quizzes.get(self.index)
    }

    /// 1-based position and total, as shown in the header
    pub fn position(&self) -> (usize, usize) {
        ((self.index + 1).min(self.quizzes.len()), self.quizzes.len())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn swipe_state(&self) -> SwipeState {
        self.interpreter.state()
    }

    pub fn is_accepting_input(&self) -> bool {
        !self.finished && self.interpreter.is_accepting_input()
    }

    pub fn set_viewport_width(&mut self, viewport_width: Option<f64>) {
        self.interpreter.set_viewport_width(viewport_width);
    }

    pub fn begin_drag(&mut self) -> bool {
        !self.finished && self.interpreter.begin_drag()
    }

    pub fn drag_to(&mut self, offset: f64) -> Option<PlayEvent> {
        match self.interpreter.drag_to(offset)? {
            SwipeEvent::Progress(p) => Some(PlayEvent::Progress(p)),
            _ => None,
        }
    }

    pub fn release(&mut self) -> Result<Option<PlayEvent>> {
        let event = self.interpreter.release();
        self.handle(event)
    }

    pub fn release_at(&mut self, offset: f64) -> Result<Option<PlayEvent>> {
        let event = self.interpreter.release_at(offset);
        self.handle(event)
    }

    /// Tap on the A or B control. Ignored unless Idle.
    pub fn tap(&mut self, answer: CorrectAnswer) -> Result<Option<PlayEvent>> {
        if self.finished {
            return Ok(None);
        }
        let event = self.interpreter.tap(direction_for(answer));
        self.handle(event)
    }

    /// Advance once the feedback window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<PlayEvent> {
        if self.interpreter.poll(now) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Skip the rest of the feedback window
    pub fn finish_feedback(&mut self) -> Option<PlayEvent> {
        if self.interpreter.finish_feedback() {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Abandon the playthrough; recorded answers are discarded
    pub fn quit(self) -> Result<()> {
        self.session.clear_session()?;
        tracing::info!(set_id = %self.set.id, "Quit playthrough");
        Ok(())
    }

    fn handle(&mut self, event: Option<SwipeEvent>) -> Result<Option<PlayEvent>> {
        let Some(event) = event else {
            return Ok(None);
        };

        match event {
            SwipeEvent::Progress(p) => Ok(Some(PlayEvent::Progress(p))),
            SwipeEvent::Cancelled => Ok(Some(PlayEvent::Cancelled)),
            SwipeEvent::Committed(direction) => {
                let Some(quiz) = self.quizzes.get(self.index) else {
                    self.interpreter.reset();
                    return Ok(None);
                };

                match self.session.add_record(quiz, answer_for(direction)) {
                    Ok(record) => Ok(Some(PlayEvent::Answered(record))),
                    Err(e) => {
                        // Nothing was recorded, so the question stays open
                        tracing::error!(quiz_id = %quiz.id, error = %e, "Failed to record answer");
                        self.interpreter.reset();
                        Err(e.into())
                    }
                }
            }
        }
    }

    fn advance(&mut self) -> PlayEvent {
        let next = self.index + 1;
        if next >= self.quizzes.len() {
            self.finished = true;
            tracing::info!(set_id = %self.set.id, "Finished playthrough");
            PlayEvent::Finished
        } else {
            self.index = next;
            PlayEvent::Advanced(next)
        }
    }
}

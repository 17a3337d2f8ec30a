//! Application state container
//!
//! Owns the storage namespaces, the quiz store and the answer session.
//! Screens call through here; editor operations validate input before the
//! store sees it.

use std::sync::Arc;

use swipequiz_session::{AnswerRecord, AnswerSession, ScoreSummary};
use swipequiz_storage::{Database, MemoryBackend, Storage};
use swipequiz_store::{NewQuiz, NewQuizSet, Quiz, QuizSet, QuizSetUpdate, QuizStore, QuizUpdate};

use crate::config::Config;
use crate::error::CoreError;
use crate::play::Playthrough;
use crate::Result;

pub struct QuizApp {
    config: Config,
    storage: Storage,
    store: QuizStore,
    session: AnswerSession,
}

impl QuizApp {
    /// Open the database at `config.database_path` and load the store
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let storage = Storage::new(Arc::new(db), Arc::new(session_backend(&config)));

        Self::with_storage(config, storage)
    }

    /// Everything in memory; nothing survives the process
    pub fn in_memory(config: Config) -> Result<Self> {
        let storage = Storage::new(
            Arc::new(MemoryBackend::new()),
            Arc::new(session_backend(&config)),
        );
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: Config, storage: Storage) -> Result<Self> {
        config.validate()?;

        let store = QuizStore::load(storage.durable.clone())?;
        let session = AnswerSession::new(storage.session.clone());

        tracing::info!(
            database = %config.database_path.display(),
            "Quiz app initialized"
        );

        Ok(Self {
            config,
            storage,
            store,
            session,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    pub fn session(&self) -> &AnswerSession {
        &self.session
    }

    // === Editor operations ===

    pub fn create_set(&self, new: NewQuizSet, quizzes: Vec<NewQuiz>) -> Result<QuizSet> {
        let new = new.normalized();
        new.validate()?;

        let quizzes: Vec<NewQuiz> = quizzes.into_iter().map(NewQuiz::normalized).collect();
        for quiz in &quizzes {
            quiz.validate()?;
        }

        let (set, _) = self.store.add_set_with_quizzes(new, quizzes)?;
        Ok(set)
    }

    pub fn edit_set(&self, set_id: &str, update: QuizSetUpdate) -> Result<Option<QuizSet>> {
        let update = update.normalized();
        update.validate()?;
        Ok(self.store.update_set(set_id, update)?)
    }

    pub fn create_quiz(&self, new: NewQuiz) -> Result<Quiz> {
        let new = new.normalized();
        new.validate()?;
        Ok(self.store.add_quiz(new)?)
    }

    pub fn edit_quiz(&self, quiz_id: &str, update: QuizUpdate) -> Result<Option<Quiz>> {
        let update = update.normalized();
        update.validate()?;
        Ok(self.store.update_quiz(quiz_id, update)?)
    }

    /// Callers confirm with the user before deleting
    pub fn delete_set(&self, set_id: &str) -> Result<bool> {
        Ok(self.store.delete_set(set_id)?)
    }

    pub fn delete_quiz(&self, quiz_id: &str) -> Result<bool> {
        Ok(self.store.delete_quiz(quiz_id)?)
    }

    // === Play ===

    /// Start a fresh playthrough of a set, discarding any previous answers
    pub fn start_play(&self, set_id: &str) -> Result<Playthrough> {
        self.start_play_with_viewport(set_id, None)
    }

    pub fn start_play_with_viewport(
        &self,
        set_id: &str,
        viewport_width: Option<f64>,
    ) -> Result<Playthrough> {
        let set = self
            .store
            .get_set(set_id)
            .ok_or_else(|| CoreError::SetNotFound(set_id.to_string()))?;

        let quizzes = self.store.quizzes_by_set_id(set_id);
        if quizzes.is_empty() {
            return Err(CoreError::NoQuizzes(set_id.to_string()));
        }

        self.session.init_session()?;

        tracing::info!(
            set_id = %set.id,
            title = %set.title,
            quiz_count = quizzes.len(),
            "Started playthrough"
        );

        Ok(Playthrough::new(
            set,
            quizzes,
            self.session.clone(),
            self.config.gesture.clone(),
            viewport_width,
        ))
    }

    // === Results ===

    pub fn records(&self) -> Result<Vec<AnswerRecord>> {
        Ok(self.session.records()?)
    }

    /// Score of the last playthrough, `None` when nothing was answered
    pub fn results(&self) -> Result<Option<ScoreSummary>> {
        let records = self.session.records()?;
        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(ScoreSummary::from_records(&records)))
    }

    /// Play the same set again from the first quiz
    pub fn retry(&self, set_id: &str) -> Result<Playthrough> {
        self.session.clear_session()?;
        self.start_play(set_id)
    }

    /// Leave the result screen
    pub fn leave_results(&self) -> Result<()> {
        Ok(self.session.clear_session()?)
    }
}

fn session_backend(config: &Config) -> MemoryBackend {
    match config.session_quota_bytes {
        Some(quota) => MemoryBackend::with_quota(quota),
        None => MemoryBackend::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::PlayEvent;
    use swipequiz_session::{Grade, SessionState};
    use swipequiz_store::CorrectAnswer;

    fn app() -> QuizApp {
        QuizApp::in_memory(Config::new(std::env::temp_dir())).unwrap()
    }

    /// A "Demo" set with Q1 (correct A) and Q2 (correct B)
    fn demo(app: &QuizApp) -> QuizSet {
        app.create_set(
            NewQuizSet::new("Demo"),
            vec![
                NewQuiz::new("", "Q1", "yes", "no", CorrectAnswer::A),
                NewQuiz::new("", "Q2", "yes", "no", CorrectAnswer::B),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_demo_scenario_scores_half() {
        let app = app();
        let set = demo(&app);

        let mut play = app.start_play(&set.id).unwrap();
        assert_eq!(play.position(), (1, 2));

        let Some(PlayEvent::Answered(first)) = play.tap(CorrectAnswer::A).unwrap() else {
            panic!("tap should record an answer");
        };
        assert!(first.is_correct);
        assert_eq!(play.finish_feedback(), Some(PlayEvent::Advanced(1)));
        assert_eq!(play.position(), (2, 2));

        let Some(PlayEvent::Answered(second)) = play.tap(CorrectAnswer::A).unwrap() else {
            panic!("tap should record an answer");
        };
        assert!(!second.is_correct);
        assert_eq!(play.finish_feedback(), Some(PlayEvent::Finished));
        assert!(play.is_finished());

        let records = app.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quiz.question, "Q1");
        assert_eq!(records[1].quiz.question, "Q2");

        let summary = app.results().unwrap().unwrap();
        assert_eq!(summary.rate(), 50);
        assert_eq!(summary.grade(), Grade::Fair);
    }

    #[test]
    fn test_drag_below_threshold_records_nothing() {
        let app = app();
        let set = demo(&app);
        let mut play = app.start_play(&set.id).unwrap();

        assert!(play.begin_drag());
        play.drag_to(-59.0);
        assert_eq!(play.release().unwrap(), Some(PlayEvent::Cancelled));
        assert!(app.records().unwrap().is_empty());
        assert!(play.is_accepting_input());
    }

    #[test]
    fn test_drag_at_threshold_records_once() {
        let app = app();
        let set = demo(&app);
        let mut play = app.start_play(&set.id).unwrap();

        assert!(play.begin_drag());
        assert_eq!(play.drag_to(60.0), Some(PlayEvent::Progress(1.0)));
        let Some(PlayEvent::Answered(record)) = play.release().unwrap() else {
            panic!("drag past threshold should record an answer");
        };
        assert_eq!(record.selected_answer, CorrectAnswer::B);
        assert_eq!(record.is_correct, record.quiz.correct_answer == CorrectAnswer::B);

        // Stray input during feedback is dropped
        assert_eq!(play.tap(CorrectAnswer::A).unwrap(), None);
        assert!(!play.begin_drag());
        assert_eq!(app.records().unwrap().len(), 1);
    }

    #[test]
    fn test_tap_matches_left_drag() {
        let app = app();
        let set = demo(&app);

        let mut play = app.start_play(&set.id).unwrap();
        play.tap(CorrectAnswer::A).unwrap();
        let tapped = app.records().unwrap();

        let mut play = app.start_play(&set.id).unwrap();
        play.begin_drag();
        play.release_at(-200.0).unwrap();
        let dragged = app.records().unwrap();

        assert_eq!(tapped.len(), 1);
        assert_eq!(tapped[0].selected_answer, dragged[0].selected_answer);
        assert_eq!(tapped[0].is_correct, dragged[0].is_correct);
        assert_eq!(tapped[0].quiz, dragged[0].quiz);
    }

    #[test]
    fn test_feedback_window_advances_on_poll() {
        let app = app();
        let set = demo(&app);
        let mut play = app.start_play(&set.id).unwrap();

        play.tap(CorrectAnswer::B).unwrap();
        let now = std::time::Instant::now();
        assert_eq!(play.poll(now), None);

        let later = now + app.config().gesture.feedback_duration();
        assert_eq!(play.poll(later), Some(PlayEvent::Advanced(1)));
        assert_eq!(play.current_quiz().map(|q| q.question.as_str()), Some("Q2"));
    }

    #[test]
    fn test_quit_and_retry_clear_answers() {
        let app = app();
        let set = demo(&app);

        let mut play = app.start_play(&set.id).unwrap();
        play.tap(CorrectAnswer::A).unwrap();
        play.quit().unwrap();
        assert_eq!(app.session().state().unwrap(), SessionState::Empty);
        assert_eq!(app.results().unwrap(), None);

        let mut play = app.start_play(&set.id).unwrap();
        play.tap(CorrectAnswer::A).unwrap();
        let play = app.retry(&set.id).unwrap();
        assert_eq!(play.position(), (1, 2));
        assert!(app.records().unwrap().is_empty());

        app.leave_results().unwrap();
        assert_eq!(app.session().state().unwrap(), SessionState::Empty);
    }

    #[test]
    fn test_unusable_gesture_config_is_rejected() {
        let mut config = Config::new(std::env::temp_dir());
        config.gesture.fallback_threshold = 0.0;
        assert!(matches!(
            QuizApp::in_memory(config.clone()),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            QuizApp::with_storage(config, Storage::in_memory()),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_start_play_errors() {
        let app = app();
        assert!(matches!(
            app.start_play("missing"),
            Err(CoreError::SetNotFound(_))
        ));

        let empty = app.create_set(NewQuizSet::new("Empty"), Vec::new()).unwrap();
        assert!(matches!(
            app.start_play(&empty.id),
            Err(CoreError::NoQuizzes(_))
        ));
    }

    #[test]
    fn test_editor_validates_before_store() {
        let app = app();
        let before = app.store().sets();

        let result = app.create_set(NewQuizSet::new("   "), Vec::new());
        assert!(matches!(result, Err(CoreError::Validation(_))));

        let set = demo(&app);
        let result = app.create_quiz(NewQuiz::new(&set.id, " ", "a", "b", CorrectAnswer::A));
        let Err(CoreError::Validation(err)) = result else {
            panic!("blank question should fail validation");
        };
        assert_eq!(err.fields, vec!["question"]);

        assert_eq!(app.store().sets().len(), before.len() + 1);
        assert_eq!(app.store().quizzes_by_set_id(&set.id).len(), 2);
    }

    #[test]
    fn test_editor_trims_input() {
        let app = app();
        let set = app
            .create_set(NewQuizSet::new("  Capitals  ").with_description("  "), Vec::new())
            .unwrap();
        assert_eq!(set.title, "Capitals");
        assert_eq!(set.description, None);

        let quiz = app
            .create_quiz(NewQuiz::new(&set.id, " Capital of France? ", " Paris ", " Lyon ", CorrectAnswer::A))
            .unwrap();
        assert_eq!(quiz.question, "Capital of France?");

        let edited = app
            .edit_quiz(
                &quiz.id,
                QuizUpdate {
                    explanation: Some(Some(" It is the seat of government ".to_string())),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(edited.explanation.as_deref(), Some("It is the seat of government"));
    }

    #[test]
    fn test_failed_answer_write_keeps_question_open() {
        let mut config = Config::new(std::env::temp_dir());
        // Room for an empty session, not for a recorded answer
        config.session_quota_bytes = Some(64);
        let app = QuizApp::in_memory(config).unwrap();
        let set = demo(&app);

        let mut play = app.start_play(&set.id).unwrap();
        assert!(play.tap(CorrectAnswer::A).is_err());
        assert!(play.is_accepting_input());
        assert_eq!(play.position(), (1, 2));
        assert!(app.records().unwrap().is_empty());
    }

    #[test]
    fn test_database_backed_app_reloads() {
        let dir = std::env::temp_dir().join(format!("swipequiz-app-{}", std::process::id()));
        let config = Config::new(dir.clone());

        let set_id = {
            let app = QuizApp::open(config.clone()).unwrap();
            demo(&app).id
        };

        let app = QuizApp::open(config).unwrap();
        let quizzes = app.store().quizzes_by_set_id(&set_id);
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].question, "Q1");

        drop(app);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}

use crate::data::ContentStore;
use crate::model::{Course, Lesson, Tab, ViewMode};
use crate::settings::Settings;
use egui_commonmark::CommonMarkCache;

// Submódulos
pub mod assistant;
pub mod challenge;
pub mod navigation;
pub mod quiz;
pub mod view_models;

pub use assistant::AssistantChat;
pub use challenge::ChallengeSubmission;
pub use navigation::Navigator;
pub use quiz::{AnswerOutcome, QuizAttempt, QuizPhase, ScoreBand};
pub use view_models::{AchievementRow, CourseCard, LessonHeader};

/// Controlador único: contenido, navegación y sesiones efímeras.
pub struct LearnApp {
    pub store: ContentStore,
    pub settings: Settings,
    pub assistant: AssistantChat,
    pub message: String,
    pub cm_cache: CommonMarkCache,
    pub show_example: bool,
    pub challenge_preview: bool,
    pub example_preview: bool,
    pub(crate) nav: Navigator,
    pub(crate) quiz_attempt: Option<QuizAttempt>,
    pub(crate) challenge: Option<ChallengeSubmission>,
}

impl LearnApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(settings.visuals());

        let mut app = match ContentStore::embedded() {
            Ok(store) => Self::with_store(store),
            Err(err) => {
                log::warn!("no se pudo cargar el contenido: {err}");
                let mut app = Self::with_store(ContentStore::default());
                app.message = format!("⚠ Content could not be loaded: {err}");
                app
            }
        };
        app.settings = settings;
        app
    }

    pub fn with_store(store: ContentStore) -> Self {
        Self {
            store,
            settings: Settings::default(),
            assistant: AssistantChat::default(),
            message: String::new(),
            cm_cache: CommonMarkCache::default(),
            show_example: true,
            challenge_preview: false,
            example_preview: false,
            nav: Navigator::default(),
            quiz_attempt: None,
            challenge: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn current_course(&self) -> Option<&Course> {
        self.store.course(self.nav.active_concept())
    }

    pub fn current_lessons(&self) -> &[Lesson] {
        self.store.lessons(self.nav.active_concept())
    }

    /// Lección activa, acotada al rango válido
    pub fn current_lesson(&self) -> Option<&Lesson> {
        let lessons = self.current_lessons();
        let idx = self.nav.clamped_lesson(lessons.len())?;
        lessons.get(idx)
    }

    // --- Quiz ---

    /// Crea el intento si el curso tiene quiz; None si no hay quiz.
    pub fn ensure_quiz_session(&mut self) -> Option<&mut QuizAttempt> {
        let concept = self.nav.active_concept().to_owned();
        let stale = self
            .quiz_attempt
            .as_ref()
            .is_none_or(|a| a.course_id() != concept);
        if stale {
            self.quiz_attempt = self
                .store
                .quiz(&concept)
                .map(|quiz| QuizAttempt::new(&concept, quiz));
        }
        self.quiz_attempt.as_mut()
    }

    pub fn quiz_session(&self) -> Option<&QuizAttempt> {
        self.quiz_attempt.as_ref()
    }

    pub fn answer_current(&mut self, option_index: usize) -> AnswerOutcome {
        match self.ensure_quiz_session() {
            Some(attempt) => {
                let idx = attempt.current_index();
                attempt.answer(idx, option_index)
            }
            None => AnswerOutcome::Ignored,
        }
    }

    pub fn skip_question(&mut self) -> AnswerOutcome {
        match self.ensure_quiz_session() {
            Some(attempt) => attempt.skip(&mut rand::thread_rng()),
            None => AnswerOutcome::Ignored,
        }
    }

    pub fn jump_to_question(&mut self, index: usize) {
        if let Some(attempt) = self.ensure_quiz_session() {
            attempt.jump_to(index);
        }
    }

    pub fn advance_quiz(&mut self) {
        if let Some(attempt) = self.ensure_quiz_session() {
            attempt.advance();
        }
    }

    pub fn reset_quiz(&mut self) {
        if let Some(attempt) = self.ensure_quiz_session() {
            attempt.reset();
        }
    }

    // --- Reto ---

    pub fn ensure_challenge_session(&mut self) -> &mut ChallengeSubmission {
        let concept = self.nav.active_concept().to_owned();
        let stale = self
            .challenge
            .as_ref()
            .is_none_or(|c| c.course_id() != concept);
        if stale {
            let submission = match self.store.challenge(&concept) {
                Some(challenge) => ChallengeSubmission::new(&concept, challenge),
                None => ChallengeSubmission::fallback(&concept),
            };
            self.challenge = Some(submission);
        }
        self.challenge.get_or_insert_with(|| ChallengeSubmission::fallback(&concept))
    }

    pub fn challenge_session(&self) -> Option<&ChallengeSubmission> {
        self.challenge.as_ref()
    }

    pub fn check_challenge(&mut self) -> bool {
        let submission = self.ensure_challenge_session();
        submission.check();
        submission.is_complete()
    }

    pub fn reset_challenge(&mut self) {
        self.ensure_challenge_session().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::judge_html::check_solution;

    fn app() -> LearnApp {
        LearnApp::with_store(ContentStore::embedded().expect("embedded content ok"))
    }

    #[test]
    fn challenge_starting_code_is_graded_in_order() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Challenge);

        let challenge = app
            .store
            .challenge("html-fundamentals")
            .cloned()
            .expect("challenge");
        let submission = app.ensure_challenge_session();
        assert_eq!(submission.code(), challenge.starting_code);

        let results = submission.check().to_vec();
        assert_eq!(results.len(), challenge.solution_criteria.len());
        for (result, criterion) in results.iter().zip(&challenge.solution_criteria) {
            assert_eq!(result.criterion, criterion.criterion);
        }
        assert_eq!(
            results,
            check_solution(&challenge.starting_code, &challenge.solution_criteria)
        );
        // el esqueleto inicial solo cumple la estructura
        assert!(results[0].passed);
        assert!(!app.check_challenge());
    }

    #[test]
    fn perfect_quiz_on_html_course() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Quiz);
        let answers: Vec<usize> = app
            .store
            .quiz("html-fundamentals")
            .expect("quiz")
            .questions
            .iter()
            .map(|q| q.correct_answer)
            .collect();
        assert_eq!(answers.len(), 5);

        for a in answers {
            assert_eq!(app.answer_current(a), AnswerOutcome::Correct);
            app.advance_quiz();
        }
        let attempt = app.quiz_session().expect("attempt");
        assert!(attempt.is_completed());
        assert_eq!(attempt.score(), 5);
        assert_eq!(attempt.percentage_rounded(), 100);
    }

    #[test]
    fn skip_records_an_answer_for_the_current_question() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Quiz);
        assert_ne!(app.skip_question(), AnswerOutcome::Ignored);
        let attempt = app.quiz_session().expect("attempt");
        assert!(attempt.current_answered());
        assert_eq!(attempt.answered_count(), 1);
        assert!(attempt.score() <= 1);
        assert_eq!(app.skip_question(), AnswerOutcome::AlreadyAnswered);

        app.navigate_to_module("css-styling", ViewMode::Quiz);
        assert_eq!(app.skip_question(), AnswerOutcome::Ignored);
    }

    #[test]
    fn unknown_course_degrades_to_fallbacks() {
        let mut app = app();
        app.navigate_to_module("rust-for-web", ViewMode::Quiz);
        assert!(app.current_course().is_none());
        assert!(app.current_lesson().is_none());
        assert!(app.ensure_quiz_session().is_none());
        assert_eq!(app.answer_current(0), AnswerOutcome::Ignored);

        app.set_view_mode(ViewMode::Challenge);
        let submission = app.ensure_challenge_session();
        assert!(submission.challenge().solution_criteria.is_empty());
    }

    #[test]
    fn leaving_the_view_discards_sessions() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Quiz);
        app.answer_current(0);
        assert!(app.quiz_session().is_some());

        app.set_view_mode(ViewMode::Lesson);
        assert!(app.quiz_session().is_none());

        app.set_view_mode(ViewMode::Challenge);
        app.ensure_challenge_session().set_code("<p>x</p>");
        app.set_active_tab(Tab::Dashboard);
        assert!(app.challenge_session().is_none());

        let starting = app
            .store
            .challenge("html-fundamentals")
            .map(|c| c.starting_code.clone())
            .unwrap_or_default();
        app.navigate_to_module("html-fundamentals", ViewMode::Challenge);
        assert_eq!(app.ensure_challenge_session().code(), starting);
    }

    #[test]
    fn changing_course_discards_quiz_attempt() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Quiz);
        app.answer_current(0);
        app.navigate_to_module("css-styling", ViewMode::Quiz);
        assert!(app.quiz_session().is_none());
        assert!(app.ensure_quiz_session().is_none());
    }

    #[test]
    fn current_lesson_is_clamped() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Lesson);
        let last = app.current_lessons().len() - 1;
        app.set_active_lesson(50);
        assert_eq!(
            app.current_lesson().map(|l| l.id.clone()),
            app.current_lessons().get(last).map(|l| l.id.clone())
        );
        app.set_active_lesson(0);
        for _ in 0..10 {
            app.next_lesson();
        }
        assert_eq!(app.navigator().active_lesson(), last);
    }

    #[test]
    fn lesson_arrows_start_from_the_visible_lesson() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Lesson);
        let last = app.current_lessons().len() - 1;

        app.set_active_lesson(usize::MAX);
        app.next_lesson();
        assert_eq!(app.navigator().active_lesson(), last);

        app.set_active_lesson(usize::MAX);
        app.previous_lesson();
        assert_eq!(app.navigator().active_lesson(), last - 1);

        // curso sin lecciones: no se mueve ni desborda
        app.navigate_to_module("css-styling", ViewMode::Lesson);
        app.set_active_lesson(usize::MAX);
        app.next_lesson();
        assert_eq!(app.navigator().active_lesson(), usize::MAX);
    }

    #[test]
    fn sidebar_lessons_entry_sets_tab_and_mode() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Quiz);
        app.set_active_tab(Tab::Achievements);
        app.open_lessons();
        assert_eq!(app.navigator().active_tab(), Tab::Learn);
        assert_eq!(app.navigator().view_mode(), ViewMode::Lesson);
    }
}

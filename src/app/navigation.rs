use super::*;

pub const DEFAULT_COURSE: &str = "html-fundamentals";

/// Qué se está mostrando: pestaña, curso, lección y modo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    active_tab: Tab,
    active_concept: String,
    active_lesson: usize,
    view_mode: ViewMode,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            active_concept: DEFAULT_COURSE.to_owned(),
            active_lesson: 0,
            view_mode: ViewMode::Lesson,
        }
    }
}

impl Navigator {
    /// No valida que el curso exista: las consultas devuelven reserva.
    pub fn navigate_to_module(&mut self, course_id: &str, mode: ViewMode) {
        self.active_concept = course_id.to_owned();
        self.active_lesson = 0;
        self.view_mode = mode;
        self.active_tab = Tab::Learn;
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_active_lesson(&mut self, index: usize) {
        self.active_lesson = index;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn active_concept(&self) -> &str {
        &self.active_concept
    }

    pub fn active_lesson(&self) -> usize {
        self.active_lesson
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    // Helpers de acotado para los controles de lección
    pub fn clamped_lesson(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.active_lesson.min(len - 1))
        }
    }

    pub fn has_previous_lesson(&self) -> bool {
        self.active_lesson > 0
    }

    pub fn has_next_lesson(&self, len: usize) -> bool {
        self.active_lesson.saturating_add(1) < len
    }

    pub fn previous_lesson(&mut self) {
        if self.has_previous_lesson() {
            self.active_lesson -= 1;
        }
    }

    pub fn next_lesson(&mut self, len: usize) {
        if self.has_next_lesson(len) {
            self.active_lesson += 1;
        }
    }
}

impl LearnApp {
    pub fn navigate_to_module(&mut self, course_id: &str, mode: ViewMode) {
        log::info!("navegando a {course_id} ({mode:?})");
        self.nav.navigate_to_module(course_id, mode);
        self.sync_sessions();
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.nav.set_active_tab(tab);
        self.sync_sessions();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.nav.set_view_mode(mode);
        self.sync_sessions();
    }

    pub fn set_active_lesson(&mut self, index: usize) {
        self.nav.set_active_lesson(index);
    }

    /// Entrada "Lecciones" de la barra lateral: pestaña y modo a la vez
    pub fn open_lessons(&mut self) {
        self.nav.set_active_tab(Tab::Learn);
        self.nav.set_view_mode(ViewMode::Lesson);
        self.sync_sessions();
    }

    pub fn previous_lesson(&mut self) {
        self.clamp_to_visible_lesson();
        self.nav.previous_lesson();
    }

    pub fn next_lesson(&mut self) {
        let len = self.clamp_to_visible_lesson();
        self.nav.next_lesson(len);
    }

    // Parte de la lección visible, no del índice guardado
    fn clamp_to_visible_lesson(&mut self) -> usize {
        let len = self.store.lessons(self.nav.active_concept()).len();
        if let Some(index) = self.nav.clamped_lesson(len) {
            self.nav.set_active_lesson(index);
        }
        len
    }

    /// Descarta las sesiones que ya no corresponden a la vista activa.
    pub(crate) fn sync_sessions(&mut self) {
        let concept = self.nav.active_concept().to_owned();
        let learning = self.nav.active_tab() == Tab::Learn;
        let mode = self.nav.view_mode();

        let keep_quiz = learning
            && mode == ViewMode::Quiz
            && self
                .quiz_attempt
                .as_ref()
                .is_some_and(|a| a.course_id() == concept);
        if !keep_quiz {
            self.quiz_attempt = None;
        }

        let keep_challenge = learning
            && mode == ViewMode::Challenge
            && self
                .challenge
                .as_ref()
                .is_some_and(|c| c.course_id() == concept);
        if !keep_challenge {
            self.challenge = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_to_module_resets_lesson_and_opens_learn() {
        let mut nav = Navigator::default();
        nav.set_active_lesson(3);
        nav.navigate_to_module("css-styling", ViewMode::Quiz);
        assert_eq!(nav.active_tab(), Tab::Learn);
        assert_eq!(nav.active_concept(), "css-styling");
        assert_eq!(nav.active_lesson(), 0);
        assert_eq!(nav.view_mode(), ViewMode::Quiz);
    }

    #[test]
    fn setters_accept_any_combination() {
        let mut nav = Navigator::default();
        nav.set_active_tab(Tab::Settings);
        nav.set_view_mode(ViewMode::Challenge);
        nav.set_active_lesson(99);
        assert_eq!(nav.active_tab(), Tab::Settings);
        assert_eq!(nav.view_mode(), ViewMode::Challenge);
        assert_eq!(nav.active_lesson(), 99);
        assert_eq!(nav.clamped_lesson(3), Some(2));
        assert_eq!(nav.clamped_lesson(0), None);
    }

    #[test]
    fn lesson_helpers_stay_in_range() {
        let mut nav = Navigator::default();
        nav.previous_lesson();
        assert_eq!(nav.active_lesson(), 0);
        for _ in 0..10 {
            nav.next_lesson(3);
        }
        assert_eq!(nav.active_lesson(), 2);
        assert!(!nav.has_next_lesson(3));
        assert!(nav.has_previous_lesson());
        nav.previous_lesson();
        assert_eq!(nav.active_lesson(), 1);
        nav.next_lesson(0);
        assert_eq!(nav.active_lesson(), 1);
    }

    #[test]
    fn huge_lesson_index_does_not_overflow() {
        let mut nav = Navigator::default();
        nav.set_active_lesson(usize::MAX);
        assert!(!nav.has_next_lesson(3));
        nav.next_lesson(3);
        assert_eq!(nav.active_lesson(), usize::MAX);
        assert_eq!(nav.clamped_lesson(3), Some(2));
    }
}

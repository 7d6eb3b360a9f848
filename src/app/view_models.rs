use super::*;
use crate::model::{Achievement, CourseProgress};

#[derive(Clone, Debug)]
pub struct CourseCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mastery: u8,
    pub color: String,
    pub coming_soon: bool,
    pub progress: CourseProgress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonHeader {
    pub index: usize, // 0-based
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Clone, Debug)]
pub struct AchievementRow {
    pub title: String,
    pub description: String,
    pub earned: bool,
    pub course_title: String,
}

impl CourseCard {
    pub fn label(&self) -> String {
        if self.coming_soon {
            format!("{} (coming soon)", self.title)
        } else {
            format!("{} · {}%", self.title, self.mastery)
        }
    }
}

impl LessonHeader {
    pub fn label(&self) -> String {
        format!("Lesson {}/{}", self.index + 1, self.total)
    }

    pub fn is_last(&self) -> bool {
        !self.has_next
    }
}

impl AchievementRow {
    pub fn status(&self) -> &'static str {
        if self.earned { "Completed" } else { "Locked" }
    }
}

impl LearnApp {
    pub fn course_cards(&self) -> Vec<CourseCard> {
        self.store
            .courses()
            .iter()
            .map(|c| CourseCard {
                id: c.id.clone(),
                title: c.title.clone(),
                description: c.description.clone(),
                mastery: c.mastery,
                color: c.color.clone(),
                coming_soon: c.coming_soon,
                progress: self.store.course_progress(&c.id),
            })
            .collect()
    }

    /// None si el curso activo no tiene lecciones
    pub fn lesson_header(&self) -> Option<LessonHeader> {
        let total = self.current_lessons().len();
        let index = self.nav.clamped_lesson(total)?;
        Some(LessonHeader {
            index,
            total,
            has_previous: index > 0,
            has_next: index + 1 < total,
        })
    }

    pub fn achievement_rows(&self) -> Vec<AchievementRow> {
        self.store
            .achievements()
            .iter()
            .map(|a: &Achievement| AchievementRow {
                title: a.title.clone(),
                description: a.description.clone(),
                earned: a.earned,
                course_title: a
                    .course
                    .as_deref()
                    .and_then(|id| self.store.course(id))
                    .map(|c| c.title.clone())
                    .unwrap_or_else(|| "General".into()),
            })
            .collect()
    }

    pub fn earned_achievements(&self) -> (usize, usize) {
        let all = self.store.achievements();
        (all.iter().filter(|a| a.earned).count(), all.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> LearnApp {
        LearnApp::with_store(ContentStore::embedded().expect("embedded content ok"))
    }

    #[test]
    fn course_cards_follow_store_order() {
        let app = app();
        let cards = app.course_cards();
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["html-fundamentals", "css-styling", "javascript-basics"]);
        assert_eq!(cards[0].label(), "HTML Fundamentals · 35%");
        assert!(cards[1].label().ends_with("(coming soon)"));
    }

    #[test]
    fn lesson_header_tracks_position() {
        let mut app = app();
        app.navigate_to_module("html-fundamentals", ViewMode::Lesson);
        let header = app.lesson_header().expect("lessons");
        assert_eq!(header.label(), format!("Lesson 1/{}", header.total));
        assert!(!header.has_previous);

        app.set_active_lesson(header.total - 1);
        assert!(app.lesson_header().expect("lessons").is_last());

        app.navigate_to_module("css-styling", ViewMode::Lesson);
        assert!(app.lesson_header().is_none());
    }

    #[test]
    fn achievements_resolve_course_titles() {
        let app = app();
        let rows = app.achievement_rows();
        assert_eq!(rows[0].course_title, "HTML Fundamentals");
        assert_eq!(rows[0].status(), "Completed");
        assert_eq!(app.earned_achievements(), (1, rows.len()));
    }
}

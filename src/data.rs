// src/data.rs

use crate::model::{
    Achievement, Challenge, Course, CourseProgress, DocLink, LearningPathStep, Lesson, Quiz,
};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_CONTENT: &str = include_str!("data/content.yaml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no se pudo parsear el contenido YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("curso duplicado: {0}")]
    DuplicateCourse(String),
    #[error("el curso {course} tiene un dominio de {mastery}% (máximo 100)")]
    MasteryOutOfRange { course: String, mastery: u8 },
    #[error("el curso {course} tiene {completed} lecciones completadas de {total}")]
    LessonCountMismatch {
        course: String,
        completed: u32,
        total: u32,
    },
    #[error(
        "quiz {quiz}, pregunta {question}: respuesta correcta {answer} fuera de {options} opciones"
    )]
    AnswerOutOfRange {
        quiz: String,
        question: usize,
        answer: usize,
        options: usize,
    },
}

/// Banco de contenido de solo lectura: cursos, ruta de aprendizaje y logros.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ContentStore {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    learning_path: Vec<LearningPathStep>,
    #[serde(default)]
    achievements: Vec<Achievement>,
}

impl ContentStore {
    /// Carga el banco embebido en el binario
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_yaml_str(EMBEDDED_CONTENT)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ContentError> {
        let store: ContentStore = serde_yaml::from_str(source)?;
        store.validate()?;
        log::debug!(
            "contenido cargado: {} cursos, {} logros",
            store.courses.len(),
            store.achievements.len()
        );
        Ok(store)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for course in &self.courses {
            if !seen.insert(course.id.as_str()) {
                return Err(ContentError::DuplicateCourse(course.id.clone()));
            }
            if course.mastery > 100 {
                return Err(ContentError::MasteryOutOfRange {
                    course: course.id.clone(),
                    mastery: course.mastery,
                });
            }
            if course.completed_lessons > course.total_lessons {
                return Err(ContentError::LessonCountMismatch {
                    course: course.id.clone(),
                    completed: course.completed_lessons,
                    total: course.total_lessons,
                });
            }
            if let Some(quiz) = &course.quiz {
                for (i, q) in quiz.questions.iter().enumerate() {
                    if q.correct_answer >= q.options.len() {
                        return Err(ContentError::AnswerOutOfRange {
                            quiz: quiz.id.clone(),
                            question: i,
                            answer: q.correct_answer,
                            options: q.options.len(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn learning_path(&self) -> &[LearningPathStep] {
        &self.learning_path
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn lessons(&self, course_id: &str) -> &[Lesson] {
        self.course(course_id)
            .map(|c| c.lessons.as_slice())
            .unwrap_or(&[])
    }

    pub fn lesson(&self, course_id: &str, index: usize) -> Option<&Lesson> {
        self.lessons(course_id).get(index)
    }

    pub fn challenge(&self, course_id: &str) -> Option<&Challenge> {
        let challenge = self.course(course_id)?.challenge.as_ref();
        log::debug!(
            "reto para {course_id}: {}",
            challenge.map(|c| c.title.as_str()).unwrap_or("<ninguno>")
        );
        challenge
    }

    pub fn quiz(&self, course_id: &str) -> Option<&Quiz> {
        self.course(course_id)?.quiz.as_ref()
    }

    pub fn doc_links(&self, course_id: &str) -> &[DocLink] {
        self.course(course_id)
            .map(|c| c.doc_links.as_slice())
            .unwrap_or(&[])
    }

    pub fn course_progress(&self, course_id: &str) -> CourseProgress {
        match self.course(course_id) {
            Some(c) if c.total_lessons > 0 => CourseProgress {
                completed_lessons: c.completed_lessons,
                total_lessons: c.total_lessons,
                percent: c.completed_lessons as f32 / c.total_lessons as f32 * 100.0,
            },
            Some(c) => CourseProgress {
                completed_lessons: c.completed_lessons,
                total_lessons: 0,
                percent: 0.0,
            },
            None => CourseProgress::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r##"
courses:
  - id: demo
    title: Demo
    description: A demo course
    mastery: 40
    completed_lessons: 1
    total_lessons: 4
    color: "#112233"
    lessons:
      - id: one
        title: First
        content: "# One"
      - id: two
        title: Second
        content: "# Two"
    quiz:
      id: demo-quiz
      title: Demo quiz
      questions:
        - question: "2 + 2?"
          options: ["3", "4"]
          correct_answer: 1
  - id: later
    title: Later
    description: Not yet
    mastery: 0
    completed_lessons: 0
    total_lessons: 0
    color: "#000000"
    coming_soon: true
"##;

    #[test]
    fn embedded_content_loads_and_has_html_course() {
        let store = ContentStore::embedded().expect("embedded content ok");
        let html = store.course("html-fundamentals").expect("html course");
        assert!(!html.coming_soon);
        assert!(!store.lessons("html-fundamentals").is_empty());
        assert!(store.challenge("html-fundamentals").is_some());
        assert_eq!(
            store.quiz("html-fundamentals").map(|q| q.questions.len()),
            Some(5)
        );
        assert!(!store.doc_links("html-fundamentals").is_empty());
    }

    #[test]
    fn lookups_are_total_for_unknown_ids() {
        let store = ContentStore::from_yaml_str(SMALL).expect("yaml ok");
        assert!(store.course("nope").is_none());
        assert!(store.lessons("nope").is_empty());
        assert!(store.lesson("nope", 0).is_none());
        assert!(store.challenge("nope").is_none());
        assert!(store.quiz("nope").is_none());
        assert!(store.doc_links("nope").is_empty());
        assert_eq!(store.course_progress("nope"), CourseProgress::default());
    }

    #[test]
    fn lesson_lookup_respects_bounds() {
        let store = ContentStore::from_yaml_str(SMALL).expect("yaml ok");
        assert_eq!(store.lesson("demo", 1).map(|l| l.id.as_str()), Some("two"));
        assert!(store.lesson("demo", 2).is_none());
    }

    #[test]
    fn repeated_lookups_return_same_sequence() {
        let store = ContentStore::from_yaml_str(SMALL).expect("yaml ok");
        assert_eq!(store.lessons("demo"), store.lessons("demo"));
        assert_eq!(store.courses().len(), 2);
    }

    #[test]
    fn hex_colors_keep_their_hash() {
        let store = ContentStore::from_yaml_str(SMALL).expect("yaml ok");
        let colors: Vec<&str> = store.courses().iter().map(|c| c.color.as_str()).collect();
        assert_eq!(colors, ["#112233", "#000000"]);
    }

    #[test]
    fn missing_challenge_and_quiz_are_not_errors() {
        let store = ContentStore::from_yaml_str(SMALL).expect("yaml ok");
        assert!(store.challenge("later").is_none());
        assert!(store.quiz("later").is_none());
        assert!(store.challenge("demo").is_none());
    }

    #[test]
    fn course_progress_is_percentage_of_lessons() {
        let store = ContentStore::from_yaml_str(SMALL).expect("yaml ok");
        let p = store.course_progress("demo");
        assert_eq!(p.completed_lessons, 1);
        assert_eq!(p.total_lessons, 4);
        assert!((p.percent - 25.0).abs() < f32::EPSILON);
        assert_eq!(store.course_progress("later").percent, 0.0);
    }

    #[test]
    fn rejects_answer_index_outside_options() {
        let bad = SMALL.replace("correct_answer: 1", "correct_answer: 2");
        let err = ContentStore::from_yaml_str(&bad).unwrap_err();
        assert!(matches!(
            err,
            ContentError::AnswerOutOfRange { answer: 2, options: 2, .. }
        ));
    }

    #[test]
    fn rejects_duplicate_course_ids() {
        let bad = SMALL.replace("id: later", "id: demo");
        let err = ContentStore::from_yaml_str(&bad).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateCourse(id) if id == "demo"));
    }

    #[test]
    fn rejects_unknown_criterion_kind() {
        let yaml = r##"
courses:
  - id: c
    title: C
    description: d
    mastery: 0
    completed_lessons: 0
    total_lessons: 1
    color: "#000000"
    challenge:
      title: t
      description: d
      instructions: i
      starting_code: ""
      solution_criteria:
        - kind: table
          criterion: Uses a table
          description: Add a table
"##;
        assert!(matches!(
            ContentStore::from_yaml_str(yaml),
            Err(ContentError::Parse(_))
        ));
    }
}

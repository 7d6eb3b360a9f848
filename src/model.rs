use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Learn,
    Challenges,
    Projects,
    Achievements,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Learn,
        Tab::Challenges,
        Tab::Projects,
        Tab::Achievements,
        Tab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "🏠 Dashboard",
            Tab::Learn => "📖 Lessons",
            Tab::Challenges => "💻 Challenges",
            Tab::Projects => "🧩 Projects",
            Tab::Achievements => "🏆 Achievements",
            Tab::Settings => "⚙ Settings",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Lesson,
    Challenge,
    Quiz,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Lesson, ViewMode::Challenge, ViewMode::Quiz];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Lesson => "Lessons",
            ViewMode::Challenge => "Challenge",
            ViewMode::Quiz => "Quiz",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mastery: u8, // 0..=100
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub color: String, // "#RRGGBB"
    #[serde(default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub challenge: Option<Challenge>,
    #[serde(default)]
    pub quiz: Option<Quiz>,
    #[serde(default)]
    pub doc_links: Vec<DocLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub content: String, // markdown
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub starting_code: String,
    #[serde(default)]
    pub solution_criteria: Vec<SolutionCriterion>,
}

/// Regla de detección que aplica el corrector a un criterio.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    HtmlStructure,
    Heading,
    Paragraphs,
    Link,
    Image,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionCriterion {
    pub kind: CriterionKind,
    pub criterion: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocLink {
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub earned: bool,
    #[serde(default)]
    pub course: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LearningPathStep {
    pub course: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CourseProgress {
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub percent: f32,
}

/// Resultado de evaluar un criterio contra el código enviado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionResult {
    pub criterion: String,
    pub description: String,
    pub passed: bool,
}

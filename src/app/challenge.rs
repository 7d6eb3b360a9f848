use crate::judge::judge_html::{challenge_complete, grade_html_challenge};
use crate::model::{Challenge, CriterionResult};

/// Estado de la sesión de un reto: buffer editable y última corrección.
#[derive(Clone, Debug)]
pub struct ChallengeSubmission {
    course_id: String,
    challenge: Challenge,
    code: String,
    results: Vec<CriterionResult>,
    checked: bool,
}

impl ChallengeSubmission {
    pub fn new(course_id: &str, challenge: &Challenge) -> Self {
        Self {
            course_id: course_id.to_owned(),
            challenge: challenge.clone(),
            code: challenge.starting_code.clone(),
            results: Vec::new(),
            checked: false,
        }
    }

    /// Reto de reserva para cursos sin reto todavía
    pub fn fallback(course_id: &str) -> Self {
        Self::new(course_id, &fallback_challenge())
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn code_mut(&mut self) -> &mut String {
        &mut self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn check(&mut self) -> &[CriterionResult] {
        self.results = grade_html_challenge(&self.challenge, &self.code);
        self.checked = true;
        &self.results
    }

    pub fn reset(&mut self) {
        self.code = self.challenge.starting_code.clone();
        self.results.clear();
        self.checked = false;
    }

    pub fn results(&self) -> &[CriterionResult] {
        &self.results
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_complete(&self) -> bool {
        self.checked && challenge_complete(&self.results)
    }
}

pub fn fallback_challenge() -> Challenge {
    Challenge {
        title: "Challenge".into(),
        description: "No challenge available for this module yet".into(),
        instructions: "Please check back later".into(),
        starting_code: "<!-- No challenge available -->".into(),
        solution_criteria: Vec::new(),
    }
}

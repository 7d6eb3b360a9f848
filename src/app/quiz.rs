use crate::model::Quiz;
use rand::Rng;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// Ya respondida: no cambia nada
    AlreadyAnswered,
    /// Índice fuera de rango o quiz terminado
    Ignored,
}

/// Banda cualitativa del resultado final (solo para el texto mostrado).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Good,
    KeepPracticing,
}

impl ScoreBand {
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Perfect score! Excellent work!",
            ScoreBand::Good => "Great job! You're doing well!",
            ScoreBand::KeepPracticing => "Keep practicing! You're making progress.",
        }
    }
}

/// Intento de quiz de la sesión actual. No se persiste.
#[derive(Clone, Debug)]
pub struct QuizAttempt {
    course_id: String,
    answer_key: Vec<usize>,
    option_counts: Vec<usize>,
    current: usize,
    selections: BTreeMap<usize, usize>, // pregunta -> opción elegida
    score: usize,
    selected: Option<usize>,
    show_explanation: bool,
    phase: QuizPhase,
}

impl QuizAttempt {
    pub fn new(course_id: &str, quiz: &Quiz) -> Self {
        Self {
            course_id: course_id.to_owned(),
            answer_key: quiz.questions.iter().map(|q| q.correct_answer).collect(),
            option_counts: quiz.questions.iter().map(|q| q.options.len()).collect(),
            current: 0,
            selections: BTreeMap::new(),
            score: 0,
            selected: None,
            show_explanation: false,
            phase: QuizPhase::InProgress,
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn answer(&mut self, question_index: usize, option_index: usize) -> AnswerOutcome {
        if self.selections.contains_key(&question_index) {
            return AnswerOutcome::AlreadyAnswered;
        }
        let Some(&correct) = self.answer_key.get(question_index) else {
            return AnswerOutcome::Ignored;
        };
        if self.phase == QuizPhase::Completed {
            return AnswerOutcome::Ignored;
        }

        self.selections.insert(question_index, option_index);
        // Selección y explicación solo afectan a la pregunta visible
        if question_index == self.current {
            self.selected = Some(option_index);
            self.show_explanation = true;
        }

        if option_index == correct {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Responde la pregunta actual con una opción al azar.
    pub fn skip(&mut self, rng: &mut impl Rng) -> AnswerOutcome {
        let options = self.option_counts.get(self.current).copied().unwrap_or(0);
        if options == 0 {
            return AnswerOutcome::Ignored;
        }
        let pick = rng.gen_range(0..options);
        self.answer(self.current, pick)
    }

    /// Salta a otra pregunta sin responderla.
    pub fn jump_to(&mut self, question_index: usize) {
        if self.phase == QuizPhase::Completed || question_index >= self.total() {
            return;
        }
        self.current = question_index;
        self.selected = None;
        self.show_explanation = false;
    }

    pub fn advance(&mut self) {
        if self.phase == QuizPhase::Completed {
            return;
        }
        self.selected = None;
        self.show_explanation = false;

        if self.current + 1 < self.total() {
            self.current += 1;
        } else {
            self.phase = QuizPhase::Completed;
            log::info!(
                "quiz de {} terminado: {}/{}",
                self.course_id,
                self.score,
                self.total()
            );
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.selections.clear();
        self.score = 0;
        self.selected = None;
        self.show_explanation = false;
        self.phase = QuizPhase::InProgress;
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.answer_key.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn current_answered(&self) -> bool {
        self.is_answered(self.current)
    }

    /// Acierto de una pregunta ya respondida
    pub fn was_correct(&self, question_index: usize) -> Option<bool> {
        let picked = self.selection_for(question_index)?;
        Some(self.answer_key.get(question_index) == Some(&picked))
    }

    pub fn is_answered(&self, question_index: usize) -> bool {
        self.selections.contains_key(&question_index)
    }

    pub fn selection_for(&self, question_index: usize) -> Option<usize> {
        self.selections.get(&question_index).copied()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn explanation_visible(&self) -> bool {
        self.show_explanation
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.total()
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.current + 1) as f32 / self.total() as f32
    }

    pub fn percentage(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        self.score as f32 / self.total() as f32 * 100.0
    }

    pub fn percentage_rounded(&self) -> u32 {
        self.percentage().round() as u32
    }

    pub fn band(&self) -> ScoreBand {
        let total = self.total();
        // umbral del 70 % redondeado hacia abajo
        let good_threshold = total * 7 / 10;
        if self.score == total {
            ScoreBand::Perfect
        } else if self.score >= good_threshold {
            ScoreBand::Good
        } else {
            ScoreBand::KeepPracticing
        }
    }
}

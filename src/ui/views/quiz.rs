use crate::LearnApp;
use crate::app::ScoreBand;
use crate::model::ViewMode;
use crate::ui::helpers::coming_soon_card;
use crate::ui::layout::{centered_panel, mode_toggle, simple_panel, two_button_row};
use egui::{Button, Color32, Context, ProgressBar, RichText, Vec2};

enum QuizAction {
    Mode(ViewMode),
    Answer(usize),
    Skip,
    Jump(usize),
    Advance,
    Retry,
}

fn band_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::Perfect => Color32::from_rgb(34, 160, 80),
        ScoreBand::Good => Color32::from_rgb(60, 120, 220),
        ScoreBand::KeepPracticing => Color32::from_rgb(220, 140, 40),
    }
}

pub fn ui_quiz(app: &mut LearnApp, ctx: &Context) {
    let concept = app.navigator().active_concept().to_owned();
    let quiz = app.store.quiz(&concept).cloned();
    let attempt = app.ensure_quiz_session().cloned();

    let mut action = None;

    let (Some(quiz), Some(attempt)) = (quiz, attempt) else {
        simple_panel(ctx, 900.0, |ui| {
            if let Some(mode) = mode_toggle(ui, ViewMode::Quiz, 360.0) {
                action = Some(QuizAction::Mode(mode));
            }
            ui.add_space(40.0);
            if coming_soon_card(
                ui,
                "Quiz Coming Soon",
                "There is no quiz for this module yet.",
                Some("Back to Lessons"),
            ) {
                action = Some(QuizAction::Mode(ViewMode::Lesson));
            }
        });
        if let Some(QuizAction::Mode(mode)) = action {
            app.set_view_mode(mode);
        }
        return;
    };

    if attempt.is_completed() {
        // Pantalla de resultado
        let band = attempt.band();
        centered_panel(ctx, 320.0, 520.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&quiz.title);
                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!("{}%", attempt.percentage_rounded()))
                        .size(44.0)
                        .strong()
                        .color(band_color(band)),
                );
                ui.label(format!(
                    "You scored {} out of {}",
                    attempt.score(),
                    attempt.total()
                ));
                ui.add_space(6.0);
                ui.label(RichText::new(band.message()).strong());
                ui.add_space(16.0);
                let width = ui.available_width();
                let (retry, back) = two_button_row(ui, width, "⟲ Try Again", "Back to Lessons");
                if retry {
                    action = Some(QuizAction::Retry);
                }
                if back {
                    action = Some(QuizAction::Mode(ViewMode::Lesson));
                }
            });
        });
    } else if let Some(question) = quiz.questions.get(attempt.current_index()) {
        simple_panel(ctx, 900.0, |ui| {
            ui.heading(&quiz.title);
            ui.add_space(8.0);
            if let Some(mode) = mode_toggle(ui, ViewMode::Quiz, 360.0) {
                action = Some(QuizAction::Mode(mode));
            }
            ui.add_space(10.0);

            let current = attempt.current_index();
            ui.horizontal(|ui| {
                ui.label(format!("Question {} of {}", current + 1, attempt.total()));
                ui.weak(format!(
                    "Score: {}/{}",
                    attempt.score(),
                    attempt.answered_count()
                ));
            });
            ui.add(ProgressBar::new(attempt.progress_fraction()).desired_height(6.0));
            ui.add_space(6.0);

            // Puntos por pregunta: verde acierto, rojo fallo
            ui.horizontal_wrapped(|ui| {
                for i in 0..attempt.total() {
                    let mut dot = Button::new(format!("{}", i + 1))
                        .selected(i == current)
                        .min_size(Vec2::splat(26.0));
                    match attempt.was_correct(i) {
                        Some(true) => dot = dot.fill(Color32::from_rgb(34, 160, 80)),
                        Some(false) => dot = dot.fill(Color32::from_rgb(210, 60, 60)),
                        None => {}
                    }
                    if ui.add(dot).clicked() && i != current {
                        action = Some(QuizAction::Jump(i));
                    }
                }
            });
            ui.add_space(12.0);

            ui.label(RichText::new(&question.question).size(18.0).strong());
            ui.add_space(10.0);

            let answered = attempt.current_answered();
            let picked = attempt.selection_for(current);
            let width = ui.available_width().min(600.0);
            for (i, option) in question.options.iter().enumerate() {
                let mut text = RichText::new(option);
                if answered {
                    if i == question.correct_answer {
                        text = text.color(Color32::from_rgb(34, 160, 80)).strong();
                    } else if picked == Some(i) {
                        text = text.color(Color32::from_rgb(210, 60, 60));
                    }
                }
                let button = Button::new(text)
                    .selected(picked == Some(i))
                    .min_size(Vec2::new(width, 34.0));
                if ui.add_enabled(!answered, button).clicked() {
                    action = Some(QuizAction::Answer(i));
                }
                ui.add_space(4.0);
            }

            if answered {
                ui.add_space(10.0);
                let (title, color) = if picked == Some(question.correct_answer) {
                    ("✔ Correct!", Color32::from_rgb(34, 160, 80))
                } else {
                    ("✖ Incorrect", Color32::from_rgb(210, 60, 60))
                };
                ui.colored_label(color, RichText::new(title).strong());
                ui.label(&question.explanation);
            }

            ui.add_space(10.0);
            let next_label = if attempt.is_last_question() {
                "Finish Quiz"
            } else {
                "Next Question ▶"
            };
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!answered, Button::new("Skip").min_size(Vec2::new(100.0, 34.0)))
                    .clicked()
                {
                    action = Some(QuizAction::Skip);
                }
                // Siguiente solo tras responder
                if ui
                    .add_enabled(answered, Button::new(next_label).min_size(Vec2::new(220.0, 34.0)))
                    .clicked()
                {
                    action = Some(QuizAction::Advance);
                }
            });
        });
    } else {
        // Quiz sin preguntas
        simple_panel(ctx, 900.0, |ui| {
            ui.heading(&quiz.title);
            ui.add_space(8.0);
            ui.weak("This quiz has no questions yet.");
            if ui.button("Finish Quiz").clicked() {
                action = Some(QuizAction::Advance);
            }
        });
    }

    match action {
        Some(QuizAction::Mode(mode)) => app.set_view_mode(mode),
        Some(QuizAction::Answer(i)) => {
            app.answer_current(i);
        }
        Some(QuizAction::Skip) => {
            app.skip_question();
        }
        Some(QuizAction::Jump(i)) => app.jump_to_question(i),
        Some(QuizAction::Advance) => app.advance_quiz(),
        Some(QuizAction::Retry) => app.reset_quiz(),
        None => {}
    }
}

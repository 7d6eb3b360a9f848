use crate::LearnApp;
use crate::app::navigation::DEFAULT_COURSE;
use crate::code_utils::parse_hex_color;
use crate::model::ViewMode;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::simple_panel;
use egui::{Context, ProgressBar, RichText};

pub fn ui_dashboard(app: &mut LearnApp, ctx: &Context) {
    let cards = app.course_cards();
    let rows = app.achievement_rows();
    let path = app.store.learning_path().to_vec();
    let display_name = app.settings.display_name.clone();

    // Acción elegida en este frame (se aplica al final)
    let mut go_to: Option<(String, ViewMode)> = None;

    simple_panel(ctx, 900.0, |ui| {
        ui.heading(format!("Welcome Back, {display_name}!"));
        ui.add_space(4.0);
        ui.label("Continue your journey to becoming a web developer.");
        ui.add_space(8.0);
        if ui.button("▶ Continue Learning").clicked() {
            go_to = Some((DEFAULT_COURSE.to_owned(), ViewMode::Lesson));
        }

        ui.add_space(16.0);
        ui.separator();
        ui.heading("📈 Your Progress");
        ui.add_space(6.0);
        for card in &cards {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.title).strong());
                ui.weak(format!(
                    "{}/{} lessons",
                    card.progress.completed_lessons, card.progress.total_lessons
                ));
            });
            ui.add(
                ProgressBar::new(card.mastery as f32 / 100.0)
                    .fill(parse_hex_color(&card.color))
                    .text(format!("{}% mastery", card.mastery)),
            );
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.heading("📚 Courses");
        ui.add_space(6.0);
        for card in &cards {
            ui.label(&card.description);
            if big_list_button(ui, card.label(), 320.0, 32.0, !card.coming_soon) {
                go_to = Some((card.id.clone(), ViewMode::Lesson));
            }
            ui.add_space(6.0);
        }

        if !path.is_empty() {
            ui.add_space(12.0);
            ui.separator();
            ui.heading("🧭 Learning Path");
            ui.add_space(6.0);
            for (i, step) in path.iter().enumerate() {
                ui.label(format!("{}. {}", i + 1, step.label));
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.heading("🏆 Achievements");
        ui.add_space(6.0);
        for row in rows.iter().take(3) {
            ui.horizontal(|ui| {
                ui.label(if row.earned { "🏅" } else { "🔒" });
                ui.label(RichText::new(&row.title).strong());
                ui.weak(&row.description);
            });
        }
    });

    if let Some((course, mode)) = go_to {
        app.navigate_to_module(&course, mode);
    }
}

use crate::LearnApp;
use crate::ui::layout::simple_panel;
use egui::{Color32, Context, ProgressBar, RichText};

pub fn ui_achievements(app: &mut LearnApp, ctx: &Context) {
    let rows = app.achievement_rows();
    let (earned, total) = app.earned_achievements();

    simple_panel(ctx, 900.0, |ui| {
        ui.heading("🏆 Achievements");
        ui.add_space(6.0);
        ui.label(format!("{earned} of {total} unlocked"));
        if total > 0 {
            ui.add(ProgressBar::new(earned as f32 / total as f32).desired_height(6.0));
        }
        ui.add_space(12.0);

        // Agrupadas por curso, en el orden en que aparecen
        let mut groups: Vec<&str> = Vec::new();
        for row in &rows {
            if !groups.contains(&row.course_title.as_str()) {
                groups.push(&row.course_title);
            }
        }
        for group in groups {
            ui.label(RichText::new(group).strong().size(16.0));
            ui.add_space(4.0);
            for row in rows.iter().filter(|r| r.course_title == group) {
                ui.horizontal(|ui| {
                    ui.label(if row.earned { "🏅" } else { "🔒" });
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&row.title).strong());
                        ui.weak(&row.description);
                    });
                    let color = if row.earned {
                        Color32::from_rgb(34, 160, 80)
                    } else {
                        ui.visuals().weak_text_color()
                    };
                    ui.colored_label(color, row.status());
                });
                ui.add_space(4.0);
            }
            ui.add_space(8.0);
        }
    });
}

use crate::LearnApp;
use crate::settings::Settings;
use crate::ui::layout::simple_panel;
use egui::{Context, RichText, TextEdit};

pub fn ui_settings(app: &mut LearnApp, ctx: &Context) {
    let mut visuals_changed = false;
    let mut restore = false;

    simple_panel(ctx, 600.0, |ui| {
        ui.heading("⚙ Settings");
        ui.add_space(12.0);

        ui.label(RichText::new("Profile").strong());
        egui::Grid::new("settings_profile")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Display name");
                ui.add(TextEdit::singleline(&mut app.settings.display_name).desired_width(260.0));
                ui.end_row();
                ui.label("Email");
                ui.add(TextEdit::singleline(&mut app.settings.email).desired_width(260.0));
                ui.end_row();
            });

        ui.add_space(14.0);
        ui.label(RichText::new("Preferences").strong());
        visuals_changed = ui
            .checkbox(&mut app.settings.dark_mode, "Dark mode")
            .changed();
        ui.checkbox(&mut app.settings.show_notifications, "Show notifications");
        ui.checkbox(&mut app.settings.assistant_enabled, "Enable AI assistant");

        ui.add_space(18.0);
        ui.weak("Preferences are saved automatically. Learning progress is not.");
        ui.add_space(6.0);
        restore = ui.button("⟲ Restore defaults").clicked();
    });

    if restore {
        log::info!("preferencias restauradas");
        app.settings = Settings::default();
        visuals_changed = true;
    }
    if visuals_changed {
        ctx.set_visuals(app.settings.visuals());
    }
}

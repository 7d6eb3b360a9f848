mod helpers;
pub mod layout;
pub mod views;

use crate::app::LearnApp;
use crate::model::{Tab, ViewMode};
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, notification_panel, sidebar};
use std::time::Duration;

impl App for LearnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respuestas diferidas del asistente
        let now = ctx.input(|i| i.time);
        self.assistant.poll(now);
        if let Some(wait) = self.assistant.next_due_in(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }
        if !self.settings.assistant_enabled && self.assistant.open {
            self.assistant.close();
        }

        sidebar(self, ctx);
        notification_panel(self, ctx);
        bottom_panel(self, ctx);

        // Dispatch por pestaña y modo
        match self.navigator().active_tab() {
            Tab::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            Tab::Learn => match self.navigator().view_mode() {
                ViewMode::Lesson => views::lesson::ui_lesson(self, ctx),
                ViewMode::Challenge => views::challenge::ui_challenge(self, ctx),
                ViewMode::Quiz => views::quiz::ui_quiz(self, ctx),
            },
            Tab::Challenges => views::coming_soon::ui_challenges_soon(self, ctx),
            Tab::Projects => views::coming_soon::ui_projects_soon(self, ctx),
            Tab::Achievements => views::achievements::ui_achievements(self, ctx),
            Tab::Settings => views::settings::ui_settings(self, ctx),
        }

        if self.assistant.open {
            views::assistant::ui_assistant(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Solo preferencias; el progreso no se guarda
        set_value(storage, APP_KEY, &self.settings);
    }
}

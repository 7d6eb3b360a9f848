use crate::LearnApp;
use crate::app::navigation::DEFAULT_COURSE;
use crate::model::{Tab, ViewMode};
use crate::ui::helpers::coming_soon_card;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_challenges_soon(app: &mut LearnApp, ctx: &Context) {
    let mut clicked = false;
    centered_panel(ctx, 220.0, 520.0, |ui| {
        clicked = coming_soon_card(
            ui,
            "Coding Challenges Coming Soon",
            "Standalone challenges are on the way. Meanwhile, try the HTML module challenge.",
            Some("Try HTML Challenge"),
        );
    });
    if clicked {
        app.navigate_to_module(DEFAULT_COURSE, ViewMode::Challenge);
    }
}

pub fn ui_projects_soon(app: &mut LearnApp, ctx: &Context) {
    let mut clicked = false;
    centered_panel(ctx, 220.0, 520.0, |ui| {
        clicked = coming_soon_card(
            ui,
            "Projects Coming Soon",
            "Guided projects will let you build complete websites step by step.",
            Some("Back to Dashboard"),
        );
    });
    if clicked {
        app.set_active_tab(Tab::Dashboard);
    }
}

use crate::LearnApp;
use crate::code_utils::html_syntax;
use crate::model::ViewMode;
use crate::ui::helpers::{criterion_row, doc_links_list, tag_chip};
use crate::ui::layout::{
    code_editor_input, editor_preview_toggle, html_preview, mode_toggle, simple_panel,
    two_button_row,
};
use egui::{Color32, Context, RichText};
use egui_commonmark::CommonMarkViewer;

pub fn ui_challenge(app: &mut LearnApp, ctx: &Context) {
    let concept = app.navigator().active_concept().to_owned();
    let challenge = app.ensure_challenge_session().challenge().clone();
    let links = app.store.doc_links(&concept).to_vec();
    let has_criteria = !challenge.solution_criteria.is_empty();

    let mut new_mode = None;
    let mut check = false;
    let mut reset = false;

    simple_panel(ctx, 1100.0, |ui| {
        ui.heading(&challenge.title);
        ui.horizontal(|ui| {
            tag_chip(ui, "HTML");
            tag_chip(ui, "Challenge");
        });
        ui.add_space(8.0);
        new_mode = mode_toggle(ui, ViewMode::Challenge, 360.0);
        ui.add_space(10.0);

        ui.columns(2, |cols| {
            let left = &mut cols[0];
            left.label(&challenge.description);
            left.add_space(8.0);
            left.label(RichText::new("Your Task:").strong());
            CommonMarkViewer::new().show(left, &mut app.cm_cache, &challenge.instructions);
            left.add_space(10.0);
            left.label(RichText::new("Reference Docs:").strong());
            doc_links_list(left, &links);

            if let Some(sub) = app.challenge_session() {
                if sub.is_checked() {
                    left.add_space(10.0);
                    left.label(RichText::new("Assessment:").strong());
                    for result in sub.results() {
                        criterion_row(left, result);
                    }
                    if sub.is_complete() {
                        left.add_space(6.0);
                        left.colored_label(
                            Color32::from_rgb(34, 160, 80),
                            RichText::new("🎉 Challenge complete! Every requirement is met.")
                                .strong(),
                        );
                    }
                }
            }

            let right = &mut cols[1];
            let width = right.available_width();
            editor_preview_toggle(right, &mut app.challenge_preview);
            if app.challenge_preview {
                let code = app.ensure_challenge_session().code().to_owned();
                html_preview(right, &mut app.cm_cache, &code, 420.0);
            } else {
                right.label(RichText::new("index.html").monospace());
                code_editor_input(
                    right,
                    "challenge_code",
                    width,
                    20,
                    html_syntax(),
                    app.ensure_challenge_session().code_mut(),
                    420.0,
                );
            }
            right.add_space(8.0);
            if has_criteria {
                (check, reset) = two_button_row(right, width, "✔ Check Solution", "⟲ Reset");
            } else {
                right.weak("Nothing to check for this module yet.");
            }
        });
    });

    if check && app.check_challenge() {
        app.message = "🏆 Achievement Unlocked! Challenge Accepted".into();
    }
    if reset {
        app.reset_challenge();
    }
    if let Some(mode) = new_mode {
        app.set_view_mode(mode);
    }
}

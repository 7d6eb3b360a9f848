use crate::LearnApp;
use crate::app::assistant::Role;
use egui::{Align2, Color32, Context, Frame, Key, RichText, ScrollArea, TextEdit};

pub fn ui_assistant(app: &mut LearnApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let mut close = false;

    egui::Window::new("🤖 AI Assistant")
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -48.0])
        .default_width(340.0)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("assistant_transcript")
                .max_height(320.0)
                .stick_to_bottom(true)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for msg in app.assistant.transcript() {
                        let (fill, align) = match msg.role {
                            Role::User => (ui.visuals().selection.bg_fill, egui::Align::Max),
                            Role::Assistant => (ui.visuals().faint_bg_color, egui::Align::Min),
                        };
                        ui.with_layout(egui::Layout::top_down(align), |ui| {
                            Frame::default()
                                .fill(fill)
                                .corner_radius(6)
                                .inner_margin(egui::Margin::symmetric(8, 6))
                                .show(ui, |ui| {
                                    ui.set_max_width(260.0);
                                    ui.label(&msg.content);
                                });
                        });
                        ui.add_space(4.0);
                    }
                    if app.assistant.has_pending() {
                        ui.weak("Assistant is typing…");
                    }
                });

            ui.separator();
            let mut send = false;
            ui.horizontal(|ui| {
                let response = ui.add(
                    TextEdit::singleline(&mut app.assistant.draft)
                        .hint_text("Ask a question…")
                        .desired_width(220.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    send = true;
                    response.request_focus();
                }
                if ui.button("Send").clicked() {
                    send = true;
                }
            });
            if send && app.assistant.send(now) {
                ctx.request_repaint();
            }

            ui.add_space(4.0);
            if ui
                .small_button(RichText::new("✖ Close").color(Color32::GRAY))
                .clicked()
            {
                close = true;
            }
        });

    if close {
        app.assistant.close();
    }
}

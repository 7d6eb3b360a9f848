use crate::LearnApp;
use crate::code_utils::html_preview_markdown;
use crate::model::{Tab, ViewMode};
use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

pub fn sidebar(app: &mut LearnApp, ctx: &Context) {
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(170.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading("🌐 Web Academy");
            ui.add_space(16.0);

            let active = app.navigator().active_tab();
            for tab in Tab::ALL {
                let button = Button::new(tab.label())
                    .selected(active == tab)
                    .min_size(egui::vec2(150.0, 32.0));
                if ui.add(button).clicked() {
                    if tab == Tab::Learn {
                        app.open_lessons();
                    } else {
                        app.set_active_tab(tab);
                    }
                }
                ui.add_space(4.0);
            }
        });
}

pub fn notification_panel(app: &mut LearnApp, ctx: &Context) {
    if app.message.is_empty() || !app.settings.show_notifications {
        return;
    }
    egui::TopBottomPanel::top("notification_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&app.message).strong());
            if ui.small_button("✖").clicked() {
                app.message.clear();
            }
        });
    });
}

pub fn bottom_panel(app: &mut LearnApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Tip: press Tab to indent code in the editor");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    app.settings.dark_mode = true;
                    ctx.set_visuals(app.settings.visuals());
                }
                if ui.button("☀ Light mode").clicked() {
                    app.settings.dark_mode = false;
                    ctx.set_visuals(app.settings.visuals());
                }
                if app.settings.assistant_enabled {
                    let label = if app.assistant.open {
                        "✖ Close assistant"
                    } else {
                        "🤖 Assistant"
                    };
                    if ui.button(label).clicked() {
                        app.assistant.toggle();
                    }
                }
            });
        });
    });
}

/// Selector Lecciones / Reto / Quiz. Devuelve el modo pulsado.
pub fn mode_toggle(ui: &mut Ui, current: ViewMode, width: f32) -> Option<ViewMode> {
    let btn_w = (width - 8.0) / ViewMode::ALL.len() as f32;
    let mut picked = None;
    ui.horizontal(|ui| {
        for mode in ViewMode::ALL {
            let button = Button::new(mode.label())
                .selected(mode == current)
                .min_size(egui::vec2(btn_w, 30.0));
            if ui.add(button).clicked() && mode != current {
                picked = Some(mode);
            }
        }
    });
    picked
}

/// Pestañas "HTML Editor" / "Preview". `preview` indica la activa.
pub fn editor_preview_toggle(ui: &mut Ui, preview: &mut bool) {
    ui.horizontal(|ui| {
        ui.selectable_value(preview, false, "</> HTML Editor");
        ui.selectable_value(preview, true, "👁 Preview");
    });
}

/// Render de la vista previa de un documento HTML
pub fn html_preview(ui: &mut Ui, cache: &mut CommonMarkCache, html: &str, max_height: f32) {
    let markdown = html_preview_markdown(html);
    Frame::default()
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ScrollArea::vertical()
                .max_height(max_height)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if markdown.is_empty() {
                        ui.weak("Nothing to preview yet.");
                    } else {
                        CommonMarkViewer::new().show(ui, cache, &markdown);
                    }
                });
        });
}

/// Panel central con anchura máxima y margen interior.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                Frame::default()
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
    });
}

/// Panel centrado vertical y horizontalmente
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 20))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

/// Editor de entrada con ancho fijo
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    syntax: Syntax,
    text: &mut String,
    max_height: f32,
) {
    let fontsize = egui::TextStyle::Monospace.resolve(ui.style()).size;
    ScrollArea::vertical()
        .id_salt(format!("{id}_scroll"))
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Editor de solo lectura (ejemplos)
pub fn code_editor_readonly(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    syntax: Syntax,
    code: &str,
    max_height: f32,
) {
    let mut buf = code.to_owned();
    code_editor_input(ui, id, width, rows, syntax, &mut buf, max_height);
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

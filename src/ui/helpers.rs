// src/ui/helpers.rs
use crate::model::{CriterionResult, DocLink};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Tarjeta "próximamente". Devuelve true si se pulsa el botón.
pub fn coming_soon_card(ui: &mut Ui, title: &str, body: &str, button: Option<&str>) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🚧").size(40.0));
        ui.add_space(8.0);
        ui.heading(title);
        ui.add_space(6.0);
        ui.label(body);
        if let Some(label) = button {
            ui.add_space(14.0);
            clicked = ui.add_sized([220.0, 34.0], Button::new(label)).clicked();
        }
    });
    clicked
}

pub fn doc_links_list(ui: &mut Ui, links: &[DocLink]) {
    if links.is_empty() {
        ui.weak("No resources yet.");
        return;
    }
    for link in links {
        if link.url.is_empty() {
            ui.label(RichText::new(&link.title).strong());
        } else {
            ui.hyperlink_to(format!("📄 {}", link.title), &link.url);
        }
        ui.weak(&link.description);
        ui.add_space(4.0);
    }
}

pub fn criterion_row(ui: &mut Ui, result: &CriterionResult) {
    let (icon, color) = if result.passed {
        ("✔", Color32::from_rgb(34, 160, 80))
    } else {
        ("✖", Color32::from_rgb(210, 60, 60))
    };
    ui.horizontal(|ui| {
        ui.colored_label(color, RichText::new(icon).strong());
        ui.vertical(|ui| {
            ui.label(RichText::new(&result.criterion).strong());
            ui.weak(&result.description);
        });
    });
}

pub fn tag_chip(ui: &mut Ui, text: &str) {
    egui::Frame::default()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.small(text);
        });
}

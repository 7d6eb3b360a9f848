use serde::{Deserialize, Serialize};

/// Preferencias del usuario. Se guardan en el almacenamiento de eframe;
/// el progreso de aprendizaje no.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub display_name: String,
    pub email: String,
    pub dark_mode: bool,
    pub show_notifications: bool,
    pub assistant_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_name: "Web Dev Student".into(),
            email: "student@example.com".into(),
            dark_mode: false,
            show_notifications: true,
            assistant_enabled: true,
        }
    }
}

impl Settings {
    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}

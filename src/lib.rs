pub mod app;
pub mod code_utils;
pub mod data;
pub mod judge;
pub mod model;
pub mod settings;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
pub mod ui;

pub use app::LearnApp;

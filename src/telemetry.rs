//! Inicialización de logs en escritorio (tracing-subscriber).
//!
//! - LOG_LEVEL controla el filtro, p. ej. "debug" o "info,web_academy=trace".
//! - Los registros de `log` se reenvían a tracing.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,web_academy=debug";

pub fn init_logging() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // try_init: no falla si ya hay un subscriber (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

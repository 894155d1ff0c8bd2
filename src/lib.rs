//! signflow: núcleo de la app de aprendizaje de lengua de señas.
//!
//! Este crate actúa como la librería central:
//! - Re-exporta `sign_core` (flujo de pantallas y ejercicios) y
//!   `sign_assets` (resolución y carga de videos).
//! - Expone `config` y `errors` comunes.
//! - `session` une flujo, ejercicio actual y video en pantalla.

use tracing_subscriber::EnvFilter;

pub mod config;
pub mod errors;
pub mod session;

pub use sign_assets as assets;
pub use sign_core as core;

pub use config::AppConfig;
pub use errors::{CoreError, DomainError};
pub use session::{LearningSession, MediaRequest};

/// Instala el subscriber de logs (`RUST_LOG`, por defecto `info`). Los crates
/// del workspace loguean con `log`; el puente de `tracing-subscriber` los recoge.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .try_init();
}

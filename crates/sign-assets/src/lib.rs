//! sign-assets: resolución de videos por clave de contenido.
//!
//! - `resolve` / `normalize`: puras, totales.
//! - `exists` / `preload`: I/O asíncrono a través de un `MediaSource`.
//! - `MediaSlot`: estado de un video en pantalla que descarta resultados tardíos.

pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;
pub mod slot;
pub mod source;

pub use catalog::{DEFAULT_BASE_PATH, FALLBACK_URL};
pub use config::AssetConfig;
pub use error::{ConfigError, LoadError, LoadFailure};
pub use resolver::AssetResolver;
pub use slot::{MediaSlot, SlotState, SlotTicket};
pub use source::{ConfiguredSource, FsMediaSource, HttpMediaSource, MediaMetadata, MediaSource};

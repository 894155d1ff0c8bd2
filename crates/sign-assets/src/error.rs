//! Errores de carga de media y de configuración.

use thiserror::Error;

/// Causa de un fallo al cargar/probar un recurso.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    #[error("not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// El recurso no se pudo cargar. Lleva la URL pedida.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to load {url}: {cause}")]
pub struct LoadError {
    pub url: String,
    pub cause: LoadFailure,
}

impl LoadError {
    pub fn new(url: impl Into<String>, cause: LoadFailure) -> Self {
        Self { url: url.into(), cause }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error("cannot build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

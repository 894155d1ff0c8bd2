use sign_core::{ExerciseError, FlowError};
use thiserror::Error;

use super::domain_error::DomainError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de flujo: {0}")]
    Flow(#[from] FlowError),
    #[error("Error de ejercicio: {0}")]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<sign_assets::ConfigError> for CoreError {
    fn from(e: sign_assets::ConfigError) -> Self {
        CoreError::Config(e.to_string())
    }
}

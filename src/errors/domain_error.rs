use thiserror::Error;

/// Errores del dominio de la aplicación
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entidad no encontrada: {0}")]
    NotFound(String),
    #[error("Validación fallida: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variant_format() {
        let err = DomainError::NotFound("ejercicio".into());
        assert_eq!(err.to_string(), "Entidad no encontrada: ejercicio");
    }

    #[test]
    fn test_validation_variant_format() {
        let err = DomainError::Validation("inválido".into());
        assert_eq!(err.to_string(), "Validación fallida: inválido");
    }
}

//! Configuración central de la aplicación.
//! Agrega la configuración de assets y la política de los ejercicios de las
//! lecciones completas. Todo se lee de variables de entorno (.env incluido).
use std::env;

use sign_assets::AssetConfig;
use sign_core::CheckPolicy;

use crate::errors::CoreError;

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dónde viven los videos y cómo se comprueban.
    pub assets: AssetConfig,
    /// Política ante respuestas incorrectas en lecciones completas
    /// (`SIGNFLOW_LESSON_POLICY` = `retry` | `advance`). El onboarding demo
    /// siempre avanza.
    pub lesson_policy: CheckPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        sign_assets::config::init_dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let assets = AssetConfig::from_lookup(&lookup)?;
        let lesson_policy = match lookup("SIGNFLOW_LESSON_POLICY") {
            Some(v) => v.parse().map_err(CoreError::Config)?,
            None => CheckPolicy::default(),
        };
        Ok(Self { assets, lesson_policy })
    }
}

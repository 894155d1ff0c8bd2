//! Carga de configuración de assets desde variables de entorno.
//! Convención `ASSET_*`; el archivo `.env` se carga una sola vez.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use reqwest::Url;

use crate::catalog::DEFAULT_BASE_PATH;
use crate::error::ConfigError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Prefijo para nombres de archivo relativos (`normalize`).
    pub base_path: String,
    /// Origen http contra el que se resuelven las rutas absolutas.
    pub origin: Option<Url>,
    /// Directorio local que sirve `/` cuando no hay origen http.
    pub static_root: Option<PathBuf>,
    pub probe_timeout: Duration,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self { base_path: DEFAULT_BASE_PATH.to_string(),
               origin: None,
               static_root: None,
               probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS) }
    }
}

impl AssetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de una función (tests, otras fuentes).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();

        if let Some(base) = lookup("ASSET_BASE_PATH").filter(|v| !v.trim().is_empty()) {
            if !base.starts_with('/') {
                return Err(ConfigError::Invalid { key: "ASSET_BASE_PATH",
                                                  reason: format!("{base:?} must start with '/'") });
            }
            cfg.base_path = base;
        }

        if let Some(origin) = lookup("ASSET_ORIGIN").filter(|v| !v.trim().is_empty()) {
            let url = Url::parse(origin.trim()).map_err(|e| ConfigError::Invalid { key: "ASSET_ORIGIN",
                                                                                  reason: e.to_string() })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::Invalid { key: "ASSET_ORIGIN",
                                                  reason: "origin must be http or https".into() });
            }
            cfg.origin = Some(url);
        }

        cfg.static_root = lookup("ASSET_STATIC_ROOT").filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        if let Some(ms) = lookup("ASSET_PROBE_TIMEOUT_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| ConfigError::Invalid { key: "ASSET_PROBE_TIMEOUT_MS",
                                                                               reason: format!("{ms:?} is not a number") })?;
            cfg.probe_timeout = Duration::from_millis(ms);
        }

        Ok(cfg)
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn cfg(pairs: &[(&str, &str)]) -> Result<AssetConfig, ConfigError> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AssetConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let c = cfg(&[]).unwrap();
        assert_eq!(c.base_path, "/resources/videos/");
        assert!(c.origin.is_none());
        assert_eq!(c.probe_timeout, Duration::from_millis(3000));
    }

    #[test]
    fn reads_all_keys() {
        let c = cfg(&[("ASSET_BASE_PATH", "/media/"),
                      ("ASSET_ORIGIN", "http://localhost:5173"),
                      ("ASSET_STATIC_ROOT", "public"),
                      ("ASSET_PROBE_TIMEOUT_MS", "250")]).unwrap();
        assert_eq!(c.base_path, "/media/");
        assert_eq!(c.origin.unwrap().as_str(), "http://localhost:5173/");
        assert_eq!(c.static_root, Some(PathBuf::from("public")));
        assert_eq!(c.probe_timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(cfg(&[("ASSET_BASE_PATH", "media")]), Err(ConfigError::Invalid { key: "ASSET_BASE_PATH", .. })));
        assert!(matches!(cfg(&[("ASSET_ORIGIN", "ftp://x")]), Err(ConfigError::Invalid { key: "ASSET_ORIGIN", .. })));
        assert!(matches!(cfg(&[("ASSET_PROBE_TIMEOUT_MS", "soon")]),
                         Err(ConfigError::Invalid { key: "ASSET_PROBE_TIMEOUT_MS", .. })));
    }
}

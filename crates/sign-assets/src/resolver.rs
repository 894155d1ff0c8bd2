//! Resolver de assets: clave de contenido -> URL, y comprobación/carga previa.

use log::{debug, warn};

use crate::catalog;
use crate::config::AssetConfig;
use crate::error::{ConfigError, LoadError};
use crate::source::{ConfiguredSource, MediaMetadata, MediaSource};

#[derive(Debug, Clone)]
pub struct AssetResolver<S: MediaSource> {
    base_path: String,
    source: S,
}

impl AssetResolver<ConfiguredSource> {
    /// Resolver con la fuente que indique la configuración.
    pub fn from_config(cfg: &AssetConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(&cfg.base_path, ConfiguredSource::from_config(cfg)?))
    }
}

impl<S: MediaSource> AssetResolver<S> {
    /// `base_path` se guarda anclado en la raíz (`static` -> `/static/`).
    pub fn new(base_path: impl AsRef<str>, source: S) -> Self {
        Self { base_path: catalog::rooted_base(base_path.as_ref()),
               source }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// URL del video para una clave. Nunca falla: clave desconocida -> fallback.
    pub fn resolve(&self, key: &str) -> &'static str {
        match catalog::lookup(key) {
            Some(url) => url,
            None => {
                debug!("no video for key {key:?}, using fallback");
                catalog::FALLBACK_URL
            }
        }
    }

    /// Prefija nombres relativos con la ruta base configurada. Idempotente.
    pub fn normalize(&self, path: &str) -> String {
        catalog::normalize(path, &self.base_path)
    }

    /// ¿Existe el recurso? Cualquier fallo cuenta como `false`; nunca propaga.
    pub async fn exists(&self, url: &str) -> bool {
        match self.source.probe(url).await {
            Ok(()) => true,
            Err(e) => {
                debug!("probe failed: {e}");
                false
            }
        }
    }

    /// Pide los metadatos del recurso; falla con `LoadError` si no se puede cargar.
    pub async fn preload(&self, url: &str) -> Result<MediaMetadata, LoadError> {
        self.source.metadata(url).await.inspect_err(|e| warn!("preload failed: {e}"))
    }

    /// `resolve` + `preload`: devuelve siempre la URL elegida junto al resultado.
    pub async fn load(&self, key: &str) -> (&'static str, Result<MediaMetadata, LoadError>) {
        let url = self.resolve(key);
        (url, self.preload(url).await)
    }
}

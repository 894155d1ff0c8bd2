//! Fuentes de media: dónde se comprueba/carga realmente una URL.
//!
//! El resolver sólo habla con el trait `MediaSource`; en la app se usa
//! `HttpMediaSource` (servidor de assets) o `FsMediaSource` (directorio local).

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_RANGE, CONTENT_TYPE, RANGE};
use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::config::AssetConfig;
use crate::error::{ConfigError, LoadError, LoadFailure};

/// Metadatos disponibles tras un preload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaMetadata {
    pub url: String,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
}

#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Comprobación ligera de existencia (sin descargar contenido).
    async fn probe(&self, url: &str) -> Result<(), LoadError>;
    /// Carga los metadatos del recurso.
    async fn metadata(&self, url: &str) -> Result<MediaMetadata, LoadError>;
}

// -------------------------------------------------------------
// HTTP
// -------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HttpMediaSource {
    client: reqwest::Client,
    origin: Option<Url>,
}

impl HttpMediaSource {
    pub fn new(origin: Option<Url>, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, origin })
    }

    fn to_url(&self, url: &str) -> Result<Url, LoadError> {
        if let Ok(abs) = Url::parse(url) {
            return Ok(abs);
        }
        let origin = self.origin
                         .as_ref()
                         .ok_or_else(|| LoadError::new(url, LoadFailure::InvalidUrl("relative url without origin".into())))?;
        origin.join(url)
              .map_err(|e| LoadError::new(url, LoadFailure::InvalidUrl(e.to_string())))
    }

    fn status_failure(status: StatusCode) -> LoadFailure {
        if status == StatusCode::NOT_FOUND {
            LoadFailure::NotFound
        } else {
            LoadFailure::Status(status.as_u16())
        }
    }

    fn transport_failure(err: reqwest::Error) -> LoadFailure {
        if err.is_timeout() {
            LoadFailure::Timeout
        } else {
            LoadFailure::Network(err.to_string())
        }
    }
}

#[async_trait]
impl MediaSource for HttpMediaSource {
    async fn probe(&self, url: &str) -> Result<(), LoadError> {
        let target = self.to_url(url)?;
        let res = self.client
                      .head(target)
                      .send()
                      .await
                      .map_err(|e| LoadError::new(url, Self::transport_failure(e)))?;
        if res.status().is_success() {
            Ok(())
        } else {
            Err(LoadError::new(url, Self::status_failure(res.status())))
        }
    }

    async fn metadata(&self, url: &str) -> Result<MediaMetadata, LoadError> {
        let target = self.to_url(url)?;
        // pedir sólo el primer byte: basta para tipo y tamaño
        let res = self.client
                      .get(target)
                      .header(RANGE, "bytes=0-0")
                      .send()
                      .await
                      .map_err(|e| LoadError::new(url, Self::transport_failure(e)))?;
        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::new(url, Self::status_failure(status)));
        }

        let headers = res.headers();
        let content_type = headers.get(CONTENT_TYPE)
                                  .and_then(|v| v.to_str().ok())
                                  .map(str::to_string);
        let content_length = if status == StatusCode::PARTIAL_CONTENT {
            // Content-Range: bytes 0-0/12345
            headers.get(CONTENT_RANGE)
                   .and_then(|v| v.to_str().ok())
                   .and_then(|v| v.rsplit('/').next())
                   .and_then(|total| total.parse().ok())
        } else {
            res.content_length()
        };

        Ok(MediaMetadata { url: url.to_string(),
                           content_type,
                           content_length })
    }
}

// -------------------------------------------------------------
// Filesystem
// -------------------------------------------------------------

/// Sirve las URLs absolutas desde un directorio raíz (`/x.mp4` -> `root/x.mp4`).
#[derive(Debug, Clone)]
pub struct FsMediaSource {
    root: PathBuf,
}

impl FsMediaSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn to_path(&self, url: &str) -> Result<PathBuf, LoadError> {
        let rel = Path::new(url.trim_start_matches('/'));
        if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
            return Err(LoadError::new(url, LoadFailure::InvalidUrl("path escapes static root".into())));
        }
        Ok(self.root.join(rel))
    }

    async fn file_len(&self, url: &str) -> Result<u64, LoadError> {
        let path = self.to_path(url)?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(meta.len()),
            Ok(_) => Err(LoadError::new(url, LoadFailure::NotFound)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LoadError::new(url, LoadFailure::NotFound)),
            Err(e) => Err(LoadError::new(url, LoadFailure::Io(e.to_string()))),
        }
    }
}

fn content_type_for(url: &str) -> &'static str {
    let ext = Path::new(url).extension()
                            .and_then(|e| e.to_str())
                            .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl MediaSource for FsMediaSource {
    async fn probe(&self, url: &str) -> Result<(), LoadError> {
        self.file_len(url).await.map(|_| ())
    }

    async fn metadata(&self, url: &str) -> Result<MediaMetadata, LoadError> {
        let len = self.file_len(url).await?;
        Ok(MediaMetadata { url: url.to_string(),
                           content_type: Some(content_type_for(url).to_string()),
                           content_length: Some(len) })
    }
}

// -------------------------------------------------------------
// Selección por configuración
// -------------------------------------------------------------

/// Fuente elegida a partir de `AssetConfig`: origen http si está definido,
/// si no el directorio local, y si no http sin origen (sólo URLs completas).
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpMediaSource),
    Fs(FsMediaSource),
}

impl ConfiguredSource {
    pub fn from_config(cfg: &AssetConfig) -> Result<Self, ConfigError> {
        match (&cfg.origin, &cfg.static_root) {
            (None, Some(root)) => Ok(Self::Fs(FsMediaSource::new(root.clone()))),
            (origin, _) => Ok(Self::Http(HttpMediaSource::new(origin.clone(), cfg.probe_timeout)?)),
        }
    }
}

#[async_trait]
impl MediaSource for ConfiguredSource {
    async fn probe(&self, url: &str) -> Result<(), LoadError> {
        match self {
            Self::Http(s) => s.probe(url).await,
            Self::Fs(s) => s.probe(url).await,
        }
    }

    async fn metadata(&self, url: &str) -> Result<MediaMetadata, LoadError> {
        match self {
            Self::Http(s) => s.metadata(url).await,
            Self::Fs(s) => s.metadata(url).await,
        }
    }
}

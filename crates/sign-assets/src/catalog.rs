//! Catálogo estático clave de contenido -> URL de video.
//!
//! Datos inmutables de proceso; se pueden leer desde cualquier número de
//! tareas a la vez.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Ruta base de los assets estáticos.
pub const DEFAULT_BASE_PATH: &str = "/resources/videos/";

/// URL devuelta cuando una clave no tiene entrada.
pub const FALLBACK_URL: &str = "/resources/videos/Chào.mp4";

pub static VIDEO_CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("greet", "/resources/videos/Chào.mp4"),
                   ("family", "/resources/videos/bố mẹ.mp4"),
                   ("you", "/resources/videos/bạn.mp4"),
                   ("me", "/resources/videos/tôi.mp4"),
                   ("thanks", "/resources/videos/cảm ơn.mp4"),
                   ("sorry", "/resources/videos/xin lỗi.mp4"),
                   ("goodbye", "/resources/videos/tạm biệt.mp4"),
                   ("love", "/resources/videos/yêu.mp4")])
});

/// Busca una clave; `None` si no está mapeada.
pub fn lookup(key: &str) -> Option<&'static str> {
    VIDEO_CATALOG.get(key).copied()
}

/// Resolución total: entrada del catálogo o `FALLBACK_URL`.
pub fn resolve(key: &str) -> &'static str {
    lookup(key).unwrap_or(FALLBACK_URL)
}

/// Ruta base anclada en la raíz y terminada en `/` (`static` -> `/static/`).
pub fn rooted_base(base_path: &str) -> String {
    match base_path.trim_matches('/') {
        "" => "/".to_string(),
        inner => format!("/{inner}/"),
    }
}

/// Rutas absolutas (o URLs completas) se devuelven tal cual; el resto se
/// prefija con `base_path`, que se ancla en la raíz si no lo estaba.
pub fn normalize(path: &str, base_path: &str) -> String {
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let file = path.trim_start_matches("./");
    format!("{}{file}", rooted_base(base_path))
}

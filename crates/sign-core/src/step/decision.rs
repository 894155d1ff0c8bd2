use serde::{Deserialize, Serialize};

/// Valor que un step entrega al controlador vía `advance`.
///
/// Los steps nunca mutan el `FlowState`; sólo devuelven uno de estos valores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Decision {
    /// Idioma de señas elegido (id de catálogo, p.ej. `vsl`).
    Language(String),
    /// Respuesta de un ejercicio ya corregida.
    Answer { selected: String, correct: bool },
    /// Lección completa: una respuesta final por pregunta y los aciertos al
    /// primer intento.
    Lesson { answers: Vec<Decision>, score: usize },
    /// Continuar sin aportar datos.
    Continue,
}

impl Decision {
    pub fn language(&self) -> Option<&str> {
        match self {
            Decision::Language(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Respuestas contenidas: la propia si es `Answer`, todas las de una `Lesson`.
    pub fn answers(&self) -> &[Decision] {
        match self {
            Decision::Answer { .. } => std::slice::from_ref(self),
            Decision::Lesson { answers, .. } => answers,
            Decision::Language(_) | Decision::Continue => &[],
        }
    }
}

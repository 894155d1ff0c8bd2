use serde::{Deserialize, Serialize};

use super::Decision;

/// Identificador estable de cada pantalla conocida por la app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    LanguageSelection,
    DemoLearn,
    DemoFillGap,
    FillGap,
    Completion,
}

impl StepId {
    /// Tipo de step que corresponde a cada identificador.
    pub fn default_kind(self) -> StepKind {
        match self {
            StepId::LanguageSelection => StepKind::Selection,
            StepId::DemoLearn => StepKind::Lesson,
            StepId::DemoFillGap | StepId::FillGap => StepKind::Exercise,
            StepId::Completion => StepKind::Completion,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::LanguageSelection => "language_selection",
            StepId::DemoLearn => "demo_learn",
            StepId::DemoFillGap => "demo_fill_gap",
            StepId::FillGap => "fill_gap",
            StepId::Completion => "completion",
        }
    }
}

/// Tipo general del step: determina qué decisión debe producir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Elige una opción de catálogo (p.ej. idioma). Requiere `Decision::Language`.
    Selection,
    /// Pantalla informativa; basta con continuar.
    Lesson,
    /// Ejercicio corregido. Requiere `Decision::Answer` o `Decision::Lesson`.
    Exercise,
    /// Paso terminal del flujo.
    Completion,
}

impl StepKind {
    pub fn requires_decision(self) -> bool {
        matches!(self, StepKind::Selection | StepKind::Exercise)
    }

    /// ¿Acepta este tipo de step la decisión dada?
    pub fn accepts(self, decision: &Decision) -> bool {
        match (self, decision) {
            (StepKind::Selection, Decision::Language(_)) => true,
            (StepKind::Exercise, Decision::Answer { .. } | Decision::Lesson { .. }) => true,
            (StepKind::Lesson | StepKind::Completion, Decision::Continue) => true,
            _ => false,
        }
    }
}

/// Step ya posicionado dentro de un flujo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub position: usize,
    pub kind: StepKind,
}

impl Step {
    pub fn new(id: StepId, position: usize) -> Self {
        Self { id,
               position,
               kind: id.default_kind() }
    }

    /// Sólo el paso de cierre es terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, StepKind::Completion)
    }
}

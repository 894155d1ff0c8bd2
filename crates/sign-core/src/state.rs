//! Estado acumulado de un flujo (`FlowState`).
//!
//! Lo posee en exclusiva el `FlowController`. Los steps lo leen a través de
//! `StepView` y sólo lo modifican indirectamente devolviendo una `Decision`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::step::{Decision, StepId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowState {
    /// Posición del step actual dentro del flujo.
    pub cursor: usize,
    /// Última decisión registrada por cada step (revisitar sobreescribe).
    pub decisions: BTreeMap<StepId, Decision>,
}

impl FlowState {
    pub fn decision(&self, step: StepId) -> Option<&Decision> {
        self.decisions.get(&step)
    }

    /// Idioma elegido en el flujo, si algún step lo decidió.
    pub fn language(&self) -> Option<&str> {
        self.decisions.values().find_map(Decision::language)
    }

    /// Respuesta seleccionada en un step de ejercicio (la última, si el step
    /// fue una lección de varias preguntas).
    pub fn answer_for(&self, step: StepId) -> Option<&str> {
        self.answers_for(step).pop()
    }

    /// Todas las respuestas de un step de ejercicio, en orden de pregunta.
    pub fn answers_for(&self, step: StepId) -> Vec<&str> {
        self.decisions
            .get(&step)
            .map(Decision::answers)
            .unwrap_or_default()
            .iter()
            .filter_map(|d| match d {
                Decision::Answer { selected, .. } => Some(selected.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Aciertos al primer intento de la lección hecha en `step`.
    pub fn lesson_score(&self, step: StepId) -> Option<usize> {
        match self.decisions.get(&step) {
            Some(Decision::Lesson { score, .. }) => Some(*score),
            _ => None,
        }
    }

    /// Respuestas correctas en todo el flujo, contando cada pregunta de una lección.
    pub fn correct_answers(&self) -> usize {
        self.decisions
            .values()
            .flat_map(Decision::answers)
            .filter(|d| matches!(d, Decision::Answer { correct: true, .. }))
            .count()
    }

    pub(crate) fn record(&mut self, step: StepId, decision: Decision) -> Option<Decision> {
        self.decisions.insert(step, decision)
    }
}

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::Question;
use crate::errors::ExerciseError;
use crate::step::Decision;

/// Qué hacer al continuar tras una respuesta incorrecta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckPolicy {
    /// Vuelve a `Unanswered` para intentarlo de nuevo.
    #[default]
    RetryOnIncorrect,
    /// Avanza siempre, con la respuesta registrada como incorrecta.
    AlwaysAdvance,
}

impl FromStr for CheckPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retry" | "retry_on_incorrect" => Ok(CheckPolicy::RetryOnIncorrect),
            "advance" | "always_advance" => Ok(CheckPolicy::AlwaysAdvance),
            other => Err(format!("unknown check policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// `Unanswered -> Answered(sel) -> Checked { .. }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillGapPhase {
    Unanswered,
    Answered(String),
    Checked { selection: String, outcome: Outcome },
}

/// Resultado de la acción "continuar" sobre un ejercicio corregido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continue {
    Advance,
    Retry,
}

#[derive(Debug, Clone)]
pub struct FillGapExercise {
    question: Question,
    policy: CheckPolicy,
    phase: FillGapPhase,
    attempts: u32,
}

impl FillGapExercise {
    pub fn new(question: Question, policy: CheckPolicy) -> Self {
        Self { question,
               policy,
               phase: FillGapPhase::Unanswered,
               attempts: 0 }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn policy(&self) -> CheckPolicy {
        self.policy
    }

    pub fn phase(&self) -> &FillGapPhase {
        &self.phase
    }

    /// Número de veces que se corrigió.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Opción elegida actualmente (antes o después de corregir).
    pub fn selection(&self) -> Option<&str> {
        match &self.phase {
            FillGapPhase::Unanswered => None,
            FillGapPhase::Answered(s) | FillGapPhase::Checked { selection: s, .. } => Some(s.as_str()),
        }
    }

    /// El botón "comprobar" sólo está habilitado con una selección pendiente.
    pub fn can_check(&self) -> bool {
        matches!(self.phase, FillGapPhase::Answered(_))
    }

    /// Elige una opción; una nueva selección reemplaza a la anterior.
    pub fn select(&mut self, option: &str) -> Result<(), ExerciseError> {
        if matches!(self.phase, FillGapPhase::Checked { .. }) {
            return Err(ExerciseError::AlreadyChecked);
        }
        if !self.question.has_option(option) {
            return Err(ExerciseError::UnknownOption(option.to_string()));
        }
        self.phase = FillGapPhase::Answered(option.to_string());
        Ok(())
    }

    /// Compara la selección con la respuesta correcta. Irreversible.
    pub fn check(&mut self) -> Result<Outcome, ExerciseError> {
        let selection = match &self.phase {
            FillGapPhase::Unanswered => return Err(ExerciseError::NoSelection),
            FillGapPhase::Checked { .. } => return Err(ExerciseError::AlreadyChecked),
            FillGapPhase::Answered(s) => s.clone(),
        };
        let outcome = if self.question.is_correct(&selection) { Outcome::Correct } else { Outcome::Incorrect };
        self.attempts += 1;
        debug!("fill-gap check #{}: {:?} -> {:?}", self.attempts, selection, outcome);
        self.phase = FillGapPhase::Checked { selection, outcome };
        Ok(outcome)
    }

    /// Acción "continuar" tras corregir, según la política.
    pub fn proceed(&mut self) -> Result<Continue, ExerciseError> {
        let outcome = match &self.phase {
            FillGapPhase::Checked { outcome, .. } => *outcome,
            _ => return Err(ExerciseError::NotChecked),
        };
        match (outcome, self.policy) {
            (Outcome::Incorrect, CheckPolicy::RetryOnIncorrect) => {
                self.phase = FillGapPhase::Unanswered;
                Ok(Continue::Retry)
            }
            _ => Ok(Continue::Advance),
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match &self.phase {
            FillGapPhase::Checked { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// Decisión a entregar al controlador de flujo, una vez corregido.
    pub fn decision(&self) -> Option<Decision> {
        match &self.phase {
            FillGapPhase::Checked { selection, outcome } => {
                Some(Decision::Answer { selected: selection.clone(),
                                        correct: *outcome == Outcome::Correct })
            }
            _ => None,
        }
    }
}

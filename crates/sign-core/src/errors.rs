//! Errores específicos del core (flujo + ejercicios).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::step::{StepId, StepKind};

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum FlowError {
    #[error("flow already completed")] FlowCompleted,
    #[error("step {step:?} requires a decision")] MissingDecision { step: StepId },
    #[error("step {step:?} ({kind:?}) does not accept this decision")] UnexpectedDecision { step: StepId, kind: StepKind },
    #[error("unknown language id: {0}")] UnknownLanguage(String),
    #[error("invalid flow definition: {0}")] InvalidDefinition(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ExerciseError {
    #[error("option not offered by the question: {0}")] UnknownOption(String),
    #[error("no option selected yet")] NoSelection,
    #[error("answer already checked")] AlreadyChecked,
    #[error("answer not checked yet")] NotChecked,
    #[error("lesson already finished")] LessonFinished,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QuestionError {
    #[error("sentence has no gap marker")] MissingGap,
    #[error("question needs at least one option")] NoOptions,
    #[error("duplicated option: {0}")] DuplicateOption(String),
    #[error("correct answer {0:?} is not among the options")] CorrectNotInOptions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_error_messages_name_the_step() {
        let err = FlowError::MissingDecision { step: StepId::LanguageSelection };
        assert_eq!(err.to_string(), "step LanguageSelection requires a decision");
    }

    #[test]
    fn question_error_quotes_the_answer() {
        let err = QuestionError::CorrectNotInOptions("BẠN".into());
        assert_eq!(err.to_string(), "correct answer \"BẠN\" is not among the options");
    }
}

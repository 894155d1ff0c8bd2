//! sign-core: controlador de flujo de pantallas y ejercicios fill-gap.
//!
//! Todo es síncrono y sin I/O: las transiciones ocurren una tras otra desde
//! los handlers de la UI, así que el estado no necesita locks.
pub mod engine;
pub mod errors;
pub mod event;
pub mod exercise;
pub mod flows;
pub mod state;
pub mod step;

pub use engine::{AdvanceOutcome, FlowBuilder, FlowController, StepCtx, StepTicket, StepView};
pub use errors::{ExerciseError, FlowError, QuestionError};
pub use event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
pub use exercise::{CheckPolicy, Continue, FillGapExercise, FillGapPhase, Lesson, LessonStep, Outcome, Question};
pub use state::FlowState;
pub use step::{Decision, Step, StepId, StepKind, StepStatus};

//! Builder para `FlowController`.
//!
//! Declara la secuencia ordenada de steps y valida su forma al construir:
//! - al menos un step;
//! - el step de cierre (`Completion`) aparece una sola vez y al final;
//! - no hay identificadores repetidos (las decisiones se indexan por id).
//!
//! ```ignore
//! let flow = FlowController::builder()
//!     .step(StepId::LanguageSelection)
//!     .step(StepId::DemoLearn)
//!     .step(StepId::Completion)
//!     .on_complete(|st| println!("{:?}", st.language()))
//!     .build()?;
//! ```

use crate::engine::{CompletionHook, FlowController};
use crate::errors::FlowError;
use crate::event::EventStore;
use crate::state::FlowState;
use crate::step::{Step, StepId};

pub struct FlowBuilder<E: EventStore> {
    event_store: E,
    steps: Vec<StepId>,
    known_languages: Vec<String>,
    on_complete: Option<CompletionHook>,
}

impl<E: EventStore> FlowBuilder<E> {
    pub(crate) fn new(event_store: E) -> Self {
        Self { event_store,
               steps: Vec::new(),
               known_languages: Vec::new(),
               on_complete: None }
    }

    /// Añade un step al final de la secuencia.
    #[inline]
    pub fn step(mut self, id: StepId) -> Self {
        self.steps.push(id);
        self
    }

    #[inline]
    pub fn steps(mut self, ids: impl IntoIterator<Item = StepId>) -> Self {
        self.steps.extend(ids);
        self
    }

    /// Restringe los idiomas aceptados en steps de selección. Vacío = cualquiera.
    pub fn known_languages<I, S>(mut self, ids: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.known_languages = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Callback de cierre: recibe el estado final una vez por llegada al terminal.
    pub fn on_complete<F>(mut self, hook: F) -> Self
        where F: FnMut(&FlowState) + 'static
    {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Valida la secuencia y construye el controlador posicionado en el primer step.
    pub fn build(self) -> Result<FlowController<E>, FlowError> {
        let steps: Vec<Step> = self.steps
                                   .iter()
                                   .enumerate()
                                   .map(|(pos, id)| Step::new(*id, pos))
                                   .collect();

        let Some(last) = steps.last() else {
            return Err(FlowError::InvalidDefinition("flow has no steps".into()));
        };
        if !last.is_terminal() {
            return Err(FlowError::InvalidDefinition("last step must be the completion step".into()));
        }
        if steps[..steps.len() - 1].iter().any(Step::is_terminal) {
            return Err(FlowError::InvalidDefinition("completion step must appear only at the end".into()));
        }
        for (i, s) in steps.iter().enumerate() {
            if steps[..i].iter().any(|p| p.id == s.id) {
                return Err(FlowError::InvalidDefinition(format!("duplicated step {:?}", s.id)));
            }
        }

        Ok(FlowController::from_parts(steps, self.known_languages, self.event_store, self.on_complete))
    }
}

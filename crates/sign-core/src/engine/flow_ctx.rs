//! Contexto entregado a un step: `{ data, on_advance, on_retreat }`.

use crate::engine::{AdvanceOutcome, FlowController, StepView};
use crate::errors::FlowError;
use crate::event::EventStore;
use crate::step::Decision;

/// Handle prestado sobre el controlador para el step actual.
///
/// Es la única superficie que ve el código de una pantalla: lee la vista y
/// devuelve su decisión por callback, nunca toca el `FlowState`.
pub struct StepCtx<'a, E: EventStore> {
    controller: &'a mut FlowController<E>,
}

impl<'a, E: EventStore> StepCtx<'a, E> {
    #[inline]
    pub fn new(controller: &'a mut FlowController<E>) -> Self {
        Self { controller }
    }

    /// Datos del step actual.
    #[inline]
    pub fn data(&self) -> StepView<'_> {
        self.controller.current_step()
    }

    #[inline]
    pub fn on_advance(&mut self, decision: Option<Decision>) -> Result<AdvanceOutcome, FlowError> {
        self.controller.advance(decision)
    }

    #[inline]
    pub fn on_retreat(&mut self) -> bool {
        self.controller.retreat()
    }

    /// Entrega decisiones en orden hasta que el flujo señale su cierre.
    ///
    /// Devuelve `Ok(true)` si se completó, `Ok(false)` si se agotaron las
    /// decisiones antes.
    pub fn drive<I>(&mut self, decisions: I) -> Result<bool, FlowError>
        where I: IntoIterator<Item = Option<Decision>>
    {
        for d in decisions {
            if let AdvanceOutcome::Completed = self.on_advance(d)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

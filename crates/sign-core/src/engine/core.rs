//! Core FlowController implementation

use log::{debug, warn};
use uuid::Uuid;

use crate::engine::FlowBuilder;
use crate::errors::FlowError;
use crate::event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
use crate::state::FlowState;
use crate::step::{Decision, Step, StepId, StepStatus};

/// Callback invocado con el estado final al cerrar el flujo.
pub type CompletionHook = Box<dyn FnMut(&FlowState)>;

/// Resultado de `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// El cursor pasó de un step al siguiente.
    Moved { from: StepId, to: StepId },
    /// Se estaba en el step terminal: se señaló el cierre.
    Completed,
}

/// Marca de la transición vigente cuando se entregó una vista.
///
/// Un resultado asíncrono (p.ej. el probe de un video) sólo debe aplicarse si
/// su ticket sigue vigente según `FlowController::is_current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTicket {
    flow_id: Uuid,
    epoch: u64,
}

/// Vista de sólo lectura del step a renderizar.
#[derive(Debug, Clone)]
pub struct StepView<'a> {
    pub step: Step,
    /// Decisión registrada antes para este mismo step (al revisitarlo).
    pub previous: Option<&'a Decision>,
    /// Idioma elegido hasta ahora.
    pub language: Option<&'a str>,
    pub total: usize,
    pub can_retreat: bool,
    pub ticket: StepTicket,
}

/// Controlador de un flujo lineal de pantallas.
///
/// Posee la secuencia de steps y el `FlowState`; expone avance/retroceso y la
/// vista del step actual. Todas las transiciones son síncronas.
pub struct FlowController<E = InMemoryEventStore>
    where E: EventStore
{
    flow_id: Uuid,
    steps: Vec<Step>,
    state: FlowState,
    known_languages: Vec<String>,
    event_store: E,
    on_complete: Option<CompletionHook>,
    completion_signaled: bool,
    epoch: u64,
}

impl FlowController<InMemoryEventStore> {
    /// Crea un builder con store de eventos en memoria.
    #[inline]
    pub fn builder() -> FlowBuilder<InMemoryEventStore> {
        FlowBuilder::new(InMemoryEventStore::default())
    }
}

impl<E> FlowController<E> where E: EventStore
{
    /// Crea un builder con la store proporcionada.
    #[inline]
    pub fn builder_with_store(event_store: E) -> FlowBuilder<E> {
        FlowBuilder::new(event_store)
    }

    pub(crate) fn from_parts(steps: Vec<Step>,
                             known_languages: Vec<String>,
                             event_store: E,
                             on_complete: Option<CompletionHook>)
                             -> Self {
        let mut ctl = Self { flow_id: Uuid::new_v4(),
                             steps,
                             state: FlowState::default(),
                             known_languages,
                             event_store,
                             on_complete,
                             completion_signaled: false,
                             epoch: 0 };
        ctl.event_store
           .append_kind(ctl.flow_id, FlowEventKind::FlowInitialized { step_count: ctl.steps.len() });
        ctl.enter(0);
        ctl
    }

    pub fn flow_id(&self) -> Uuid {
        self.flow_id
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    fn current(&self) -> Step {
        self.steps[self.state.cursor]
    }

    /// Step a renderizar junto con el subconjunto de estado que le concierne.
    pub fn current_step(&self) -> StepView<'_> {
        let step = self.current();
        StepView { step,
                   previous: self.state.decision(step.id),
                   language: self.state.language(),
                   total: self.steps.len(),
                   can_retreat: self.state.cursor > 0,
                   ticket: StepTicket { flow_id: self.flow_id,
                                        epoch: self.epoch } }
    }

    /// ¿Sigue vigente la transición en la que se emitió `ticket`?
    pub fn is_current(&self, ticket: &StepTicket) -> bool {
        ticket.flow_id == self.flow_id && ticket.epoch == self.epoch
    }

    /// Acepta la decisión del step actual y avanza el cursor.
    ///
    /// En el step terminal no se mueve: la primera llamada señala el cierre
    /// (callback `on_complete`) y las siguientes devuelven `FlowCompleted`.
    pub fn advance(&mut self, decision: Option<Decision>) -> Result<AdvanceOutcome, FlowError> {
        let step = self.current();
        if step.is_terminal() {
            return self.complete();
        }

        let accepted = self.validate(step, decision)?;
        if let Some(decision) = accepted {
            self.event_store.append_kind(self.flow_id,
                                         FlowEventKind::DecisionRecorded { position: step.position,
                                                                           step_id: step.id,
                                                                           decision: decision.clone() });
            self.state.record(step.id, decision);
        }

        let to = step.position + 1;
        self.enter(to);
        Ok(AdvanceOutcome::Moved { from: step.id,
                                   to: self.steps[to].id })
    }

    /// Vuelve al step anterior. En el primer step no hace nada y devuelve `false`.
    ///
    /// Las decisiones de steps posteriores se conservan.
    pub fn retreat(&mut self) -> bool {
        let from = self.state.cursor;
        if from == 0 {
            return false;
        }
        self.event_store
            .append_kind(self.flow_id, FlowEventKind::StepRetreated { from, to: from - 1 });
        self.enter(from - 1);
        true
    }

    pub fn is_completed(&self) -> bool {
        self.completion_signaled
    }

    /// Porcentaje de avance (0 en el primer step, 100 en el terminal).
    pub fn progress_percent(&self) -> u8 {
        let last = self.steps.len().saturating_sub(1);
        if last == 0 {
            return 100;
        }
        (self.state.cursor * 100 / last) as u8
    }

    /// Estado derivado de cada step respecto al cursor (barra de progreso).
    pub fn statuses(&self) -> Vec<(StepId, StepStatus)> {
        self.steps
            .iter()
            .map(|s| (s.id, StepStatus::derive(s.position, self.state.cursor)))
            .collect()
    }

    /// Lista eventos del flujo.
    pub fn events(&self) -> Vec<FlowEvent> {
        self.event_store.list(self.flow_id)
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    fn validate(&self, step: Step, decision: Option<Decision>) -> Result<Option<Decision>, FlowError> {
        let decision = match decision {
            None if step.kind.requires_decision() => {
                warn!("advance without decision on {:?}", step.id);
                return Err(FlowError::MissingDecision { step: step.id });
            }
            None | Some(Decision::Continue) if !step.kind.requires_decision() => return Ok(None),
            None => return Err(FlowError::MissingDecision { step: step.id }),
            Some(d) => d,
        };

        if !step.kind.accepts(&decision) {
            warn!("decision {:?} rejected on {:?}", decision, step.id);
            return Err(FlowError::UnexpectedDecision { step: step.id,
                                                       kind: step.kind });
        }

        if let Decision::Language(id) = &decision {
            if id.trim().is_empty() {
                return Err(FlowError::MissingDecision { step: step.id });
            }
            if !self.known_languages.is_empty() && !self.known_languages.iter().any(|l| l == id) {
                return Err(FlowError::UnknownLanguage(id.clone()));
            }
        }

        Ok(Some(decision))
    }

    fn complete(&mut self) -> Result<AdvanceOutcome, FlowError> {
        if self.completion_signaled {
            return Err(FlowError::FlowCompleted);
        }
        self.completion_signaled = true;
        self.event_store.append_kind(self.flow_id,
                                     FlowEventKind::FlowCompleted { decisions: self.state.decisions.len() });
        debug!("flow {} completed with {} decisions", self.flow_id, self.state.decisions.len());
        if let Some(hook) = self.on_complete.as_mut() {
            hook(&self.state);
        }
        Ok(AdvanceOutcome::Completed)
    }

    fn enter(&mut self, position: usize) {
        self.state.cursor = position;
        self.epoch += 1;
        // cada llegada al terminal habilita un único cierre
        self.completion_signaled = false;
        let step = self.current();
        self.event_store.append_kind(self.flow_id,
                                     FlowEventKind::StepEntered { position,
                                                                  step_id: step.id });
        debug!("flow {} -> step {} ({:?})", self.flow_id, position, step.id);
    }
}

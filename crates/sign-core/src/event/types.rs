//! Tipos de evento del flujo y estructura `FlowEvent`.
//!
//! Rol en el flujo:
//! - Cada transición del `FlowController` agrega un evento a un `EventStore`
//!   append-only que vive sólo en memoria durante la sesión.
//! - Sirven para diagnóstico y para comprobar invariantes (p.ej. que el cierre
//!   se señala una sola vez por llegada al step terminal).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::step::{Decision, StepId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowEventKind {
    /// Primer evento de un `flow_id`: fija la cantidad de steps.
    FlowInitialized { step_count: usize },
    /// El cursor se posicionó en un step (inicio, avance o retroceso).
    StepEntered { position: usize, step_id: StepId },
    /// Se registró (o sobreescribió) la decisión de un step.
    DecisionRecorded { position: usize, step_id: StepId, decision: Decision },
    /// El usuario volvió al step anterior.
    StepRetreated { from: usize, to: usize },
    /// Se señaló el cierre del flujo al callback externo.
    FlowCompleted { decisions: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEvent {
    pub seq: u64, // asignado por la store (orden append)
    pub flow_id: Uuid,
    pub kind: FlowEventKind,
    pub ts: DateTime<Utc>,
}

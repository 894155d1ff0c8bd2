use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{FlowEvent, FlowEventKind};

/// Diario de transiciones de uno o varios flujos. Sólo se añade, nunca se edita.
pub trait EventStore {
    /// Registra `kind` para `flow_id` asignándole el siguiente `seq` del flujo.
    fn append_kind(&mut self, flow_id: Uuid, kind: FlowEventKind) -> FlowEvent;
    /// Eventos del flujo en el orden en que se registraron.
    fn list(&self, flow_id: Uuid) -> Vec<FlowEvent>;
}

/// Diario en memoria compartido por todos los flujos: un único vector en orden
/// de llegada y un contador de `seq` por flujo.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    journal: Vec<FlowEvent>,
    next_seq: HashMap<Uuid, u64>,
}

impl InMemoryEventStore {
    /// Total de eventos registrados, de cualquier flujo.
    pub fn len(&self) -> usize {
        self.journal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journal.is_empty()
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, flow_id: Uuid, kind: FlowEventKind) -> FlowEvent {
        let counter = self.next_seq.entry(flow_id).or_insert(0);
        let event = FlowEvent { seq: *counter,
                                flow_id,
                                kind,
                                ts: Utc::now() };
        *counter += 1;
        self.journal.push(event.clone());
        event
    }

    fn list(&self, flow_id: Uuid) -> Vec<FlowEvent> {
        self.journal.iter().filter(|e| e.flow_id == flow_id).cloned().collect()
    }
}

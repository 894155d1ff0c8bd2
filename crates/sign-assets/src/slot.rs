//! Estado de un hueco de video en pantalla con descarte de resultados tardíos.
//!
//! Cada `begin` invalida las cargas anteriores: si el usuario cambia de step
//! antes de que termine un preload, su resultado llega con un ticket viejo y
//! `settle` lo ignora. Un fallo deja un placeholder visible; el flujo nunca
//! se bloquea por esto.

use crate::error::LoadError;
use crate::source::MediaMetadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Loading { url: String },
    Ready(MediaMetadata),
    Placeholder { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTicket(u64);

#[derive(Debug, Clone)]
pub struct MediaSlot {
    state: SlotState,
    generation: u64,
}

impl Default for MediaSlot {
    fn default() -> Self {
        Self { state: SlotState::Empty,
               generation: 0 }
    }
}

impl MediaSlot {
    pub fn state(&self) -> &SlotState {
        &self.state
    }

    /// Empieza a cargar `url`; devuelve el ticket que debe acompañar al resultado.
    pub fn begin(&mut self, url: impl Into<String>) -> SlotTicket {
        self.generation += 1;
        self.state = SlotState::Loading { url: url.into() };
        SlotTicket(self.generation)
    }

    /// Aplica el resultado si el ticket sigue vigente. Devuelve si se aplicó.
    pub fn settle(&mut self, ticket: SlotTicket, result: Result<MediaMetadata, LoadError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(meta) => SlotState::Ready(meta),
            Err(e) => SlotState::Placeholder { url: e.url.clone(),
                                               reason: e.cause.to_string() },
        };
        true
    }

    /// Vacía el hueco e invalida cualquier carga en curso.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = SlotState::Empty;
    }

    /// URL reproducible, sólo cuando la carga terminó bien.
    pub fn playable_url(&self) -> Option<&str> {
        match &self.state {
            SlotState::Ready(meta) => Some(meta.url.as_str()),
            _ => None,
        }
    }
}

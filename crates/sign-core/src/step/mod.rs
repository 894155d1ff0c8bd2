//! Definiciones relacionadas a Steps.
//!
//! Un Step es una pantalla dentro de un Flow. Es estático: se define al
//! construir el flujo y nunca muta. El controlador avanza un cursor sobre la
//! secuencia ordenada de Steps. Este módulo define:
//! - `StepId` / `StepKind` / `Step`: identidad, tipo y posición.
//! - `Decision`: valor que un step devuelve al controlador.
//! - `StepStatus`: estado derivado de cada step respecto al cursor.

pub mod decision;
pub mod definition;
mod status;

pub use decision::Decision;
pub use definition::{Step, StepId, StepKind};
pub use status::StepStatus;

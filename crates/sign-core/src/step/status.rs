/// Estado de un Step respecto al cursor del flujo.
///
/// Se deriva de la posición del cursor; no se almacena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Aún no alcanzado.
    Pending,
    /// Es el step que se está mostrando.
    Current,
    /// Ya se visitó (hay un step posterior actual).
    Visited,
}

impl StepStatus {
    pub fn derive(position: usize, cursor: usize) -> Self {
        use std::cmp::Ordering;
        match position.cmp(&cursor) {
            Ordering::Less => StepStatus::Visited,
            Ordering::Equal => StepStatus::Current,
            Ordering::Greater => StepStatus::Pending,
        }
    }
}

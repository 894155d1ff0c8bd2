//! Ejercicios de completar el hueco (fill-gap).
//!
//! Una única máquina de estados compartida por la demo de onboarding y por las
//! lecciones completas; la diferencia entre ambas (reintentar o avanzar ante
//! una respuesta incorrecta) se fija con `CheckPolicy` al construir.

mod fill_gap;
mod lesson;
mod question;

pub use fill_gap::{CheckPolicy, Continue, FillGapExercise, FillGapPhase, Outcome};
pub use lesson::{Lesson, LessonStep};
pub use question::{Question, GAP};

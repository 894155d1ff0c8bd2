//! Flujos predefinidos de la app y su contenido de demo.
//!
//! - `onboarding`: selección de idioma -> lección demo -> ejercicio demo -> cierre.
//! - `fill_gap_lesson`: un ejercicio fill-gap (lección completa) -> cierre.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::engine::{FlowBuilder, FlowController};
use crate::event::InMemoryEventStore;
use crate::exercise::Question;
use crate::step::StepId;

/// Idioma de señas ofrecido en la selección inicial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignLanguage {
    pub id: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub const LANGUAGES: &[SignLanguage] = &[SignLanguage { id: "vsl",
                                                        name: "Ngôn ngữ ký hiệu Việt Nam",
                                                        flag: "🇻🇳" },
                                         SignLanguage { id: "asl",
                                                        name: "American Sign Language",
                                                        flag: "🇺🇸" },
                                         SignLanguage { id: "bsl",
                                                        name: "British Sign Language",
                                                        flag: "🇬🇧" }];

pub fn find_language(id: &str) -> Option<&'static SignLanguage> {
    LANGUAGES.iter().find(|l| l.id == id)
}

pub const ONBOARDING_STEPS: [StepId; 4] =
    [StepId::LanguageSelection, StepId::DemoLearn, StepId::DemoFillGap, StepId::Completion];

pub const FILL_GAP_STEPS: [StepId; 2] = [StepId::FillGap, StepId::Completion];

/// Builder del onboarding; el llamador añade `on_complete` antes de `build`.
pub fn onboarding() -> FlowBuilder<InMemoryEventStore> {
    FlowController::builder().steps(ONBOARDING_STEPS)
                             .known_languages(LANGUAGES.iter().map(|l| l.id))
}

pub fn fill_gap_lesson() -> FlowBuilder<InMemoryEventStore> {
    FlowController::builder().steps(FILL_GAP_STEPS)
}

/// Clave de contenido del video que muestra cada step, si muestra alguno.
pub fn video_key(step: StepId) -> Option<&'static str> {
    match step {
        StepId::DemoLearn => Some("greet"),
        StepId::DemoFillGap => Some("you"),
        StepId::FillGap => Some("family"),
        StepId::LanguageSelection | StepId::Completion => None,
    }
}

/// Frase, opciones y respuesta de cada pregunta de la lección completa.
pub const LESSON_CONTENT: &[(&str, &[&str], &str)] =
    &[("Tôi yêu ___ của tôi.", &["BỐ MẸ", "BẠN", "CẢM ƠN"], "BỐ MẸ"),
      ("___ bạn đã giúp tôi.", &["XIN LỖI", "CẢM ƠN", "TẠM BIỆT"], "CẢM ƠN"),
      ("Hẹn gặp lại, ___!", &["TẠM BIỆT", "XIN CHÀO"], "TẠM BIỆT")];

// Contenido fijo: un fallo aquí es un error de programación.
static DEMO_QUESTION: Lazy<Question> = Lazy::new(|| {
    Question::new("Xin chào, ___ tên là gì?", ["BẠN", "TÔI", "ANH"], "BẠN").expect("demo question is well-formed")
});

static LESSON_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    LESSON_CONTENT.iter()
                  .map(|(sentence, options, correct)| {
                      Question::new(*sentence, options.iter().copied(), *correct).expect("lesson question is well-formed")
                  })
                  .collect()
});

/// Pregunta del ejercicio demo del onboarding.
pub fn demo_question() -> Question {
    DEMO_QUESTION.clone()
}

/// Preguntas de la lección fill-gap completa.
pub fn lesson_questions() -> Vec<Question> {
    LESSON_QUESTIONS.clone()
}

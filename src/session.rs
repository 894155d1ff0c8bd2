//! Sesión de aprendizaje: une el controlador de flujo, el ejercicio vivo del
//! step actual y el hueco de video.
//!
//! - Las transiciones son síncronas y pasan siempre por el `FlowController`.
//! - La carga de video se parte en `begin_media` / `apply_media` para que el
//!   `await` ocurra fuera de la sesión; un resultado que llega después de
//!   cambiar de step se descarta.
use log::debug;
use sign_assets::{AssetResolver, LoadError, MediaMetadata, MediaSlot, MediaSource, SlotTicket};
use sign_core::flows::{self, video_key};
use sign_core::{AdvanceOutcome, CheckPolicy, Decision, FlowController, Lesson, LessonStep, Outcome, StepKind,
                StepTicket, StepView};

use crate::errors::{CoreError, DomainError};

/// Carga de video pendiente para el step que estaba activo al pedirla.
#[derive(Debug, Clone)]
pub struct MediaRequest {
    pub url: &'static str,
    step: StepTicket,
    slot: SlotTicket,
}

pub struct LearningSession<S: MediaSource> {
    flow: FlowController,
    resolver: AssetResolver<S>,
    slot: MediaSlot,
    lesson: Option<Lesson>,
    lesson_policy: CheckPolicy,
}

impl<S: MediaSource> LearningSession<S> {
    pub fn new(flow: FlowController, resolver: AssetResolver<S>, lesson_policy: CheckPolicy) -> Self {
        let mut session = Self { flow,
                                 resolver,
                                 slot: MediaSlot::default(),
                                 lesson: None,
                                 lesson_policy };
        session.on_enter();
        session
    }

    pub fn flow(&self) -> &FlowController {
        &self.flow
    }

    pub fn view(&self) -> StepView<'_> {
        self.flow.current_step()
    }

    pub fn resolver(&self) -> &AssetResolver<S> {
        &self.resolver
    }

    pub fn slot(&self) -> &MediaSlot {
        &self.slot
    }

    /// Ejercicio del step actual, si es un step de ejercicio.
    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    /// Avanza un step que no es de ejercicio (selección, lección, cierre).
    pub fn advance(&mut self, decision: Option<Decision>) -> Result<AdvanceOutcome, CoreError> {
        if self.lesson.is_some() {
            return Err(DomainError::Validation("exercise steps advance through check/proceed".into()).into());
        }
        let out = self.flow.advance(decision)?;
        if let AdvanceOutcome::Moved { .. } = out {
            self.on_enter();
        }
        Ok(out)
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.flow.retreat();
        if moved {
            self.on_enter();
        }
        moved
    }

    pub fn select(&mut self, option: &str) -> Result<(), CoreError> {
        Ok(self.exercise_lesson()?
               .exercise_mut()
               .ok_or(sign_core::ExerciseError::LessonFinished)?
               .select(option)?)
    }

    pub fn check(&mut self) -> Result<Outcome, CoreError> {
        Ok(self.exercise_lesson()?
               .exercise_mut()
               .ok_or(sign_core::ExerciseError::LessonFinished)?
               .check()?)
    }

    /// "Continuar" en un ejercicio ya corregido. Cuando la lección termina se
    /// entregan al flujo todas sus respuestas y su puntuación, y se devuelve
    /// el avance.
    pub fn proceed(&mut self) -> Result<Option<AdvanceOutcome>, CoreError> {
        let lesson = self.exercise_lesson()?;
        match lesson.proceed()? {
            LessonStep::Retry | LessonStep::Next(_) => Ok(None),
            LessonStep::Finished => {
                let decision = lesson.decision();
                let out = self.flow.advance(decision)?;
                self.on_enter();
                Ok(Some(out))
            }
        }
    }

    /// Marca el hueco como cargando y devuelve la URL a pedir, si el step
    /// muestra video.
    pub fn begin_media(&mut self) -> Option<MediaRequest> {
        let view = self.flow.current_step();
        let key = video_key(view.step.id)?;
        let url = self.resolver.resolve(key);
        let step = view.ticket;
        Some(MediaRequest { url,
                            step,
                            slot: self.slot.begin(url) })
    }

    /// Aplica el resultado de una carga si su step sigue activo.
    pub fn apply_media(&mut self, req: MediaRequest, result: Result<MediaMetadata, LoadError>) -> bool {
        if !self.flow.is_current(&req.step) {
            debug!("discarding late media result for {}", req.url);
            return false;
        }
        self.slot.settle(req.slot, result)
    }

    /// `begin_media` + `preload` + `apply_media` en secuencia.
    pub async fn load_media(&mut self) -> bool {
        let Some(req) = self.begin_media() else {
            return false;
        };
        let result = self.resolver.preload(req.url).await;
        self.apply_media(req, result)
    }

    fn exercise_lesson(&mut self) -> Result<&mut Lesson, CoreError> {
        let step = self.flow.current_step().step.id;
        self.lesson
            .as_mut()
            .ok_or_else(|| DomainError::NotFound(format!("exercise on step {}", step.as_str())).into())
    }

    fn on_enter(&mut self) {
        self.slot.clear();
        let step = self.flow.current_step().step;
        self.lesson = match (step.kind, step.id) {
            (StepKind::Exercise, sign_core::StepId::DemoFillGap) => {
                Some(Lesson::new(vec![flows::demo_question()], CheckPolicy::AlwaysAdvance))
            }
            (StepKind::Exercise, _) => Some(Lesson::new(flows::lesson_questions(), self.lesson_policy)),
            _ => None,
        };
    }
}

use super::{CheckPolicy, Continue, FillGapExercise, Outcome, Question};
use crate::errors::ExerciseError;
use crate::step::Decision;

/// Qué ocurrió al continuar dentro de una lección.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStep {
    /// Se repite la misma pregunta.
    Retry,
    /// Pasa a la pregunta con este índice.
    Next(usize),
    Finished,
}

/// Secuencia de preguntas fill-gap con una misma política.
///
/// Sólo hay un ejercicio vivo a la vez. `score` cuenta las preguntas
/// acertadas al primer intento.
#[derive(Debug, Clone)]
pub struct Lesson {
    questions: Vec<Question>,
    policy: CheckPolicy,
    index: usize,
    current: Option<FillGapExercise>,
    answers: Vec<Decision>,
    score: usize,
}

impl Lesson {
    pub fn new(questions: Vec<Question>, policy: CheckPolicy) -> Self {
        let current = questions.first().cloned().map(|q| FillGapExercise::new(q, policy));
        Self { questions,
               policy,
               index: 0,
               current,
               answers: Vec::new(),
               score: 0 }
    }

    pub fn exercise(&self) -> Option<&FillGapExercise> {
        self.current.as_ref()
    }

    pub fn exercise_mut(&mut self) -> Option<&mut FillGapExercise> {
        self.current.as_mut()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn finished(&self) -> bool {
        self.current.is_none()
    }

    /// Respuestas finales, una por pregunta ya superada.
    pub fn answers(&self) -> &[Decision] {
        &self.answers
    }

    /// Resultado completo a entregar al flujo; sólo existe con la lección terminada.
    pub fn decision(&self) -> Option<Decision> {
        self.finished().then(|| Decision::Lesson { answers: self.answers.clone(),
                                                   score: self.score })
    }

    /// "Continuar" sobre el ejercicio actual ya corregido.
    pub fn proceed(&mut self) -> Result<LessonStep, ExerciseError> {
        let ex = self.current.as_mut().ok_or(ExerciseError::LessonFinished)?;
        match ex.proceed()? {
            Continue::Retry => Ok(LessonStep::Retry),
            Continue::Advance => {
                if ex.outcome() == Some(Outcome::Correct) && ex.attempts() == 1 {
                    self.score += 1;
                }
                if let Some(d) = ex.decision() {
                    self.answers.push(d);
                }
                self.index += 1;
                self.current = self.questions
                                   .get(self.index)
                                   .cloned()
                                   .map(|q| FillGapExercise::new(q, self.policy));
                Ok(if self.current.is_some() { LessonStep::Next(self.index) } else { LessonStep::Finished })
            }
        }
    }
}

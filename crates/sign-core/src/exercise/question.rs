use serde::{Deserialize, Serialize};

use crate::errors::QuestionError;

/// Marcador del hueco dentro de la frase.
pub const GAP: &str = "___";

/// Frase con un hueco, opciones candidatas y la opción correcta.
///
/// Invariantes (validadas al construir y al deserializar): la frase contiene
/// el hueco, hay al menos una opción, las opciones son únicas y la correcta
/// está entre ellas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    sentence: String,
    options: Vec<String>,
    correct: String,
}

#[derive(Deserialize)]
struct RawQuestion {
    sentence: String,
    options: Vec<String>,
    correct: String,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw.sentence, raw.options, raw.correct)
    }
}

impl Question {
    pub fn new<I, S>(sentence: impl Into<String>, options: I, correct: impl Into<String>) -> Result<Self, QuestionError>
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let sentence = sentence.into();
        let correct = correct.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if !sentence.contains(GAP) {
            return Err(QuestionError::MissingGap);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        for (i, o) in options.iter().enumerate() {
            if options[..i].contains(o) {
                return Err(QuestionError::DuplicateOption(o.clone()));
            }
        }
        if !options.contains(&correct) {
            return Err(QuestionError::CorrectNotInOptions(correct));
        }
        Ok(Self { sentence, options, correct })
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct(&self) -> &str {
        &self.correct
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Igualdad exacta de strings, sin normalizar mayúsculas ni espacios.
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct == option
    }

    /// Frase con el hueco rellenado (o el marcador si no hay selección).
    pub fn render(&self, fill: Option<&str>) -> String {
        self.sentence.replacen(GAP, fill.unwrap_or(GAP), 1)
    }
}

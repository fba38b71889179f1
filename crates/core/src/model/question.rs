use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("multiple-choice question has no options")]
    NoOptions,

    #[error("correct index {index} out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },
}

/// The two shapes a quiz question can take.
///
/// Multiple-choice questions carry their option list and the index of the
/// correct option; open-ended questions carry a reference answer compared by
/// exact string equality. Exactness is a known limitation of the open-ended
/// policy (free text rarely matches verbatim) and is kept deliberately rather
/// than papering over it with trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        correct_index: usize,
    },
    OpenEnded {
        correct_text: String,
    },
}

/// The respondent's recorded answer to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// Selected option index for a multiple-choice question.
    Choice(usize),
    /// Free text for an open-ended question.
    Text(String),
}

/// A single question in a topic's quiz pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
}

impl QuizQuestion {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt,
    /// `QuestionError::NoOptions` for a multiple-choice question without
    /// options, and `QuestionError::CorrectIndexOutOfRange` when the correct
    /// index does not address an option.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        kind: QuestionKind,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if let QuestionKind::MultipleChoice {
            options,
            correct_index,
        } = &kind
        {
            if options.is_empty() {
                return Err(QuestionError::NoOptions);
            }
            if *correct_index >= options.len() {
                return Err(QuestionError::CorrectIndexOutOfRange {
                    index: *correct_index,
                    options: options.len(),
                });
            }
        }
        Ok(Self { id, prompt, kind })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Option list for multiple-choice questions; `None` for open-ended ones.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => Some(options),
            QuestionKind::OpenEnded { .. } => None,
        }
    }

    /// Whether the given answer matches this question's correct-answer
    /// reference.
    ///
    /// Index equality for multiple-choice, exact string equality for
    /// open-ended. An answer whose shape does not match the question kind is
    /// incorrect; the UI only produces matching shapes, so a mismatch here is
    /// an upstream bug, and scoring stays total rather than panicking.
    #[must_use]
    pub fn check(&self, answer: &Answer) -> bool {
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice { correct_index, .. }, Answer::Choice(selected)) => {
                selected == correct_index
            }
            (QuestionKind::OpenEnded { correct_text }, Answer::Text(text)) => text == correct_text,
            _ => false,
        }
    }
}

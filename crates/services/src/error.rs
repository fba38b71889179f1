use thiserror::Error;

use content::ContentError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Requested sample size outside `1..=pool`. The configurator's bounded
    /// count options prevent this reaching users; surfacing it means a bug
    /// upstream, not bad input.
    #[error("requested {requested} questions, available {available}")]
    InvalidCount { requested: usize, available: usize },

    /// The question source could not produce a usable document. Recoverable:
    /// views offer retry or navigation away.
    #[error(transparent)]
    Load(#[from] ContentError),
}

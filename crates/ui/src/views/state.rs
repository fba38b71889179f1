use dioxus::prelude::*;

use content::ContentError;
use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The addressed topic or article does not exist.
    NotFound,
    /// Content could not be loaded or validated; retry may help.
    Load,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotFound => "Nothing here. The link may be stale.",
            ViewError::Load => "Failed to load content. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&ContentError> for ViewError {
    fn from(err: &ContentError) -> Self {
        match err {
            ContentError::NotFound { .. } => ViewError::NotFound,
            ContentError::Io { .. } | ContentError::Malformed { .. } => ViewError::Load,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&QuizError> for ViewError {
    fn from(err: &QuizError) -> Self {
        match err {
            QuizError::Load(source) => ViewError::from(source),
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_map_to_recoverable_view_errors() {
        let not_found = ContentError::NotFound {
            path: "tests/css.json".into(),
        };
        assert_eq!(ViewError::from(&not_found), ViewError::NotFound);

        let malformed = ContentError::Malformed {
            path: "tests/css.json".into(),
            detail: "missing questions".into(),
        };
        assert_eq!(ViewError::from(&malformed), ViewError::Load);
    }

    #[test]
    fn quiz_errors_map_through_their_source() {
        let load = QuizError::Load(ContentError::NotFound {
            path: "tests/js.json".into(),
        });
        assert_eq!(ViewError::from(&load), ViewError::NotFound);

        let invalid = QuizError::InvalidCount {
            requested: 9,
            available: 3,
        };
        assert_eq!(ViewError::from(&invalid), ViewError::Unknown);
    }
}

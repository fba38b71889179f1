#![forbid(unsafe_code)]

pub mod catalog;
pub mod outline;
pub mod source;
pub mod store;

pub use catalog::{builtin_catalog, load_catalog, load_catalog_from};
pub use outline::{AnswerLink, OutlineEntry, parse_outline, slugify};
pub use source::{FsQuestionSource, InMemoryQuestionSource, QuestionSource, QuizDocument};
pub use store::{ContentError, ContentStore};

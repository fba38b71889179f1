mod ids;
mod question;
mod score;
mod topic;

pub use ids::{IdError, QuestionId, TopicId};
pub use question::{Answer, QuestionError, QuestionKind, QuizQuestion};
pub use score::ScoreResult;
pub use topic::{Topic, TopicCatalog, TopicCatalogError};

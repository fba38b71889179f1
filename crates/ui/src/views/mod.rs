mod answer;
mod home;
mod not_found;
mod quiz;
mod state;
mod topic;

pub use answer::AnswerView;
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topic::TopicView;

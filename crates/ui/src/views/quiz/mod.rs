mod quiz;
mod scripts;

pub use quiz::QuizView;

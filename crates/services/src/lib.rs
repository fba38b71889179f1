#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod subscription;

pub use quiz_core::Clock;

pub use error::QuizError;
pub use quiz::{
    Countdown, FocusEvent, GuardEffect, IntegrityGuard, QuizService, QuizSession, Tick,
    sample, score,
};
pub use subscription::Subscription;

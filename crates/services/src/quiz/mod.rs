//! The quiz session subsystem: sampling, navigation, timing, scoring, and the
//! focus-integrity guard. Everything here is a pure state machine driven by
//! the UI's event sources; the only I/O lives behind `content::QuestionSource`.

mod guard;
mod sampler;
mod score;
mod service;
mod session;
mod timer;

pub use guard::{FocusEvent, GuardEffect, IntegrityGuard, VIOLATION_CEILING};
pub use sampler::sample;
pub use score::score;
pub use service::QuizService;
pub use session::QuizSession;
pub use timer::{Countdown, DEFAULT_QUIZ_SECS, Tick, WARNING_WINDOW_SECS};

mod markdown_vm;
mod quiz_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{CountOption, QuizIntent, QuizPhase, QuizVm, count_options, default_count};
pub use time_fmt::format_clock;

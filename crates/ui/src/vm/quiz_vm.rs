use quiz_core::model::{Answer, QuizQuestion, ScoreResult};
use services::QuizSession;

/// Intents the quiz screen can dispatch while a run is active.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizIntent {
    Answer(Answer),
    Next,
    Prev,
    Finish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Running,
    Finished(ScoreResult),
}

/// View-model for one quiz run: wraps the session state machine and exposes
/// exactly what the screen renders.
pub struct QuizVm {
    session: QuizSession,
    phase: QuizPhase,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            phase: QuizPhase::Running,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.session.current_question()
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&Answer> {
        let question = self.session.current_question()?;
        self.session.answer(question.id())
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.total()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.session.is_last()
    }

    /// Records an answer for the current question; latest write wins.
    pub fn answer_current(&mut self, answer: Answer) {
        if let Some(id) = self.session.current_question().map(|q| q.id().clone()) {
            self.session.record_answer(id, answer);
        }
    }

    pub fn next(&mut self) {
        self.session.advance();
    }

    pub fn prev(&mut self) {
        self.session.retreat();
    }

    /// Finishes the run. Idempotent under the timer-expiry/finish-click race:
    /// the stored result never changes once set.
    pub fn finish(&mut self) -> ScoreResult {
        let result = self.session.finish();
        self.phase = QuizPhase::Finished(result);
        result
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished(_))
    }
}

/// One selectable question-count choice on the settings screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountOption {
    pub value: usize,
    pub label: String,
}

const STANDARD_COUNTS: [usize; 5] = [5, 10, 20, 30, 50];

/// Choices offered for a pool of `total` questions: each standard count the
/// pool can cover, plus an "all questions" option when it differs from them.
#[must_use]
pub fn count_options(total: usize) -> Vec<CountOption> {
    let mut options: Vec<CountOption> = STANDARD_COUNTS
        .iter()
        .copied()
        .filter(|value| total >= *value)
        .map(|value| CountOption {
            value,
            label: format!("{value} questions"),
        })
        .collect();

    if total > 0 && !STANDARD_COUNTS.contains(&total) {
        options.push(CountOption {
            value: total,
            label: format!("All questions ({total})"),
        });
    }
    options
}

/// Pre-selected count: ten when available, otherwise everything the pool has.
#[must_use]
pub fn default_count(total: usize) -> usize {
    if total < 5 { total } else { total.min(10) }
}

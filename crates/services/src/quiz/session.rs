use std::collections::HashMap;

use chrono::{DateTime, Utc};

use quiz_core::model::{Answer, QuestionId, QuizQuestion, ScoreResult};

use super::score::score;

/// One quiz run over a fixed, sampled question set.
///
/// Tracks the current position, the per-question answer map, and the finished
/// flag. The active set never changes after construction; navigation clamps
/// at both ends rather than erroring, and every question stays reachable
/// whether or not it has been answered.
pub struct QuizSession {
    active_set: Vec<QuizQuestion>,
    current: usize,
    answers: HashMap<QuestionId, Answer>,
    result: Option<ScoreResult>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Starts a session over an already-sampled active set.
    ///
    /// `started_at` should come from the service clock so tests stay
    /// deterministic.
    #[must_use]
    pub fn new(active_set: Vec<QuizQuestion>, started_at: DateTime<Utc>) -> Self {
        Self {
            active_set,
            current: 0,
            answers: HashMap::new(),
            result: None,
            started_at,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.active_set.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.active_set.get(self.current)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.active_set.is_empty() && self.current == self.active_set.len() - 1
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// The answer recorded for a question, if any.
    #[must_use]
    pub fn answer(&self, id: &QuestionId) -> Option<&Answer> {
        self.answers.get(id)
    }

    /// Records or overwrites the answer for a question; the latest write
    /// wins. Ignored once the session has finished.
    pub fn record_answer(&mut self, id: QuestionId, answer: Answer) {
        if self.result.is_some() {
            return;
        }
        self.answers.insert(id, answer);
    }

    /// Moves to the next question; a no-op at the last one.
    pub fn advance(&mut self) {
        if self.current + 1 < self.active_set.len() {
            self.current += 1;
        }
    }

    /// Moves to the previous question; a no-op at the first one.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Finishes the session and returns the tally.
    ///
    /// Idempotent: the first call scores and stores the result, later calls
    /// return it unchanged. Timer expiry and a user's finish click can race
    /// through here without double-scoring.
    pub fn finish(&mut self) -> ScoreResult {
        if let Some(result) = self.result {
            return result;
        }
        let result = score(&self.active_set, &self.answers);
        self.result = Some(result);
        result
    }

    /// The stored result of a finished session.
    #[must_use]
    pub fn result(&self) -> Option<ScoreResult> {
        self.result
    }
}

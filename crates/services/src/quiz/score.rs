use std::collections::HashMap;

use quiz_core::model::{Answer, QuestionId, QuizQuestion, ScoreResult};

/// Tallies recorded answers against the active set's correct-answer
/// references.
///
/// No partial credit and no normalization: multiple-choice compares option
/// indices, open-ended compares strings exactly. Questions without a recorded
/// answer count as incorrect. Free of session state, so a finished session's
/// result can be recomputed at any time.
#[must_use]
pub fn score(active_set: &[QuizQuestion], answers: &HashMap<QuestionId, Answer>) -> ScoreResult {
    let correct = active_set
        .iter()
        .filter(|question| {
            answers
                .get(question.id())
                .is_some_and(|answer| question.check(answer))
        })
        .count();

    ScoreResult {
        correct,
        total: active_set.len(),
    }
}

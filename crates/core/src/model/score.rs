use serde::{Deserialize, Serialize};

/// Final tally for a finished quiz run.
///
/// Derived from the active set and the answer map; it carries no state of its
/// own and can be recomputed at any time after the session finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
}

impl ScoreResult {
    /// Display percentage, rounded to the nearest whole number.
    ///
    /// The sampler's lower bound of one question keeps `total` positive in
    /// practice; an empty result still yields 0 rather than dividing by zero.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        #[allow(clippy::cast_sign_loss)]
        {
            (100.0 * self.correct as f64 / self.total as f64).round() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_percent() {
        let score = ScoreResult {
            correct: 2,
            total: 3,
        };
        assert_eq!(score.percentage(), 67);
    }

    #[test]
    fn empty_total_is_zero_percent() {
        let score = ScoreResult {
            correct: 0,
            total: 0,
        };
        assert_eq!(score.percentage(), 0);
    }

    #[test]
    fn full_marks_are_one_hundred() {
        let score = ScoreResult {
            correct: 10,
            total: 10,
        };
        assert_eq!(score.percentage(), 100);
    }
}

use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::QuizQuestion;

use crate::error::QuizError;

/// Draws an unordered random subset of `count` questions from the pool.
///
/// Fisher–Yates shuffle of a copy of the full pool, then the first `count`
/// elements: every permutation is equally likely and the selection cannot
/// contain duplicates. The order fixed here holds for the whole session.
/// Deliberately unseeded; two calls with the same inputs may differ.
///
/// # Errors
///
/// Returns `QuizError::InvalidCount` unless `1 <= count <= pool.len()`.
pub fn sample(pool: &[QuizQuestion], count: usize) -> Result<Vec<QuizQuestion>, QuizError> {
    if count == 0 || count > pool.len() {
        return Err(QuizError::InvalidCount {
            requested: count,
            available: pool.len(),
        });
    }

    let mut shuffled = pool.to_vec();
    shuffled.as_mut_slice().shuffle(&mut rng());
    shuffled.truncate(count);
    Ok(shuffled)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quiz_core::model::{QuestionId, QuestionKind, QuizQuestion};

    use super::*;

    fn pool(n: usize) -> Vec<QuizQuestion> {
        (0..n)
            .map(|i| {
                QuizQuestion::new(
                    QuestionId::new(format!("q{i}")).unwrap(),
                    format!("Question {i}"),
                    QuestionKind::OpenEnded {
                        correct_text: format!("a{i}"),
                    },
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn samples_exactly_count_distinct_pool_members() {
        let pool = pool(12);
        for count in 1..=pool.len() {
            let active = sample(&pool, count).unwrap();
            assert_eq!(active.len(), count);

            let ids: HashSet<_> = active.iter().map(|q| q.id().clone()).collect();
            assert_eq!(ids.len(), count, "no duplicates for count {count}");
            for question in &active {
                assert!(pool.contains(question));
            }
        }
    }

    #[test]
    fn rejects_zero_and_oversized_counts() {
        let pool = pool(3);
        assert!(matches!(
            sample(&pool, 0),
            Err(QuizError::InvalidCount {
                requested: 0,
                available: 3
            })
        ));
        assert!(matches!(
            sample(&pool, 4),
            Err(QuizError::InvalidCount {
                requested: 4,
                available: 3
            })
        ));
        assert!(matches!(sample(&[], 1), Err(QuizError::InvalidCount { .. })));
    }

    #[test]
    fn full_sample_is_a_permutation() {
        let pool = pool(8);
        let active = sample(&pool, 8).unwrap();
        let mut ids: Vec<_> = active.iter().map(|q| q.id().as_str().to_owned()).collect();
        ids.sort();
        let mut expected: Vec<_> = pool.iter().map(|q| q.id().as_str().to_owned()).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }
}

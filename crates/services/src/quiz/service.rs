use std::sync::Arc;

use content::{QuestionSource, QuizDocument};
use quiz_core::Clock;
use quiz_core::model::TopicId;

use crate::error::QuizError;

use super::sampler::sample;
use super::session::QuizSession;

/// Entry point the UI drives a quiz through: fetch the document once, then
/// sample and start a session per run.
pub struct QuizService {
    source: Arc<dyn QuestionSource>,
    clock: Clock,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, clock: Clock) -> Self {
        Self { source, clock }
    }

    /// Fetches the quiz document for a topic. Called once at quiz entry; the
    /// document stays in memory for repeat runs.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` when the source has no usable document.
    pub async fn load(&self, topic: &TopicId) -> Result<QuizDocument, QuizError> {
        let document = self.source.fetch_quiz(topic).await.map_err(|err| {
            tracing::warn!(topic = %topic, error = %err, "quiz document load failed");
            err
        })?;
        Ok(document)
    }

    /// Samples `count` questions from the document and starts a session over
    /// them.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidCount` when `count` is outside
    /// `1..=questions`. The configurator's bounded options make this a
    /// programmer error rather than user input.
    pub fn start(&self, document: &QuizDocument, count: usize) -> Result<QuizSession, QuizError> {
        let active_set = sample(&document.questions, count)?;
        Ok(QuizSession::new(active_set, self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use content::InMemoryQuestionSource;
    use quiz_core::model::{QuestionId, QuestionKind, QuizQuestion};
    use quiz_core::time::fixed_now;

    use super::*;

    fn source_with(topic: &TopicId, n: usize) -> Arc<InMemoryQuestionSource> {
        let questions = (0..n)
            .map(|i| {
                QuizQuestion::new(
                    QuestionId::new(format!("q{i}")).unwrap(),
                    format!("Question {i}"),
                    QuestionKind::MultipleChoice {
                        options: vec!["a".into(), "b".into()],
                        correct_index: 0,
                    },
                )
                .unwrap()
            })
            .collect();
        let source = Arc::new(InMemoryQuestionSource::new());
        source.insert(
            topic.clone(),
            QuizDocument {
                title: "Fixture".into(),
                questions,
            },
        );
        source
    }

    #[tokio::test]
    async fn loads_and_starts_a_sampled_session() {
        let topic = TopicId::new("css").unwrap();
        let service = QuizService::new(source_with(&topic, 12), Clock::fixed(fixed_now()));

        let document = service.load(&topic).await.unwrap();
        assert_eq!(document.questions.len(), 12);

        let session = service.start(&document, 10).unwrap();
        assert_eq!(session.total(), 10);
        assert_eq!(session.started_at(), fixed_now());
    }

    #[tokio::test]
    async fn unknown_topic_is_a_load_error() {
        let topic = TopicId::new("css").unwrap();
        let service = QuizService::new(source_with(&topic, 3), Clock::default_clock());

        let missing = TopicId::new("rust").unwrap();
        let err = service.load(&missing).await.unwrap_err();
        assert!(matches!(err, QuizError::Load(_)));
    }

    #[test]
    fn oversized_count_is_rejected() {
        let topic = TopicId::new("css").unwrap();
        let service = QuizService::new(source_with(&topic, 3), Clock::default_clock());
        let document = QuizDocument {
            title: "Fixture".into(),
            questions: Vec::new(),
        };
        assert!(matches!(
            service.start(&document, 1),
            Err(QuizError::InvalidCount { .. })
        ));
    }
}

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;

use quiz_core::model::{QuestionId, QuestionKind, QuizQuestion, TopicId};

use crate::store::{ContentError, ContentStore};

/// A topic's quiz document: display title plus the full question pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDocument {
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

/// Source of quiz documents, fetched once at quiz entry.
///
/// The session subsystem only depends on this seam; the file-system adapter
/// below is the production implementation and `InMemoryQuestionSource` backs
/// tests.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetches the quiz document for a topic.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` when the topic has no quiz and
    /// `ContentError::Malformed` when the document cannot be validated.
    async fn fetch_quiz(&self, topic: &TopicId) -> Result<QuizDocument, ContentError>;
}

/// Wire shape of `tests/<topic>.json`.
///
/// This mirrors the published quiz files so existing content keeps working:
/// camelCase fields and a `type` tag selecting which optional fields apply.
/// Deserialization is permissive; `into_document` is where shape errors
/// become `ContentError::Malformed`.
#[derive(Debug, Deserialize)]
struct QuizFile {
    title: Option<String>,
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    id: String,
    text: String,
    #[serde(rename = "type")]
    kind: RecordKind,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    correct_answer: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum RecordKind {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "open-ended")]
    OpenEnded,
}

impl QuizFile {
    fn into_document(self, path: &str) -> Result<QuizDocument, ContentError> {
        let mut questions = Vec::with_capacity(self.questions.len());
        for record in self.questions {
            questions.push(record.into_question(path)?);
        }
        Ok(QuizDocument {
            title: self.title.unwrap_or_else(|| "Test".to_string()),
            questions,
        })
    }
}

impl QuestionRecord {
    fn into_question(self, path: &str) -> Result<QuizQuestion, ContentError> {
        let malformed = |detail: String| ContentError::Malformed {
            path: path.to_string(),
            detail,
        };

        let id = QuestionId::new(self.id)
            .map_err(|err| malformed(format!("question id: {err}")))?;

        let kind = match self.kind {
            RecordKind::MultipleChoice => {
                let options = self
                    .options
                    .ok_or_else(|| malformed(format!("question {id}: missing options")))?;
                let correct_index = self
                    .correct_answer
                    .as_ref()
                    .and_then(serde_json::Value::as_u64)
                    .ok_or_else(|| {
                        malformed(format!("question {id}: correctAnswer must be an index"))
                    })?;
                let correct_index = usize::try_from(correct_index)
                    .map_err(|_| malformed(format!("question {id}: correctAnswer too large")))?;
                QuestionKind::MultipleChoice {
                    options,
                    correct_index,
                }
            }
            RecordKind::OpenEnded => {
                let correct_text = self
                    .correct_answer
                    .as_ref()
                    .and_then(serde_json::Value::as_str)
                    .ok_or_else(|| {
                        malformed(format!("question {id}: correctAnswer must be a string"))
                    })?
                    .to_string();
                QuestionKind::OpenEnded { correct_text }
            }
        };

        QuizQuestion::new(id.clone(), self.text, kind)
            .map_err(|err| malformed(format!("question {id}: {err}")))
    }
}

/// Reads quiz documents from `tests/<topic>.json` under the content root.
#[derive(Debug, Clone)]
pub struct FsQuestionSource {
    store: ContentStore,
}

impl FsQuestionSource {
    #[must_use]
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QuestionSource for FsQuestionSource {
    async fn fetch_quiz(&self, topic: &TopicId) -> Result<QuizDocument, ContentError> {
        let path = self.store.quiz_file_path(topic);
        let raw = crate::store::read_to_string(&path).await?;
        let path = path.display().to_string();

        let file: QuizFile = serde_json::from_str(&raw).map_err(|err| {
            tracing::warn!(topic = %topic, error = %err, "malformed quiz document");
            ContentError::Malformed {
                path: path.clone(),
                detail: err.to_string(),
            }
        })?;
        file.into_document(&path)
    }
}

/// Test double holding quiz documents in memory.
#[derive(Default)]
pub struct InMemoryQuestionSource {
    documents: Mutex<HashMap<TopicId, QuizDocument>>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document for a topic, replacing any previous one.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, topic: TopicId, document: QuizDocument) {
        self.documents
            .lock()
            .expect("question source lock")
            .insert(topic, document);
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn fetch_quiz(&self, topic: &TopicId) -> Result<QuizDocument, ContentError> {
        self.documents
            .lock()
            .expect("question source lock")
            .get(topic)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                path: format!("tests/{topic}.json"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_quiz(dir: &std::path::Path, topic: &str, body: &str) {
        let tests = dir.join("tests");
        std::fs::create_dir_all(&tests).unwrap();
        std::fs::write(tests.join(format!("{topic}.json")), body).unwrap();
    }

    #[tokio::test]
    async fn parses_wire_format_into_domain_questions() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(
            dir.path(),
            "css",
            r#"{
                "title": "CSS Basics",
                "questions": [
                    {
                        "id": "q1",
                        "text": "Which property controls text size?",
                        "type": "multiple-choice",
                        "options": ["font-weight", "font-size", "text-style"],
                        "correctAnswer": 1
                    },
                    {
                        "id": "q2",
                        "text": "Name the layout module with rows and columns.",
                        "type": "open-ended",
                        "correctAnswer": "grid"
                    }
                ]
            }"#,
        );

        let source = FsQuestionSource::new(ContentStore::new(dir.path()));
        let doc = source
            .fetch_quiz(&TopicId::new("css").unwrap())
            .await
            .unwrap();

        assert_eq!(doc.title, "CSS Basics");
        assert_eq!(doc.questions.len(), 2);
        assert_eq!(
            doc.questions[0].kind(),
            &QuestionKind::MultipleChoice {
                options: vec![
                    "font-weight".into(),
                    "font-size".into(),
                    "text-style".into()
                ],
                correct_index: 1
            }
        );
        assert_eq!(
            doc.questions[1].kind(),
            &QuestionKind::OpenEnded {
                correct_text: "grid".into()
            }
        );
    }

    #[tokio::test]
    async fn missing_quiz_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsQuestionSource::new(ContentStore::new(dir.path()));
        let err = source
            .fetch_quiz(&TopicId::new("css").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }

    #[tokio::test]
    async fn non_array_questions_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(dir.path(), "css", r#"{"title": "x", "questions": "nope"}"#);

        let source = FsQuestionSource::new(ContentStore::new(dir.path()));
        let err = source
            .fetch_quiz(&TopicId::new("css").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
    }

    #[tokio::test]
    async fn out_of_range_correct_answer_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(
            dir.path(),
            "css",
            r#"{
                "questions": [{
                    "id": "q1",
                    "text": "Pick one",
                    "type": "multiple-choice",
                    "options": ["a", "b"],
                    "correctAnswer": 5
                }]
            }"#,
        );

        let source = FsQuestionSource::new(ContentStore::new(dir.path()));
        let err = source
            .fetch_quiz(&TopicId::new("css").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
    }

    #[tokio::test]
    async fn in_memory_source_round_trips() {
        let source = InMemoryQuestionSource::new();
        let topic = TopicId::new("js").unwrap();
        let question = QuizQuestion::new(
            QuestionId::new("q1").unwrap(),
            "What is hoisting?",
            QuestionKind::OpenEnded {
                correct_text: "declaration lifting".into(),
            },
        )
        .unwrap();
        source.insert(
            topic.clone(),
            QuizDocument {
                title: "JS".into(),
                questions: vec![question],
            },
        );

        let doc = source.fetch_quiz(&topic).await.unwrap();
        assert_eq!(doc.title, "JS");
        assert_eq!(doc.questions.len(), 1);
    }
}

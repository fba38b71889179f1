use std::path::{Path, PathBuf};

use thiserror::Error;

use quiz_core::model::TopicId;

/// Errors surfaced by content adapters.
///
/// All of these are user-facing and recoverable: the views render a retry or
/// back affordance instead of crashing the session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("content not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content in {path}: {detail}")]
    Malformed { path: String, detail: String },
}

/// File layout of the static content tree.
///
/// Follows the published content layout: `questions/<topic-file>` holds the
/// browsable markdown outlines, `answers/<topic>/<slug>.md` the answer
/// articles, and `tests/<topic>.json` the quiz documents.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn question_file_path(&self, topic_file: &str) -> PathBuf {
        self.root.join("questions").join(topic_file)
    }

    #[must_use]
    pub fn answer_file_path(&self, topic: &TopicId, slug: &str) -> PathBuf {
        self.root
            .join("answers")
            .join(topic.as_str())
            .join(format!("{slug}.md"))
    }

    #[must_use]
    pub fn quiz_file_path(&self, topic: &TopicId) -> PathBuf {
        self.root
            .join("tests")
            .join(format!("{}.json", topic.as_str()))
    }

    #[must_use]
    pub fn topics_config_path(&self) -> PathBuf {
        self.root.join("topics.json")
    }

    /// Reads a topic's markdown question outline.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for a missing file and
    /// `ContentError::Io` for other read failures.
    pub async fn read_question_file(&self, topic_file: &str) -> Result<String, ContentError> {
        read_to_string(&self.question_file_path(topic_file)).await
    }

    /// Reads a single answer article.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for a missing file and
    /// `ContentError::Io` for other read failures.
    pub async fn read_answer_file(
        &self,
        topic: &TopicId,
        slug: &str,
    ) -> Result<String, ContentError> {
        read_to_string(&self.answer_file_path(topic, slug)).await
    }
}

pub(crate) async fn read_to_string(path: &Path) -> Result<String, ContentError> {
    tokio::fs::read_to_string(path).await.map_err(|source| {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound { path }
        } else {
            ContentError::Io { path, source }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_content_layout() {
        let store = ContentStore::new("/srv/content");
        let topic = TopicId::new("css").unwrap();
        assert_eq!(
            store.question_file_path("css.md"),
            PathBuf::from("/srv/content/questions/css.md")
        );
        assert_eq!(
            store.answer_file_path(&topic, "what-is-flexbox"),
            PathBuf::from("/srv/content/answers/css/what-is-flexbox.md")
        );
        assert_eq!(
            store.quiz_file_path(&topic),
            PathBuf::from("/srv/content/tests/css.json")
        );
    }

    #[tokio::test]
    async fn missing_file_maps_to_not_found() {
        let store = ContentStore::new("/nonexistent-content-root");
        let err = store.read_question_file("css.md").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }

    #[tokio::test]
    async fn reads_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let questions = dir.path().join("questions");
        std::fs::create_dir_all(&questions).unwrap();
        std::fs::write(questions.join("css.md"), "- [What is CSS?](../answers/css/what-is-css.md)\n").unwrap();

        let store = ContentStore::new(dir.path());
        let content = store.read_question_file("css.md").await.unwrap();
        assert!(content.contains("What is CSS?"));
    }
}

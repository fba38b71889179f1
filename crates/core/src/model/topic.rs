use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::TopicId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicCatalogError {
    #[error("duplicate topic id: {id}")]
    DuplicateId { id: TopicId },
}

/// A named subject area grouping a question pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    name: String,
    file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
}

impl Topic {
    #[must_use]
    pub fn new(
        id: TopicId,
        name: impl Into<String>,
        file: impl Into<String>,
        icon: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            file: file.into(),
            icon,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Question-list source file, relative to the content `questions/` dir.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// The set of available topics, loaded once at startup.
///
/// This is an explicitly constructed value passed down through the app
/// context rather than an ambient module-level registry; lookups never touch
/// global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    /// Builds a catalog, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns `TopicCatalogError::DuplicateId` if two topics share an id.
    pub fn new(topics: Vec<Topic>) -> Result<Self, TopicCatalogError> {
        let mut seen = HashSet::new();
        for topic in &topics {
            if !seen.insert(topic.id().clone()) {
                return Err(TopicCatalogError::DuplicateId {
                    id: topic.id().clone(),
                });
            }
        }
        Ok(Self { topics })
    }

    #[must_use]
    pub fn lookup(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

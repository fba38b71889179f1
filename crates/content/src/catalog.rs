use std::path::Path;

use quiz_core::model::{Topic, TopicCatalog, TopicId};

use crate::store::{ContentError, ContentStore};

/// Loads the topic catalog from `topics.json` under the content root.
///
/// When no config file exists, the built-in catalog is used; a present but
/// unreadable or invalid file is an error rather than a silent fallback.
///
/// # Errors
///
/// Returns `ContentError::Io` when the file cannot be read and
/// `ContentError::Malformed` when it does not describe a valid catalog.
pub async fn load_catalog(store: &ContentStore) -> Result<TopicCatalog, ContentError> {
    let path = store.topics_config_path();
    let raw = match crate::store::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(ContentError::NotFound { .. }) => {
            tracing::debug!("no topics.json, using built-in catalog");
            return Ok(builtin_catalog());
        }
        Err(err) => return Err(err),
    };

    parse_catalog(&raw, &path)
}

/// Loads a topic catalog from an explicit JSON file. Unlike [`load_catalog`],
/// an absent file is an error: an explicit override should never be silently
/// replaced by the built-in list.
///
/// # Errors
///
/// Returns `ContentError::NotFound`/`Io` when the file cannot be read and
/// `ContentError::Malformed` when it does not describe a valid catalog.
pub async fn load_catalog_from(path: &Path) -> Result<TopicCatalog, ContentError> {
    let raw = crate::store::read_to_string(path).await?;
    parse_catalog(&raw, path)
}

fn parse_catalog(raw: &str, path: &Path) -> Result<TopicCatalog, ContentError> {
    let topics: Vec<Topic> = serde_json::from_str(raw).map_err(|err| ContentError::Malformed {
        path: path.display().to_string(),
        detail: err.to_string(),
    })?;
    TopicCatalog::new(topics).map_err(|err| ContentError::Malformed {
        path: path.display().to_string(),
        detail: err.to_string(),
    })
}

/// The catalog shipped with the app when no `topics.json` override exists.
#[must_use]
pub fn builtin_catalog() -> TopicCatalog {
    let entries: &[(&str, &str, &str, Option<&str>)] = &[
        ("web", "Web Technologies", "web.md", Some("WWW.png")),
        ("security", "Security", "security.md", Some("Security.png")),
        ("oop-fp", "OOP & FP", "oop-fp.md", Some("Dev.png")),
        ("html", "HTML", "html.md", Some("HTML.png")),
        ("css", "CSS", "css.md", Some("CSS.png")),
        ("js", "JavaScript", "js.md", Some("JavaScript.png")),
        ("browser-js", "JS in Browser", "browser-js.md", Some("JSDom.png")),
        ("async-js", "Async JS", "async-js.md", Some("JavaScript.png")),
        ("es", "ECMAScript", "es.md", Some("ES6.jpg")),
        ("accessibility", "Accessibility", "accessibility.md", Some("Accessibility.png")),
        ("performance", "Performance", "performance.md", Some("performance.png")),
        ("ts", "TypeScript", "ts.md", Some("TypeScript.png")),
        ("react", "React", "react.md", Some("React.png")),
        ("vue-js", "Vue.js", "vue-js.md", Some("Vue.png")),
        ("angular", "Angular", "angular.md", Some("Angular.png")),
        ("state-management", "State Management", "state-management.md", Some("Redux.png")),
        ("node-js", "Node.js", "node-js.md", Some("Node.png")),
        ("testing", "Testing", "testing.md", Some("Testing_Library.png")),
        ("tools", "Tools", "tools.md", Some("Tools.png")),
        ("soft-skills", "Soft Skills", "soft-skills.md", Some("Soft-skills.png")),
        ("practical-tasks", "Practical Tasks", "practical-tasks.md", Some("Dev.png")),
    ];

    let topics = entries
        .iter()
        .map(|(id, name, file, icon)| {
            let id = TopicId::new(*id).expect("built-in topic id is non-empty");
            Topic::new(id, *name, *file, icon.map(ToString::to_string))
        })
        .collect();

    TopicCatalog::new(topics).expect("built-in catalog has unique ids")
}

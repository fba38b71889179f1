use std::sync::Arc;

use content::ContentStore;
use quiz_core::model::TopicCatalog;
use services::QuizService;

/// What the composition root (the binary, or a test harness) must provide to
/// the views.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<TopicCatalog>;
    fn content_store(&self) -> ContentStore;
    fn quiz_service(&self) -> Arc<QuizService>;
}

/// Shared handles the views pull out of Dioxus context.
///
/// Built once at launch from a loaded catalog; no view reaches for ambient
/// global state.
#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<TopicCatalog>,
    content_store: ContentStore,
    quiz_service: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            content_store: app.content_store(),
            quiz_service: app.quiz_service(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<TopicCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn content_store(&self) -> ContentStore {
        self.content_store.clone()
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

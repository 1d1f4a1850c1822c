//! Application state shared across request handlers.

use std::sync::Arc;

use crate::registry::EventRegistry;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    registry: EventRegistry,
}

impl AppState {
    /// Create a new application state.
    pub fn new(registry: EventRegistry) -> Self {
        Self {
            inner: Arc::new(AppStateInner { registry }),
        }
    }

    /// Get a reference to the event registry.
    pub fn registry(&self) -> &EventRegistry {
        &self.inner.registry
    }
}

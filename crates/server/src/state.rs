use std::sync::Arc;

use service::persons::PersonStore;

/// Shared handler state; the store is injected, never global.
#[derive(Clone)]
pub struct AppState {
    pub persons: Arc<dyn PersonStore>,
}

impl AppState {
    pub fn new<S: PersonStore + 'static>(store: S) -> Self {
        Self { persons: Arc::new(store) }
    }
}

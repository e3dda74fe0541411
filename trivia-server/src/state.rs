//! Application state shared across handlers

use std::sync::Arc;

use crate::db::TriviaStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn TriviaStore>,
}

impl AppState {
    pub fn new(store: impl TriviaStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    pub fn store(&self) -> &dyn TriviaStore {
        self.inner.store.as_ref()
    }
}

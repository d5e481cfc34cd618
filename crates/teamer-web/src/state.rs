//! Application state.

use std::sync::Arc;
use teamer_core::Catalog;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

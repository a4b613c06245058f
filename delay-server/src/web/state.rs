//! Application state for the web layer.

use std::sync::Arc;

use crate::delay::DelayService;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Departure queries against both providers
    pub delay: Arc<DelayService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(delay: DelayService) -> Self {
        Self {
            delay: Arc::new(delay),
        }
    }
}

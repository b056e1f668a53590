//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the backend client behind a trait object; there is no mutable
//! state shared between requests.

use std::sync::Arc;

use crate::services::backend::BackendApi;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::backend::testing::StubBackend;

    /// Create a test `AppState` backed by the given stub.
    #[must_use]
    pub fn test_app_state(stub: Arc<StubBackend>) -> AppState {
        AppState::new(stub)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

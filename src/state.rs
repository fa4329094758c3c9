//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the message store behind `Arc<dyn MessageStore>` so routes and the
//! startup diagnostic share one HTTP client, and tests can swap in a mock.

use std::sync::Arc;

use store::{MessageStore, RestStore, StoreConfig, StoreError, UnconfiguredStore};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}

/// Build the message store from environment variables.
pub fn store_from_env() -> Arc<dyn MessageStore> {
    build_store(StoreConfig::from_env())
}

/// Turn a parsed (or failed) config into a store.
///
/// Configuration problems are not fatal: the process runs with an
/// [`UnconfiguredStore`] and every read/write reports the problem.
pub fn build_store(config: Result<StoreConfig, StoreError>) -> Arc<dyn MessageStore> {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "message store not configured; reads and writes will fail");
            return Arc::new(UnconfiguredStore);
        }
    };

    match RestStore::new(&config) {
        Ok(store) => {
            if !store.is_authenticated() {
                warn!("MESSAGE_STORE_KEY not set; store requests are unauthenticated");
            }
            info!(url = %config.url, table = %config.table, "message store initialized");
            Arc::new(store)
        }
        Err(e) => {
            warn!(error = %e, "message store client failed to build; reads and writes will fail");
            Arc::new(UnconfiguredStore)
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

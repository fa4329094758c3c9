//! Startup diagnostic: one read of the message table.
//!
//! DESIGN
//! ======
//! Spawned once after the store is built. The gateway logs the row count
//! (or the failure), which confirms the URL, key, and table line up before
//! the first browser request arrives. Never fatal.

use std::sync::Arc;

use store::MessageStore;
use store::gateway;
use tokio::task::JoinHandle;

/// Spawn the diagnostic fetch. Resolves to the row count on success.
pub fn spawn_startup_fetch(store: Arc<dyn MessageStore>) -> JoinHandle<Option<usize>> {
    tokio::spawn(async move {
        gateway::fetch_all(store.as_ref())
            .await
            .map(|rows| rows.len())
    })
}

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod tests;

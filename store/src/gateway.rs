//! Persistence gateway: the two calls the rest of the system makes.
//!
//! ERROR HANDLING
//! ==============
//! Both calls log the outcome themselves. `save` hands the error back so the
//! caller can decide between retry and notification; it never retries.
//! `fetch_all` is a diagnostic and swallows failures after logging them.

use records::{MessageRecord, NewMessage, Role};
use tracing::{debug, error, info};

use crate::MessageStore;
use crate::error::StoreError;

/// Insert one message with the given content and role.
///
/// # Errors
///
/// Returns the store error after logging it.
pub async fn save(store: &dyn MessageStore, content: &str, role: Role) -> Result<MessageRecord, StoreError> {
    let message = NewMessage::new(content, role);
    match store.insert(&message).await {
        Ok(record) => {
            info!(id = ?record.id, role = %record.role, "message saved");
            debug!(?record, "saved message record");
            Ok(record)
        }
        Err(e) => {
            error!(error = %e, code = e.error_code(), retryable = e.retryable(), %role, "error saving message");
            Err(e)
        }
    }
}

/// Fetch and log every stored row. Returns `None` on failure.
pub async fn fetch_all(store: &dyn MessageStore) -> Option<Vec<MessageRecord>> {
    match store.fetch_all().await {
        Ok(rows) => {
            info!(count = rows.len(), "fetched stored messages");
            for row in &rows {
                debug!(id = ?row.id, role = %row.role, content = ?row.content, "stored message");
            }
            Some(rows)
        }
        Err(e) => {
            error!(error = %e, code = e.error_code(), "error fetching messages");
            None
        }
    }
}

#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;

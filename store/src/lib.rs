//! Store: the persistence gateway for the remote `messages` table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host builds one [`MessageStore`] at startup and shares it with the API
//! routes. Interactive saves go through [`gateway::save`]; the startup
//! diagnostic goes through [`gateway::fetch_all`].
//!
//! DESIGN
//! ======
//! `MessageStore` is the async seam: [`rest::RestStore`] talks to the hosted
//! REST endpoint, [`UnconfiguredStore`] stands in when no store URL is set,
//! and tests substitute in-memory mocks.

pub mod config;
pub mod error;
pub mod gateway;
pub mod rest;

pub use config::StoreConfig;
pub use error::StoreError;
pub use rest::RestStore;

use records::{MessageRecord, NewMessage};

/// Async access to the remote message table. Enables mocking in tests.
#[async_trait::async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert one row and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails, the store rejects it,
    /// or the response cannot be decoded.
    async fn insert(&self, message: &NewMessage) -> Result<MessageRecord, StoreError>;

    /// Fetch every row in the table.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails, the store rejects it,
    /// or the response cannot be decoded.
    async fn fetch_all(&self) -> Result<Vec<MessageRecord>, StoreError>;
}

/// Store used when the process starts without a store URL.
///
/// Every call fails with [`StoreError::NotConfigured`], so the missing
/// configuration surfaces through ordinary write/read errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredStore;

#[async_trait::async_trait]
impl MessageStore for UnconfiguredStore {
    async fn insert(&self, _message: &NewMessage) -> Result<MessageRecord, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn fetch_all(&self) -> Result<Vec<MessageRecord>, StoreError> {
        Err(StoreError::NotConfigured)
    }
}

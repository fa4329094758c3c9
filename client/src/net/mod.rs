//! Networking modules for the host REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the `/api/messages` endpoints; the host holds the store key so
//! the browser never talks to the store directly.

pub mod api;

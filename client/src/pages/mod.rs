//! Route-level page components.

pub mod conversation;

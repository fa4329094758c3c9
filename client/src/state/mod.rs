//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `conversation` is the list-level model provided through context;
//! `message` is the per-message view state each `MessageItem` owns.

pub mod conversation;
pub mod message;

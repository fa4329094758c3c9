//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render conversation turns from plain `records::Message` props;
//! each message owns its edit/history state locally.

pub mod message;
pub mod message_list;

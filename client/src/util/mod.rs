//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so formatting and rendering rules stay testable without a browser.

pub mod clock;
pub mod format;

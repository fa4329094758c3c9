//! Conversation list state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Holds the messages as last loaded from the host. Per-message edit state
//! lives in each `MessageItem`, so reloading this list remounts the views
//! from what the store holds.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use records::{Message, MessageRecord};

/// Loaded conversation plus load status.
#[derive(Clone, Debug)]
pub struct ConversationState {
    pub messages: Vec<Message>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self { messages: Vec::new(), loading: true, error: None }
    }
}

impl ConversationState {
    /// Apply the result of a list fetch.
    ///
    /// A failed fetch keeps the previously loaded messages on screen.
    pub fn load(&mut self, result: Result<Vec<MessageRecord>, String>) {
        self.loading = false;
        match result {
            Ok(records) => {
                self.messages = records.into_iter().map(Message::from).collect();
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}

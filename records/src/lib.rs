//! Shared message model for the chat log.
//!
//! This crate owns the data shapes used by `store`, `client`, and the host.
//! It performs no I/O so the browser bundle can depend on it without pulling
//! in the HTTP stack.

use std::fmt;

use serde::{Deserialize, Serialize};


// =============================================================================
// ROLE
// =============================================================================

/// Author of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire/storage spelling of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Short label shown next to follow-up messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "AI",
        }
    }

    #[must_use]
    pub fn is_user(self) -> bool {
        self == Self::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MESSAGE
// =============================================================================

/// One prior content of a message, stamped in Unix epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub content: String,
    pub timestamp: i64,
}

/// A related message shown nested under its parent. Display-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    pub role: Role,
    pub content: Option<String>,
}

/// A single conversation turn as handed to the message view.
///
/// `content: None` on an assistant message means the response is still
/// pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Option<String>,
    /// Prior contents, oldest first.
    #[serde(default)]
    pub versions: Vec<Version>,
    #[serde(default)]
    pub follow_ups: Vec<FollowUp>,
}

impl Message {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: Some(content.into()), versions: Vec::new(), follow_ups: Vec::new() }
    }

    /// An assistant turn whose response has not arrived yet.
    #[must_use]
    pub fn pending() -> Self {
        Self { role: Role::Assistant, content: None, versions: Vec::new(), follow_ups: Vec::new() }
    }

    #[must_use]
    pub fn with_versions(mut self, versions: Vec<Version>) -> Self {
        self.versions = versions;
        self
    }

    #[must_use]
    pub fn with_follow_ups(mut self, follow_ups: Vec<FollowUp>) -> Self {
        self.follow_ups = follow_ups;
        self
    }

    /// True for an assistant message with no content yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.role == Role::Assistant && self.content.is_none()
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self { role: record.role, content: record.content, versions: Vec::new(), follow_ups: Vec::new() }
    }
}

// =============================================================================
// STORE ROWS
// =============================================================================

/// A row of the remote `messages` table.
///
/// `id` and `created_at` are assigned by the store and absent on rows built
/// locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub content: Option<String>,
    pub role: Role,
}

/// Insert payload for one new row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub content: String,
    pub role: Role,
}

impl NewMessage {
    #[must_use]
    pub fn new(content: impl Into<String>, role: Role) -> Self {
        Self { content: content.into(), role }
    }

    /// True when the content is empty after trimming whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

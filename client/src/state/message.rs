//! Per-message view state: edit mode, draft, version history, toggles.
//!
//! DESIGN
//! ======
//! One `MessageView` lives for as long as its message is mounted. It is a
//! plain struct so the whole edit/history state machine is testable without
//! a reactive runtime; the `MessageItem` component wraps it in an
//! `RwSignal`.
//!
//! States are `Viewing` and `Editing`. A non-blank save appends to history,
//! returns to `Viewing` immediately, and hands back a [`SaveRequest`] for the
//! caller to dispatch. The write outcome comes back later through
//! [`MessageView::apply_saved`] / [`MessageView::apply_failed`], keyed by the
//! request's sequence number so only the newest save can update the sync
//! status. Outcomes never touch content or history: the view is not read
//! back from the store. History is append-only.
//!
//! Cancel only leaves edit mode. The draft stays in `current_content`.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use records::{FollowUp, Message, Role, Version};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Viewing,
    Editing,
}

/// What the message body area shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageBody {
    /// Assistant response not arrived yet.
    Pending,
    /// Draft editor bound to the current content.
    Editor,
    /// Read-only current content.
    Text,
}

/// Last known outcome of the newest save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

/// A write the component must hand to the persistence gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRequest {
    pub seq: u64,
    pub content: String,
    pub role: Role,
}

#[derive(Clone, Debug)]
pub struct MessageView {
    role: Role,
    pending: bool,
    follow_ups: Vec<FollowUp>,
    mode: Mode,
    current_content: String,
    history: Vec<Version>,
    show_history: bool,
    show_follow_ups: bool,
    save_seq: u64,
    sync: SyncStatus,
}

impl MessageView {
    /// Build view state for a freshly mounted message.
    ///
    /// History starts from the message's versions; when there are none and
    /// the message has non-empty content, it is seeded with that content
    /// stamped `now_ms`.
    #[must_use]
    pub fn mount(message: &Message, now_ms: i64) -> Self {
        let current_content = message.content.clone().unwrap_or_default();
        let mut history = message.versions.clone();
        if history.is_empty() && !current_content.is_empty() {
            history.push(Version { content: current_content.clone(), timestamp: now_ms });
        }

        Self {
            role: message.role,
            pending: message.is_pending(),
            follow_ups: message.follow_ups.clone(),
            mode: Mode::Viewing,
            current_content,
            history,
            show_history: false,
            show_follow_ups: false,
            save_seq: 0,
            sync: SyncStatus::Idle,
        }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// `Viewing -> Editing`. A pending assistant message never becomes
    /// editable.
    pub fn enter_edit(&mut self) {
        if !self.pending {
            self.mode = Mode::Editing;
        }
    }

    /// Replace the draft. Ignored outside edit mode.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        if self.mode == Mode::Editing {
            self.current_content = text.into();
        }
    }

    /// Commit the draft.
    ///
    /// A blank draft (or a call outside edit mode) changes nothing and
    /// returns `None`. Otherwise the draft is appended to history, edit mode
    /// ends, and the returned request must be dispatched to the store.
    pub fn save_edit(&mut self, now_ms: i64) -> Option<SaveRequest> {
        if self.mode != Mode::Editing || self.current_content.trim().is_empty() {
            return None;
        }

        self.history.push(Version { content: self.current_content.clone(), timestamp: now_ms });
        self.mode = Mode::Viewing;
        self.save_seq += 1;
        self.sync = SyncStatus::Saving;

        Some(SaveRequest { seq: self.save_seq, content: self.current_content.clone(), role: self.role })
    }

    /// `Editing -> Viewing`. The draft is kept as the current content.
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Viewing;
    }

    /// Flip history visibility. No-op while history is empty.
    pub fn toggle_history(&mut self) {
        if !self.history.is_empty() {
            self.show_history = !self.show_history;
        }
    }

    /// Flip follow-up visibility. No-op when there are no follow-ups.
    pub fn toggle_follow_ups(&mut self) {
        if !self.follow_ups.is_empty() {
            self.show_follow_ups = !self.show_follow_ups;
        }
    }

    // =========================================================================
    // WRITE OUTCOMES
    // =========================================================================

    /// Record a confirmed write. Returns `false` when `seq` is stale.
    pub fn apply_saved(&mut self, seq: u64) -> bool {
        if seq != self.save_seq {
            return false;
        }
        self.sync = SyncStatus::Saved;
        true
    }

    /// Record a failed write. Returns `false` when `seq` is stale.
    /// History and content are left as they are.
    pub fn apply_failed(&mut self, seq: u64, reason: impl Into<String>) -> bool {
        if seq != self.save_seq {
            return false;
        }
        self.sync = SyncStatus::Failed(reason.into());
        true
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn body(&self) -> MessageBody {
        if self.pending {
            MessageBody::Pending
        } else if self.mode == Mode::Editing {
            MessageBody::Editor
        } else {
            MessageBody::Text
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    #[must_use]
    pub fn can_edit(&self) -> bool {
        !self.pending
    }

    #[must_use]
    pub fn current_content(&self) -> &str {
        &self.current_content
    }

    #[must_use]
    pub fn history(&self) -> &[Version] {
        &self.history
    }

    #[must_use]
    pub fn follow_ups(&self) -> &[FollowUp] {
        &self.follow_ups
    }

    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn has_follow_ups(&self) -> bool {
        !self.follow_ups.is_empty()
    }

    #[must_use]
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    #[must_use]
    pub fn show_follow_ups(&self) -> bool {
        self.show_follow_ups
    }

    #[must_use]
    pub fn sync(&self) -> &SyncStatus {
        &self.sync
    }
}

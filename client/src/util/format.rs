//! Display strings for the message view.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::state::message::SyncStatus;

/// 1-based label for the history entry at `index`.
pub fn version_label(index: usize) -> String {
    format!("Version {}", index + 1)
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Out-of-range values fall back to the raw number.
pub fn format_timestamp(ms: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| ms.to_string())
}

pub fn history_toggle_label(shown: bool) -> &'static str {
    if shown { "Hide History" } else { "Show History" }
}

pub fn follow_ups_toggle_label(shown: bool) -> &'static str {
    if shown { "Hide Follow-ups" } else { "Show Follow-ups" }
}

/// Status line for the newest save, or `None` when nothing was saved yet.
pub fn sync_label(status: &SyncStatus) -> Option<String> {
    match status {
        SyncStatus::Idle => None,
        SyncStatus::Saving => Some("Saving...".to_owned()),
        SyncStatus::Saved => Some("Saved".to_owned()),
        SyncStatus::Failed(reason) => Some(format!("Not saved: {reason}")),
    }
}

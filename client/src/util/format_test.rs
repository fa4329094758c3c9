use super::*;

#[test]
fn version_label_is_one_based() {
    assert_eq!(version_label(0), "Version 1");
    assert_eq!(version_label(9), "Version 10");
}

#[test]
fn format_timestamp_renders_utc() {
    assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
    assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13:20");
}

#[test]
fn format_timestamp_drops_sub_second_part() {
    assert_eq!(format_timestamp(1_700_000_000_999), "2023-11-14 22:13:20");
}

#[test]
fn format_timestamp_out_of_range_falls_back() {
    assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
}

#[test]
fn toggle_labels_follow_visibility() {
    assert_eq!(history_toggle_label(false), "Show History");
    assert_eq!(history_toggle_label(true), "Hide History");
    assert_eq!(follow_ups_toggle_label(false), "Show Follow-ups");
    assert_eq!(follow_ups_toggle_label(true), "Hide Follow-ups");
}

#[test]
fn sync_label_per_status() {
    assert_eq!(sync_label(&SyncStatus::Idle), None);
    assert_eq!(sync_label(&SyncStatus::Saving).as_deref(), Some("Saving..."));
    assert_eq!(sync_label(&SyncStatus::Saved).as_deref(), Some("Saved"));
    assert_eq!(
        sync_label(&SyncStatus::Failed("save failed: 502".into())).as_deref(),
        Some("Not saved: save failed: 502")
    );
}

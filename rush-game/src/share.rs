//! Share payload formatting for a completed run.

pub const SHARE_TITLE: &str = "The Rush";

/// Notices surfaced by the three-tier share degradation.
pub const SHARE_NOTE_SHARED: &str = "Shared with grace.";
pub const SHARE_NOTE_COPIED: &str = "Copied to clipboard.";
pub const SHARE_NOTE_UNAVAILABLE: &str = "Sharing unavailable.";

/// Format a second count as `MM:SS`, zero-padded.
#[must_use]
pub fn format_run_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// The fixed-format share text for a successful run.
#[must_use]
pub fn share_payload(total_seconds: u32) -> String {
    format!("Completed THE RUSH in {}.", format_run_time(total_seconds))
}

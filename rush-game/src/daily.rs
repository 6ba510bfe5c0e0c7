//! Daily-window arithmetic for the once-per-day completion lock.
//!
//! The day rolls over at a fixed local reset instant of 23:59. A moment's
//! "window key" is the calendar date of the most recent past-or-current
//! boundary, so each window spans from one day's 23:59 to the next.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::snapshot::DailyCompletionRecord;

pub const DAILY_RESET_HOUR: u32 = 23;
pub const DAILY_RESET_MINUTE: u32 = 59;

fn at_or_past_reset(now: NaiveDateTime) -> bool {
    (now.hour(), now.minute()) >= (DAILY_RESET_HOUR, DAILY_RESET_MINUTE)
}

/// Window key for the given local moment, formatted `YYYY-MM-DD`.
#[must_use]
pub fn window_key(now: NaiveDateTime) -> String {
    let date = if at_or_past_reset(now) {
        now.date()
    } else {
        now.date().pred_opt().unwrap_or_else(|| now.date())
    };
    date.format("%Y-%m-%d").to_string()
}

/// Whether the recorded completion falls in the current window.
#[must_use]
pub fn is_locked(record: Option<&DailyCompletionRecord>, now: NaiveDateTime) -> bool {
    record.is_some_and(|rec| rec.last_completed_window_key == window_key(now))
}

/// The next reset instant strictly after `now`.
#[must_use]
pub fn next_reset(now: NaiveDateTime) -> NaiveDateTime {
    let today = now
        .date()
        .and_hms_opt(DAILY_RESET_HOUR, DAILY_RESET_MINUTE, 0)
        .unwrap_or(now);
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

/// Hours and minutes remaining until the next reset, floored to whole
/// minutes the way the countdown displays them.
#[must_use]
pub fn time_until_reset(now: NaiveDateTime) -> (u32, u32) {
    let total_minutes = next_reset(now)
        .signed_duration_since(now)
        .num_minutes()
        .max(0) as u32;
    (total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    #[test]
    fn window_key_flips_at_reset_boundary() {
        assert_eq!(window_key(at(2026, 8, 5, 23, 58)), "2026-08-04");
        assert_eq!(window_key(at(2026, 8, 5, 23, 59)), "2026-08-05");
        assert_eq!(window_key(at(2026, 8, 6, 0, 1)), "2026-08-05");
    }

    #[test]
    fn lock_releases_after_the_boundary() {
        let record = DailyCompletionRecord {
            last_completed_window_key: window_key(at(2026, 8, 5, 23, 58)),
        };
        assert!(is_locked(Some(&record), at(2026, 8, 5, 23, 30)));
        assert!(!is_locked(Some(&record), at(2026, 8, 6, 0, 1)));
        assert!(!is_locked(None, at(2026, 8, 5, 23, 30)));
    }

    #[test]
    fn next_reset_rolls_to_tomorrow_at_the_instant() {
        assert_eq!(next_reset(at(2026, 8, 5, 10, 0)), at(2026, 8, 5, 23, 59));
        assert_eq!(next_reset(at(2026, 8, 5, 23, 59)), at(2026, 8, 6, 23, 59));
    }

    #[test]
    fn time_until_reset_floors_to_minutes() {
        assert_eq!(time_until_reset(at(2026, 8, 5, 22, 59)), (1, 0));
        assert_eq!(time_until_reset(at(2026, 8, 5, 23, 58)), (0, 1));
    }
}

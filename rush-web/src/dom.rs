//! Browser/DOM helpers with native fallbacks for server rendering.

use chrono::NaiveDateTime;

/// Local wall-clock time as a naive datetime. The core crate never reads a
/// clock; every value of "now" flows through here.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn local_now() -> NaiveDateTime {
    use chrono::NaiveDate;
    let date = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )
    .and_then(|day| day.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
    .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Entropy for seeding a run. Derived from the clock plus jitter so two
/// sessions started in the same millisecond still diverge.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn entropy_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let jitter = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    millis ^ jitter.rotate_left(17)
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x5EED, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_now_is_a_plausible_date() {
        let now = local_now();
        assert!(now > chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().into());
    }
}

//! Duration string codec
//!
//! Durations travel as `"HhMmSs"` strings (e.g. `"01h02m03s"`), each field
//! zero-padded to at least two digits. Hours are not capped, so large
//! durations simply grow a wider hour field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{HOUR, MINUTE, SECOND};

/// Hour and minute groups are optional, the seconds group is mandatory
static DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)\s*$").expect("valid regex"));

/// Parse a `"HhMmSs"` duration string into milliseconds
///
/// # Arguments
/// * `duration` - Duration string; hours and minutes optional, seconds
///   mandatory (`"5m"` does not match, `"5m0s"` does)
///
/// # Returns
/// * `Option<i64>` - Total milliseconds, or `None` on non-match or when the
///   total overflows the millisecond range
pub fn duration_to_millis(duration: &str) -> Option<i64> {
    let caps = DURATION.captures(duration)?;
    let field = |i: usize| -> Option<i64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse::<i64>().ok(),
            None => Some(0),
        }
    };

    let hours = field(1)?.checked_mul(HOUR)?;
    let minutes = field(2)?.checked_mul(MINUTE)?;
    let seconds = field(3)?.checked_mul(SECOND)?;

    hours.checked_add(minutes)?.checked_add(seconds)
}

/// Format a millisecond count as a `"HhMmSs"` duration string
///
/// Whole hours are consumed first, then whole minutes, then whole seconds;
/// any sub-second remainder is dropped. Negative counts clamp to zero so the
/// output always keeps the canonical zero-padded form.
pub fn millis_to_duration(millis: i64) -> String {
    let mut millis = millis.max(0);

    let hours = millis / HOUR;
    millis -= hours * HOUR;

    let minutes = millis / MINUTE;
    millis -= minutes * MINUTE;

    let seconds = millis / SECOND;

    format!("{}h{}m{}s", pad_number(hours), pad_number(minutes), pad_number(seconds))
}

/// Zero-pad to a minimum width of two digits
fn pad_number(n: i64) -> String {
    format!("{n:02}")
}

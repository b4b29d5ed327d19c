//! Score freshness color
//!
//! Maps the age of a score's timestamp to a grayscale hex color, newer
//! scores rendering brighter. Brightness falls from 255 (fresh) to 128
//! (eight months or older) along a cubic ease-out curve.

use chrono::{DateTime, Utc};

use crate::constants::{
    FRESH_SCORE_AGE_MILLIS, FRESH_SCORE_BRIGHTNESS, OLD_SCORE_AGE_MILLIS, OLD_SCORE_BRIGHTNESS,
};

/// A score timestamp, either an instant or raw epoch seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSet {
    Instant(DateTime<Utc>),
    Epoch(i64),
}

impl From<DateTime<Utc>> for TimeSet {
    fn from(date: DateTime<Utc>) -> Self {
        TimeSet::Instant(date)
    }
}

impl From<i64> for TimeSet {
    fn from(epoch_secs: i64) -> Self {
        TimeSet::Epoch(epoch_secs)
    }
}

/// Grayscale color hex string for a score of the given age
///
/// Missing, zero or unconvertible timestamps yield `"#ffffff"`.
pub fn get_time_string_color(time_set: Option<TimeSet>) -> String {
    time_string_color_at(time_set, Utc::now())
}

/// [`get_time_string_color`] against an explicit reference instant
pub fn time_string_color_at(time_set: Option<TimeSet>, now: DateTime<Utc>) -> String {
    let instant = match time_set {
        None | Some(TimeSet::Epoch(0)) => None,
        Some(TimeSet::Instant(date)) => Some(date),
        Some(TimeSet::Epoch(secs)) => DateTime::from_timestamp(secs, 0),
    };
    let Some(instant) = instant else {
        return "#ffffff".to_string();
    };

    let age_millis = now.signed_duration_since(instant).num_milliseconds();
    let ratio = (age_millis - FRESH_SCORE_AGE_MILLIS) as f64
        / (OLD_SCORE_AGE_MILLIS - FRESH_SCORE_AGE_MILLIS) as f64;
    let eased = (1.0 - ratio.clamp(0.0, 1.0)).powi(3);

    let brightness = (OLD_SCORE_BRIGHTNESS as f64
        + (FRESH_SCORE_BRIGHTNESS - OLD_SCORE_BRIGHTNESS) as f64 * eased) as u8;

    format!("#{brightness:02x}{brightness:02x}{brightness:02x}")
}

//! Constants used throughout the library
//!
//! This module centralizes millisecond durations, timezone identifiers and
//! tuning values to improve maintainability and consistency.

use chrono_tz::Tz;

// Millisecond durations
pub const SECOND: i64 = 1_000;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;

// Source timezones. BeatLeader and AccSaber happen to publish dates in the
// same zone today; keep them independently configurable.
pub const BEATLEADER_TZ: Tz = Tz::Europe__Berlin;
pub const ACCSABER_TZ: Tz = Tz::Europe__Berlin;

// Score freshness color tuning
/// Age at which a score counts as completely fresh
pub const FRESH_SCORE_AGE_MILLIS: i64 = 0;
/// Age at which a score counts as completely old (~8 months, 30-day months)
pub const OLD_SCORE_AGE_MILLIS: i64 = 8 * 30 * DAY;
/// Grayscale brightness of a completely fresh score
pub const FRESH_SCORE_BRIGHTNESS: i64 = 255;
/// Grayscale brightness of a completely old score
pub const OLD_SCORE_BRIGHTNESS: i64 = 128;

// Ranking batch tuning
/// Days from the ISO week start (Monday) to the batch boundary day (Friday)
pub const BATCH_BOUNDARY_DAY_OFFSET: i64 = 4;
/// Hour of day (UTC) of the batch boundary
pub const BATCH_BOUNDARY_HOUR: i64 = 10;
/// Days between map approval and ranking eligibility
pub const RANKING_LEAD_DAYS: i64 = 7;

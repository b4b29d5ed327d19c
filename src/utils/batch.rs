//! Ranking batch scheduling
//!
//! Pending maps become eligible for ranking at a weekly cutoff: Friday
//! 10:00 UTC. A map approved less than seven days before the cutoff rolls
//! over into the following week's batch.

use chrono::{DateTime, Duration, NaiveTime, Utc, Weekday};

use crate::constants::{BATCH_BOUNDARY_DAY_OFFSET, BATCH_BOUNDARY_HOUR, RANKING_LEAD_DAYS};

/// The upcoming batch boundary: the next Friday 10:00 UTC
pub fn get_current_batch_date() -> DateTime<Utc> {
    current_batch_date_at(Utc::now())
}

/// [`get_current_batch_date`] against an explicit reference instant
///
/// If `now` is at or past this week's boundary, the boundary one week later
/// is returned.
pub fn current_batch_date_at(now: DateTime<Utc>) -> DateTime<Utc> {
    let week_start = now
        .date_naive()
        .week(Weekday::Mon)
        .first_day()
        .and_time(NaiveTime::MIN)
        .and_utc();
    let boundary =
        week_start + Duration::days(BATCH_BOUNDARY_DAY_OFFSET) + Duration::hours(BATCH_BOUNDARY_HOUR);

    if now < boundary {
        boundary
    } else {
        boundary + Duration::days(7)
    }
}

/// Whether a map approved at the given epoch-seconds timestamp makes the
/// current batch
///
/// Missing, zero or unconvertible timestamps yield `false`.
pub fn will_be_ranked_in_current_batch(approval_timeset: Option<i64>) -> bool {
    will_be_ranked_in_current_batch_at(approval_timeset, Utc::now())
}

/// [`will_be_ranked_in_current_batch`] against an explicit reference instant
pub fn will_be_ranked_in_current_batch_at(approval_timeset: Option<i64>, now: DateTime<Utc>) -> bool {
    let Some(approval) = approval_timeset.filter(|&t| t != 0) else {
        return false;
    };
    let Some(approved_at) = DateTime::from_timestamp(approval, 0) else {
        return false;
    };

    let ready_to_rank = approved_at + Duration::days(RANKING_LEAD_DAYS);

    ready_to_rank < current_batch_date_at(now)
}

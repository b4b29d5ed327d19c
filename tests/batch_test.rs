use chrono::{Datelike, Duration, TimeZone, Timelike, Utc, Weekday};
use saberboard::utils::batch::{
    current_batch_date_at, get_current_batch_date, will_be_ranked_in_current_batch,
    will_be_ranked_in_current_batch_at,
};

#[test]
fn test_batch_date_midweek() {
    // Wednesday; the boundary is that week's Friday 10:00 UTC
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let boundary = current_batch_date_at(now);
    assert_eq!(boundary, Utc.with_ymd_and_hms(2025, 1, 17, 10, 0, 0).unwrap());
}

#[test]
fn test_batch_date_just_before_boundary() {
    let now = Utc.with_ymd_and_hms(2025, 1, 17, 9, 59, 59).unwrap();
    let boundary = current_batch_date_at(now);
    assert_eq!(boundary, Utc.with_ymd_and_hms(2025, 1, 17, 10, 0, 0).unwrap());
}

#[test]
fn test_batch_date_at_boundary_rolls_over() {
    // Exactly at the cutoff the upcoming boundary is next week's
    let now = Utc.with_ymd_and_hms(2025, 1, 17, 10, 0, 0).unwrap();
    let boundary = current_batch_date_at(now);
    assert_eq!(boundary, Utc.with_ymd_and_hms(2025, 1, 24, 10, 0, 0).unwrap());
}

#[test]
fn test_batch_date_weekend() {
    let now = Utc.with_ymd_and_hms(2025, 1, 18, 0, 0, 0).unwrap(); // Saturday
    let boundary = current_batch_date_at(now);
    assert_eq!(boundary, Utc.with_ymd_and_hms(2025, 1, 24, 10, 0, 0).unwrap());
}

#[test]
fn test_batch_date_is_always_friday_ten_utc() {
    let boundary = get_current_batch_date();
    assert_eq!(boundary.weekday(), Weekday::Fri);
    assert_eq!(boundary.hour(), 10);
    assert_eq!(boundary.minute(), 0);
    assert_eq!(boundary.second(), 0);
}

#[test]
fn test_batch_date_stable_within_week() {
    let tuesday = Utc.with_ymd_and_hms(2025, 1, 14, 8, 0, 0).unwrap();
    let thursday = Utc.with_ymd_and_hms(2025, 1, 16, 20, 0, 0).unwrap();
    assert_eq!(current_batch_date_at(tuesday), current_batch_date_at(thursday));
}

#[test]
fn test_will_be_ranked_missing_approval() {
    assert!(!will_be_ranked_in_current_batch(None));
    assert!(!will_be_ranked_in_current_batch(Some(0)));
}

#[test]
fn test_will_be_ranked_early_approval() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let boundary = current_batch_date_at(now);
    // Approved 8 days before the boundary, ready a day early
    let approval = (boundary - Duration::days(8)).timestamp();
    assert!(will_be_ranked_in_current_batch_at(Some(approval), now));
}

#[test]
fn test_will_be_ranked_late_approval() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let boundary = current_batch_date_at(now);
    // Approved 6 days before the boundary, ready only after it
    let approval = (boundary - Duration::days(6)).timestamp();
    assert!(!will_be_ranked_in_current_batch_at(Some(approval), now));
}

#[test]
fn test_will_be_ranked_boundary_is_strict() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let boundary = current_batch_date_at(now);
    // Ready exactly at the boundary misses the batch
    let approval = (boundary - Duration::days(7)).timestamp();
    assert!(!will_be_ranked_in_current_batch_at(Some(approval), now));
}

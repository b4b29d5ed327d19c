//! Date and time utility functions
//!
//! This module converts external date representations into `chrono` values
//! and formats dates for display, both absolutely (locale-aware, via
//! chrono's localized formatting) and relatively ("yesterday", "in 3 days").
//!
//! All parsing is fail-soft: malformed input yields `None`, never a panic or
//! an invalid date value.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{self, ConfigError};
use crate::constants::{ACCSABER_TZ, BEATLEADER_TZ};

/// Source-site score page date format: `"YYYY-M-D H:M[:S] UTC"`
static SOURCE_SITE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{1,2}-\d{1,2})\s+(\d{1,2}:\d{1,2}(:\d{1,2})?)\sUTC$").expect("valid regex")
});

/// Parse a base-10 count of seconds since the Unix epoch
///
/// # Arguments
/// * `str` - Decimal seconds-since-epoch string
///
/// # Returns
/// * `Option<DateTime<Utc>>` - The instant, or `None` for non-numeric or
///   out-of-range input
pub fn date_from_unix(str: &str) -> Option<DateTime<Utc>> {
    let secs = str.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0)
}

/// Parse a date string into a UTC instant
///
/// Score pages publish dates as `"YYYY-M-D H:M[:S] UTC"` (seconds optional);
/// that format is recognized first and read as UTC wall-clock time. Anything
/// else goes through a chain of common parse strategies (RFC 3339, RFC 2822,
/// naive ISO 8601 treated as UTC, bare dates at UTC midnight).
pub fn date_from_string(str: &str) -> Option<DateTime<Utc>> {
    if str.is_empty() {
        return None;
    }

    if let Some(caps) = SOURCE_SITE_DATE.captures(str) {
        let fmt = if caps.get(3).is_some() { "%Y-%m-%d %H:%M:%S" } else { "%Y-%m-%d %H:%M" };
        return NaiveDateTime::parse_from_str(&format!("{} {}", &caps[1], &caps[2]), fmt)
            .ok()
            .map(|naive| naive.and_utc());
    }

    parse_datetime_fallback(str)
}

/// Try common datetime representations in order of likelihood
fn parse_datetime_fallback(str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(str) {
        // RFC 3339 with timezone (e.g. "2025-01-15T14:30:00Z")
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(str) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(str, "%Y-%m-%dT%H:%M:%S%.f") {
        // ISO 8601 without timezone, treated as UTC
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(str, "%Y-%m-%d %H:%M:%S%.f") {
        // Space-separated format (e.g. "2025-01-15 14:30:00")
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(str, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN).and_utc());
    }

    log::debug!("unparseable date string: {str:?}");
    None
}

/// Return a new instant offset from `date` by `millis` (may be negative)
pub fn add_to_date(millis: i64, date: DateTime<Utc>) -> DateTime<Utc> {
    date + Duration::milliseconds(millis)
}

/// Return a new instant offset from the current time by `millis`
pub fn add_to_now(millis: i64) -> DateTime<Utc> {
    add_to_date(millis, Utc::now())
}

/// Granularity to which [`truncate_date`] resets a date's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TruncationPrecision {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl TruncationPrecision {
    /// Position in the coarsest-to-finest field order
    fn rank(self) -> u8 {
        match self {
            TruncationPrecision::Year => 0,
            TruncationPrecision::Month => 1,
            TruncationPrecision::Day => 2,
            TruncationPrecision::Hour => 3,
            TruncationPrecision::Minute => 4,
            TruncationPrecision::Second => 5,
        }
    }
}

/// Reset every field strictly finer than `precision` to its minimum
///
/// The resets cascade: truncating to `Year` also resets month, day, hour,
/// minute, second and sub-second fields, while truncating to `Hour` only
/// resets minute, second and sub-second fields and leaves the date part
/// unchanged. The input is never mutated.
pub fn truncate_date(date: DateTime<Utc>, precision: TruncationPrecision) -> DateTime<Utc> {
    let rank = precision.rank();

    let mut truncated = Some(date);
    if rank < 1 {
        truncated = truncated.and_then(|d| d.with_month(1));
    }
    if rank < 2 {
        truncated = truncated.and_then(|d| d.with_day(1));
    }
    if rank < 3 {
        truncated = truncated.and_then(|d| d.with_hour(0));
    }
    if rank < 4 {
        truncated = truncated.and_then(|d| d.with_minute(0));
    }
    if rank < 5 {
        truncated = truncated.and_then(|d| d.with_second(0));
    }
    // Sub-second fields are cleared at every precision
    truncated.and_then(|d| d.with_nanosecond(0)).unwrap_or(date)
}

/// Local midnight of `date`'s calendar day in the given timezone, as UTC
///
/// Returns `None` only when the zone skips midnight that day (DST gap).
pub fn to_timezone_midnight(date: DateTime<Utc>, timezone: Tz) -> Option<DateTime<Utc>> {
    let local_day = date.with_timezone(&timezone).date_naive();
    timezone
        .from_local_datetime(&local_day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|midnight| midnight.with_timezone(&Utc))
}

/// Local midnight in the BeatLeader timezone
pub fn to_bl_midnight(date: DateTime<Utc>) -> Option<DateTime<Utc>> {
    to_timezone_midnight(date, BEATLEADER_TZ)
}

/// Local midnight in the AccSaber timezone
pub fn to_acc_saber_midnight(date: DateTime<Utc>) -> Option<DateTime<Utc>> {
    to_timezone_midnight(date, ACCSABER_TZ)
}

/// Parse a SQL-style datetime string interpreted in the AccSaber timezone
pub fn from_acc_saber_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;

    ACCSABER_TZ
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Date part style for absolute formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Full,
    Long,
    Medium,
    Short,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Full => "%A, %B %e, %Y",
            DateStyle::Long => "%B %e, %Y",
            DateStyle::Medium => "%b %e, %Y",
            // Locale's own date representation
            DateStyle::Short => "%x",
        }
    }
}

impl FromStr for DateStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(DateStyle::Full),
            "long" => Ok(DateStyle::Long),
            "medium" => Ok(DateStyle::Medium),
            "short" => Ok(DateStyle::Short),
            other => Err(ConfigError::UnknownDateStyle(other.to_string())),
        }
    }
}

/// Time part style for absolute formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    Full,
    Long,
    Medium,
    Short,
}

impl TimeStyle {
    fn pattern(self) -> &'static str {
        match self {
            TimeStyle::Full => "%T %Z",
            TimeStyle::Long => "%T %Z",
            // Locale's own time representation
            TimeStyle::Medium => "%X",
            TimeStyle::Short => "%R",
        }
    }
}

impl FromStr for TimeStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(TimeStyle::Full),
            "long" => Ok(TimeStyle::Long),
            "medium" => Ok(TimeStyle::Medium),
            "short" => Ok(TimeStyle::Short),
            other => Err(ConfigError::UnknownTimeStyle(other.to_string())),
        }
    }
}

/// Formatting options for [`format_date_with_options`]
///
/// `pattern` overrides the styles with a raw strftime pattern when set.
/// With no styles and no pattern, the short date representation is used.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub date_style: Option<DateStyle>,
    pub time_style: Option<TimeStyle>,
    pub pattern: Option<String>,
}

/// Format an instant with explicit options
///
/// # Arguments
/// * `val` - The instant to format; `None` yields `None`
/// * `options` - Style or pattern selection
/// * `locale` - Explicit locale, or `None` for the configured current locale
pub fn format_date_with_options(
    val: Option<DateTime<Utc>>,
    options: &FormatOptions,
    locale: Option<Locale>,
) -> Option<String> {
    let val = val?;
    let locale = config::resolve_locale(locale);

    let fmt = if let Some(pattern) = &options.pattern {
        pattern.clone()
    } else {
        match (options.date_style, options.time_style) {
            (None, None) => DateStyle::Short.pattern().to_string(),
            (date_style, time_style) => {
                let mut parts = Vec::new();
                if let Some(style) = date_style {
                    parts.push(style.pattern());
                }
                if let Some(style) = time_style {
                    parts.push(style.pattern());
                }
                parts.join(", ")
            }
        }
    };

    Some(val.format_localized(&fmt, locale).to_string())
}

/// Format an instant with date and optional time styles
///
/// Passing `None` for `time_style` omits the time portion entirely rather
/// than defaulting it.
pub fn format_date(
    val: Option<DateTime<Utc>>,
    date_style: DateStyle,
    time_style: Option<TimeStyle>,
    locale: Option<Locale>,
) -> Option<String> {
    format_date_with_options(
        val,
        &FormatOptions {
            date_style: Some(date_style),
            time_style,
            pattern: None,
        },
        locale,
    )
}

/// A fixed unit for relative time phrasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Parse a unit name, degrading unknown names to seconds
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "second" => TimeUnit::Second,
            "minute" => TimeUnit::Minute,
            "hour" => TimeUnit::Hour,
            "day" => TimeUnit::Day,
            "month" => TimeUnit::Month,
            "year" => TimeUnit::Year,
            other => {
                log::warn!("unknown relative time unit {other:?}, falling back to seconds");
                TimeUnit::Second
            }
        }
    }

    /// Seconds per unit (30-day months, 365-day years)
    fn divider(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => 86_400.0,
            TimeUnit::Month => 86_400.0 * 30.0,
            TimeUnit::Year => 86_400.0 * 365.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

/// Unit selection for [`format_date_relative`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelativeUnit {
    /// Pick the coarsest unit whose threshold the elapsed time has not passed
    #[default]
    Auto,
    Fixed(TimeUnit),
}

/// Format a raw signed offset as a relative phrase in the given unit
///
/// `val` is not validated as a date; `3` with [`TimeUnit::Day`] renders
/// "in 3 days", `-1` renders "yesterday".
pub fn format_date_relative_in_units(val: i64, unit: TimeUnit, locale: Option<Locale>) -> String {
    relative_phrase(val, unit, config::resolve_locale(locale))
}

/// Format an instant relative to the current time
///
/// Rounds to the nearest whole unit; see [`format_date_relative_with`] for
/// an explicit rounding function.
pub fn format_date_relative(
    val: Option<DateTime<Utc>>,
    unit: RelativeUnit,
    locale: Option<Locale>,
) -> Option<String> {
    format_date_relative_at(val, Utc::now(), f64::round, unit, locale)
}

/// Format an instant relative to the current time with an explicit rounding
/// function (e.g. `f64::floor` to avoid "in 2 hours" at 90 minutes)
pub fn format_date_relative_with(
    val: Option<DateTime<Utc>>,
    round: fn(f64) -> f64,
    unit: RelativeUnit,
    locale: Option<Locale>,
) -> Option<String> {
    format_date_relative_at(val, Utc::now(), round, unit, locale)
}

/// Format an instant relative to an explicit reference instant
///
/// Past instants read "ago", future instants read "in". With
/// [`RelativeUnit::Auto`] the unit is the coarsest one whose threshold the
/// elapsed time stays under: seconds up to a minute, then minutes up to an
/// hour, hours up to a day, days up to 30 days, months up to 365 days, and
/// years beyond that.
pub fn format_date_relative_at(
    val: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    round: fn(f64) -> f64,
    unit: RelativeUnit,
    locale: Option<Locale>,
) -> Option<String> {
    let val = val?;
    let locale = config::resolve_locale(locale);

    let diff_in_secs = now.signed_duration_since(val).num_milliseconds() as f64 / 1_000.0;
    let abs_diff = diff_in_secs.abs();

    let unit = match unit {
        RelativeUnit::Auto => {
            if abs_diff < 60.0 {
                TimeUnit::Second
            } else if abs_diff < 3_600.0 {
                TimeUnit::Minute
            } else if abs_diff < 86_400.0 {
                TimeUnit::Hour
            } else if abs_diff < 86_400.0 * 30.0 {
                TimeUnit::Day
            } else if abs_diff < 86_400.0 * 365.0 {
                TimeUnit::Month
            } else {
                TimeUnit::Year
            }
        }
        RelativeUnit::Fixed(unit) => unit,
    };

    // Negate so that past times (positive diff) come out as "ago"
    let value = -(round(diff_in_secs / unit.divider()) as i64);
    Some(relative_phrase(value, unit, locale))
}

/// Long-style relative phrase with "auto" numeric wording
///
/// Phrase tables exist for English and German; other locales fall back to
/// English.
fn relative_phrase(value: i64, unit: TimeUnit, locale: Locale) -> String {
    match phrase_language(locale) {
        PhraseLanguage::German => german_phrase(value, unit),
        PhraseLanguage::English => english_phrase(value, unit),
    }
}

#[derive(Debug, Clone, Copy)]
enum PhraseLanguage {
    English,
    German,
}

/// Language component of a locale, for phrase table selection
///
/// Locale identifiers follow POSIX tags (`de_DE`), language first.
fn phrase_language(locale: Locale) -> PhraseLanguage {
    let tag = format!("{locale:?}");
    match tag.split('_').next().unwrap_or("") {
        "de" => PhraseLanguage::German,
        _ => PhraseLanguage::English,
    }
}

fn english_phrase(value: i64, unit: TimeUnit) -> String {
    match (unit, value) {
        (TimeUnit::Second, 0) => "now".to_string(),
        (TimeUnit::Minute, 0) => "this minute".to_string(),
        (TimeUnit::Hour, 0) => "this hour".to_string(),
        (TimeUnit::Day, -1) => "yesterday".to_string(),
        (TimeUnit::Day, 0) => "today".to_string(),
        (TimeUnit::Day, 1) => "tomorrow".to_string(),
        (TimeUnit::Month, -1) => "last month".to_string(),
        (TimeUnit::Month, 0) => "this month".to_string(),
        (TimeUnit::Month, 1) => "next month".to_string(),
        (TimeUnit::Year, -1) => "last year".to_string(),
        (TimeUnit::Year, 0) => "this year".to_string(),
        (TimeUnit::Year, 1) => "next year".to_string(),
        (_, v) if v < 0 => format!("{} {} ago", -v, unit_label(unit, -v)),
        (_, v) => format!("in {} {}", v, unit_label(unit, v)),
    }
}

fn unit_label(unit: TimeUnit, n: i64) -> String {
    if n == 1 {
        unit.name().to_string()
    } else {
        format!("{}s", unit.name())
    }
}

fn german_phrase(value: i64, unit: TimeUnit) -> String {
    match (unit, value) {
        (TimeUnit::Second, 0) => "jetzt".to_string(),
        (TimeUnit::Minute, 0) => "in dieser Minute".to_string(),
        (TimeUnit::Hour, 0) => "in dieser Stunde".to_string(),
        (TimeUnit::Day, -1) => "gestern".to_string(),
        (TimeUnit::Day, 0) => "heute".to_string(),
        (TimeUnit::Day, 1) => "morgen".to_string(),
        (TimeUnit::Month, -1) => "letzten Monat".to_string(),
        (TimeUnit::Month, 0) => "diesen Monat".to_string(),
        (TimeUnit::Month, 1) => "nächsten Monat".to_string(),
        (TimeUnit::Year, -1) => "letztes Jahr".to_string(),
        (TimeUnit::Year, 0) => "dieses Jahr".to_string(),
        (TimeUnit::Year, 1) => "nächstes Jahr".to_string(),
        (_, v) if v < 0 => format!("vor {} {}", -v, german_unit_label(unit, -v)),
        (_, v) => format!("in {} {}", v, german_unit_label(unit, v)),
    }
}

fn german_unit_label(unit: TimeUnit, n: i64) -> &'static str {
    match (unit, n) {
        (TimeUnit::Second, 1) => "Sekunde",
        (TimeUnit::Second, _) => "Sekunden",
        (TimeUnit::Minute, 1) => "Minute",
        (TimeUnit::Minute, _) => "Minuten",
        (TimeUnit::Hour, 1) => "Stunde",
        (TimeUnit::Hour, _) => "Stunden",
        (TimeUnit::Day, 1) => "Tag",
        (TimeUnit::Day, _) => "Tagen",
        (TimeUnit::Month, 1) => "Monat",
        (TimeUnit::Month, _) => "Monaten",
        (TimeUnit::Year, 1) => "Jahr",
        (TimeUnit::Year, _) => "Jahren",
    }
}

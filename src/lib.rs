//! Saberboard - date/time utilities for a leaderboard web service
//!
//! This library converts between external date representations (Unix
//! timestamps, source-site date strings, ISO strings) and `chrono` values,
//! formats dates for display in a locale-aware way, computes a color
//! representing score freshness by age, and computes ranking-batch
//! scheduling dates tied to a weekly cutoff.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Configuration file handling and the current display locale
//! * [`constants`] - Millisecond, timezone and tuning constants
//! * [`logger`] - Logging initialization
//! * [`utils`] - Date/time parsing, formatting, color and batch helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the most commonly used items for convenient access
pub use config::{current_locale, set_current_locale};
pub use constants::{DAY, HOUR, MINUTE, SECOND};
pub use utils::datetime::{date_from_string, date_from_unix, format_date, format_date_relative};

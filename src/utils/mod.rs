//! Utility modules for Saberboard
//!
//! This module contains the date/time helpers used throughout the
//! leaderboard: parsing external date representations, formatting dates for
//! display, mapping score age to a display color, and computing ranking
//! batch cutoffs.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date parsing, truncation, timezone midnights and formatting
//! - [`duration`] - The `"HhMmSs"` duration string codec
//! - [`color`] - Score-freshness grayscale color
//! - [`batch`] - Weekly ranking-batch boundary scheduling
//!
//! # Design Philosophy
//!
//! All utilities follow these principles:
//!
//! - **Pure functions** when possible - clock-dependent operations have an
//!   `_at` variant taking an explicit reference instant
//! - **Fail soft** - malformed input yields `None` or a sentinel value,
//!   never a panic
//! - **Fresh values per call** - inputs are never mutated

pub mod batch;
pub mod color;
pub mod datetime;
pub mod duration;

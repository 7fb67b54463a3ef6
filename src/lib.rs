// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Interval Module
//!
//! Database-compatible interval values: a text codec plus exact arithmetic
//! over the `{months, days, microseconds}` representation relational
//! databases use for their native interval type.
//!
//! # Core types
//!
//! - [`Interval`]: the value type; parse, combine, compare, render.
//! - [`IntervalFields`]: a plain `{months, days, microseconds}` snapshot.
//! - [`Unit`]: unit names understood by the verbose grammar.
//! - [`IntervalError`]: errors from the strict and conversion surfaces.
//!
//! # Input grammars
//!
//! [`Interval::parse`] tries these in order, first match wins:
//!
//! | Grammar | Example |
//! |---------|---------|
//! | negated ISO-8601 | `-P1Y2M3DT4H5M6S` |
//! | ISO-8601 | `P1Y2M3DT4H5M6.789S` |
//! | clock reading | `-04:05:06.5` |
//! | verbose (fallback) | `1 year -2 mons 3 days 04:05:06` |
//!
//! The verbose grammar never fails: unknown tokens are skipped. Use
//! [`Interval::parse_strict`] to have them reported instead.
//!
//! # Normalisation
//!
//! Values keep their fields as parsed. Comparison, arithmetic, display and
//! [`Interval::snapshot`] all see the normalised form, where whole days have
//! been folded out of the microseconds (see [`normalize`]). Months never fold
//! into days.
//!
//! ```
//! use pg_interval::{Interval, IntervalFields};
//!
//! let v = Interval::parse("1 day -12 hours");
//! assert_eq!(v.raw_fields(), IntervalFields::new(0, 1, -43_200_000_000));
//! assert_eq!(v.snapshot(), IntervalFields::new(0, 0, 43_200_000_000));
//! assert_eq!(v.to_string(), "12:00:00");
//! ```

mod accumulate;
mod error;
mod fields;
pub mod format;
mod interval;
mod parse;
mod units;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{IntervalError, IntervalResult};
pub use fields::{
    normalize, IntervalFields, DAYS_PER_MONTH, MONTHS_PER_YEAR, USEC_PER_DAY, USEC_PER_HOUR,
    USEC_PER_MINUTE, USEC_PER_SEC,
};
pub use interval::Interval;
pub use units::Unit;

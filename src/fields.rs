// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The three-field snapshot and the normaliser.
//!
//! An interval is stored as three independently signed integers:
//!
//! | Field | Holds |
//! |-------|-------|
//! | `months` | years × 12 + months |
//! | `days` | whole days |
//! | `microseconds` | hours, minutes, seconds and sub-second units |
//!
//! Months and days are never converted into each other: a month has no
//! fixed length. Only the microsecond field folds into days, and only when
//! [`normalize`] is applied.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Microseconds in one second.
pub const USEC_PER_SEC: i64 = 1_000_000;
/// Microseconds in one minute.
pub const USEC_PER_MINUTE: i64 = 60 * USEC_PER_SEC;
/// Microseconds in one hour.
pub const USEC_PER_HOUR: i64 = 60 * USEC_PER_MINUTE;
/// Microseconds in one day.
pub const USEC_PER_DAY: i64 = 24 * USEC_PER_HOUR;
/// Months in one year.
pub const MONTHS_PER_YEAR: i64 = 12;
/// Days a fractional month cascades into.
pub const DAYS_PER_MONTH: i64 = 30;

/// A `{months, days, microseconds}` triple.
///
/// Returned by [`Interval::snapshot`](crate::Interval::snapshot) (normalised)
/// and [`Interval::raw_fields`](crate::Interval::raw_fields) (as stored), and
/// accepted verbatim by [`Interval::from_fields`](crate::Interval::from_fields).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalFields {
    pub months: i64,
    pub days: i64,
    pub microseconds: i64,
}

impl IntervalFields {
    /// All-zero fields.
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(months: i64, days: i64, microseconds: i64) -> Self {
        Self {
            months,
            days,
            microseconds,
        }
    }

    /// `true` when every field is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.microseconds == 0
    }

    /// Returns the normalised form of these fields. See [`normalize`].
    #[inline]
    pub const fn normalized(self) -> Self {
        normalize(self)
    }

    /// `true` when the microsecond field is already within `[0, USEC_PER_DAY)`.
    #[inline]
    pub const fn is_normalized(&self) -> bool {
        self.microseconds >= 0 && self.microseconds < USEC_PER_DAY
    }
}

impl From<(i64, i64, i64)> for IntervalFields {
    #[inline]
    fn from((months, days, microseconds): (i64, i64, i64)) -> Self {
        Self::new(months, days, microseconds)
    }
}

/// Folds whole days out of the microsecond field.
///
/// Uses floor division, so the remaining microseconds always land in
/// `0..USEC_PER_DAY` and the carried day count absorbs the sign:
///
/// ```
/// use pg_interval::{normalize, IntervalFields, USEC_PER_HOUR};
///
/// let raw = IntervalFields::new(0, 1, -12 * USEC_PER_HOUR);
/// assert_eq!(normalize(raw), IntervalFields::new(0, 0, 12 * USEC_PER_HOUR));
/// ```
///
/// `months` is never touched.
#[inline]
pub const fn normalize(fields: IntervalFields) -> IntervalFields {
    let extra_days = fields.microseconds.div_euclid(USEC_PER_DAY);
    let remainder = fields.microseconds.rem_euclid(USEC_PER_DAY);
    IntervalFields {
        months: fields.months,
        days: fields.days + extra_days,
        microseconds: remainder,
    }
}

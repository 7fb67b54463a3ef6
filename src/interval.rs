// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`Interval`] value type.
//!
//! An `Interval` stores the raw `{months, days, microseconds}` produced by
//! parsing (or handed in verbatim) and never rewrites them. Every read that
//! compares, combines or renders a value goes through the normaliser first,
//! so `"1 day"` and `"24 hours"` stay distinct in storage yet compare equal.
//!
//! Arithmetic follows the same rule: operands are normalised, then combined
//! field by field. Months and days are never converted into each other.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use chrono::TimeDelta;
use qtty::{Days, Seconds};

use crate::accumulate::saturate;
use crate::error::{IntervalError, IntervalResult};
use crate::fields::{normalize, IntervalFields, USEC_PER_DAY, USEC_PER_SEC};
use crate::format::Canonical;
use crate::parse;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Interval
// ═══════════════════════════════════════════════════════════════════════════

/// A database-style interval: months, days and microseconds, each signed.
///
/// # Examples
///
/// ```
/// use pg_interval::{Interval, IntervalFields};
///
/// let a = Interval::parse("1 year 2 months");
/// let b = Interval::parse("P3DT4H");
/// let sum = a + b;
///
/// assert_eq!(sum.snapshot(), IntervalFields::new(14, 3, 4 * 3_600_000_000));
/// assert_eq!(sum.to_canonical_text(), "1 year 2 mons 3 days 04:00:00");
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Interval {
    raw: IntervalFields,
}

impl Interval {
    /// The zero interval.
    pub const ZERO: Self = Self::from_fields(IntervalFields::ZERO);

    // ── constructors ──────────────────────────────────────────────────

    /// Builds an interval from raw field values, stored as given.
    #[inline]
    pub const fn new(months: i64, days: i64, microseconds: i64) -> Self {
        Self::from_fields(IntervalFields::new(months, days, microseconds))
    }

    /// Builds an interval from a snapshot, stored as given.
    #[inline]
    pub const fn from_fields(raw: IntervalFields) -> Self {
        Self { raw }
    }

    /// Parses any supported text form.
    ///
    /// Never fails. Text that matches none of the anchored grammars is read
    /// as a verbose unit list, and tokens that list cannot use are skipped,
    /// so garbage yields [`Interval::ZERO`] or whatever part was readable.
    /// Use [`Interval::parse_strict`] to have such tokens reported.
    ///
    /// ```
    /// use pg_interval::Interval;
    ///
    /// assert_eq!(Interval::parse("1.5 hours").to_canonical_text(), "01:30:00");
    /// assert_eq!(Interval::parse("-P1D").to_canonical_text(), "-1 day");
    /// assert_eq!(Interval::parse("not an interval"), Interval::ZERO);
    /// ```
    pub fn parse(text: &str) -> Self {
        parse::parse(text)
    }

    /// Parses like [`Interval::parse`] but rejects verbose input with
    /// unusable tokens, a dangling number or sign, or no tokens at all.
    ///
    /// ```
    /// use pg_interval::{Interval, IntervalError};
    ///
    /// assert!(Interval::parse_strict("3 days 04:00:00").is_ok());
    /// assert_eq!(
    ///     Interval::parse_strict("3 dyas"),
    ///     Err(IntervalError::UnrecognizedToken { token: "dyas".into() })
    /// );
    /// ```
    pub fn parse_strict(text: &str) -> IntervalResult<Self> {
        parse::parse_strict(text)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The fields exactly as stored, before normalisation.
    #[inline]
    pub const fn raw_fields(&self) -> IntervalFields {
        self.raw
    }

    /// The normalised fields: whole days folded out of `microseconds`,
    /// leaving it in `0..USEC_PER_DAY`.
    #[inline]
    pub const fn snapshot(&self) -> IntervalFields {
        normalize(self.raw)
    }

    /// `true` when the value normalises to all zeros.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.snapshot().is_zero()
    }

    /// The canonical text form. Same as the [`Display`](fmt::Display) output.
    pub fn to_canonical_text(&self) -> String {
        self.to_string()
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Flips the sign of every field.
    #[inline]
    pub const fn negate(self) -> Self {
        Self::new(-self.raw.months, -self.raw.days, -self.raw.microseconds)
    }

    /// Fieldwise difference of the normalised operands.
    pub fn subtract(self, other: Self) -> Self {
        let (a, b) = (self.snapshot(), other.snapshot());
        Self::new(
            a.months - b.months,
            a.days - b.days,
            a.microseconds - b.microseconds,
        )
    }

    /// Scales every normalised field by `factor`, rounding each product
    /// half away from zero on its own.
    ///
    /// Products are not normalised afterwards, so half a month stays in
    /// the month field:
    ///
    /// ```
    /// use pg_interval::{Interval, IntervalFields};
    ///
    /// let v = Interval::parse("3 mons 3 days 03:00:00").multiply(0.5);
    /// assert_eq!(v.raw_fields(), IntervalFields::new(2, 2, 5_400_000_000));
    /// ```
    pub fn multiply(self, factor: f64) -> Self {
        let n = self.snapshot();
        Self::new(
            scale_field(n.months, factor),
            scale_field(n.days, factor),
            scale_field(n.microseconds, factor),
        )
    }
}

/// `value × factor`, exact for integral factors, rounded otherwise.
fn scale_field(value: i64, factor: f64) -> i64 {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    if factor.fract() == 0.0 && factor.abs() <= EXACT_LIMIT {
        value * factor as i64
    } else {
        (value as f64 * factor).round() as i64
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Equality ──────────────────────────────────────────────────────────────

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.snapshot().hash(state);
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Canonical(self.snapshot()), f)
    }
}

/// Strict parsing; see [`Interval::parse_strict`].
impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl From<&str> for Interval {
    #[inline]
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ZERO
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.snapshot(), rhs.snapshot());
        Self::new(
            a.months + b.months,
            a.days + b.days,
            a.microseconds + b.microseconds,
        )
    }
}

impl AddAssign for Interval {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Interval {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl SubAssign for Interval {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl Mul<f64> for Interval {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Neg for Interval {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// ── From/Into fields ──────────────────────────────────────────────────────

impl From<IntervalFields> for Interval {
    #[inline]
    fn from(fields: IntervalFields) -> Self {
        Self::from_fields(fields)
    }
}

impl From<Interval> for IntervalFields {
    #[inline]
    fn from(interval: Interval) -> Self {
        interval.snapshot()
    }
}

// ── chrono ────────────────────────────────────────────────────────────────

/// Puts the whole delta into the microsecond field.
impl TryFrom<TimeDelta> for Interval {
    type Error = IntervalError;

    fn try_from(delta: TimeDelta) -> Result<Self, Self::Error> {
        let microseconds = delta.num_microseconds().ok_or(IntervalError::OutOfRange)?;
        Ok(Self::new(0, 0, microseconds))
    }
}

/// Counts a day as 24 hours. Fails when months are present.
impl TryFrom<Interval> for TimeDelta {
    type Error = IntervalError;

    fn try_from(interval: Interval) -> Result<Self, Self::Error> {
        let n = interval.snapshot();
        if n.months != 0 {
            return Err(IntervalError::NonZeroMonths { months: n.months });
        }
        TimeDelta::try_days(n.days)
            .and_then(|days| days.checked_add(&TimeDelta::microseconds(n.microseconds)))
            .ok_or(IntervalError::OutOfRange)
    }
}

// ── qtty ──────────────────────────────────────────────────────────────────

/// Whole days go to the day field, the fraction to microseconds.
impl From<Days> for Interval {
    fn from(days: Days) -> Self {
        let value = days.value();
        let whole = value.trunc();
        let microseconds = ((value - whole) * USEC_PER_DAY as f64).round();
        Self::new(0, saturate(whole as i128), saturate(microseconds as i128))
    }
}

impl From<Seconds> for Interval {
    fn from(seconds: Seconds) -> Self {
        let microseconds = (seconds.value() * USEC_PER_SEC as f64).round();
        Self::new(0, 0, saturate(microseconds as i128))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.snapshot().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IntervalFields::deserialize(deserializer).map(Self::from_fields)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

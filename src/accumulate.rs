// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Exact decimal magnitudes and the field accumulator shared by every grammar.
//!
//! Parsed numbers are never turned into floats. A [`Magnitude`] keeps the
//! decimal digits as integers, and the [`Accumulator`] cascades any
//! fractional remainder down the field hierarchy:
//!
//! ```text
//! months ──×30──▶ days ──×86 400 000 000──▶ microseconds (rounded)
//! ```
//!
//! Rounding happens once, at the microsecond level, half away from zero.
//! Accumulation saturates at the `i64` bounds instead of panicking.

use crate::fields::{
    IntervalFields, DAYS_PER_MONTH, USEC_PER_DAY, USEC_PER_HOUR, USEC_PER_MINUTE, USEC_PER_SEC,
};
use crate::units::{FieldScale, Unit};

/// Fraction digits beyond this are dropped; they cannot reach a microsecond.
const MAX_SCALE: u32 = 18;

// ═══════════════════════════════════════════════════════════════════════════
// Magnitude
// ═══════════════════════════════════════════════════════════════════════════

/// A signed decimal `±(whole + frac / 10^scale)`, held exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Magnitude {
    negative: bool,
    whole: u128,
    frac: u128,
    scale: u32,
}

impl Magnitude {
    pub(crate) const ZERO: Magnitude = Magnitude::from_int(0);

    pub(crate) const fn from_int(value: i64) -> Self {
        Self {
            negative: value < 0,
            whole: value.unsigned_abs() as u128,
            frac: 0,
            scale: 0,
        }
    }

    /// Parses `[+-]digits[.digits]`, `[+-].digits` or `[+-]digits.`.
    ///
    /// Returns `None` for anything else, including an integer part that does
    /// not fit in 64 bits.
    pub(crate) fn parse(text: &str) -> Option<Self> {
        let (negative, body) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits) || !all_digits(frac_digits) {
            return None;
        }

        let whole = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse::<u64>().ok()?
        };
        let kept = &frac_digits[..frac_digits.len().min(MAX_SCALE as usize)];
        let frac = if kept.is_empty() {
            0
        } else {
            kept.parse::<u64>().ok()?
        };

        Some(Self {
            negative,
            whole: whole as u128,
            frac: frac as u128,
            scale: kept.len() as u32,
        })
    }

    /// Same magnitude, sign flipped.
    pub(crate) const fn negated(self) -> Self {
        Self {
            negative: !self.negative,
            ..self
        }
    }

    /// Exact product with a unit factor; the fraction carries into `whole`.
    pub(crate) fn times(self, factor: u64) -> Self {
        let den = 10u128.pow(self.scale);
        let frac = self.frac * factor as u128;
        Self {
            whole: self.whole * factor as u128 + frac / den,
            frac: frac % den,
            ..self
        }
    }

    /// `(whole, numerator, denominator)` with both parts carrying the sign.
    fn parts(&self) -> (i128, i128, i128) {
        let sign = if self.negative { -1 } else { 1 };
        (
            sign * self.whole as i128,
            sign * self.frac as i128,
            10i128.pow(self.scale),
        )
    }
}

/// Integer division rounding half away from zero.
pub(crate) fn round_half_away(num: i128, den: i128) -> i128 {
    let quotient = num / den;
    let remainder = num % den;
    if 2 * remainder.abs() >= den.abs() {
        quotient + num.signum() * den.signum()
    } else {
        quotient
    }
}

pub(crate) fn saturate(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

// ═══════════════════════════════════════════════════════════════════════════
// Accumulator
// ═══════════════════════════════════════════════════════════════════════════

/// Mutable field sums built up while a grammar walks its input.
///
/// Nothing is normalised here; `microseconds` may run past a day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Accumulator {
    months: i64,
    days: i64,
    microseconds: i64,
}

impl Accumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fields(&self) -> IntervalFields {
        IntervalFields::new(self.months, self.days, self.microseconds)
    }

    /// Whole months go to `months`; a fraction cascades into days.
    pub(crate) fn add_months(&mut self, n: Magnitude) {
        let (whole, num, den) = n.parts();
        self.months = saturate(self.months as i128 + whole);
        if num != 0 {
            self.add_day_fraction(num * DAYS_PER_MONTH as i128, den);
        }
    }

    /// Whole days go to `days`; a fraction cascades into microseconds.
    pub(crate) fn add_days(&mut self, n: Magnitude) {
        let (whole, num, den) = n.parts();
        self.days = saturate(self.days as i128 + whole);
        if num != 0 {
            self.add_microsecond_fraction(num * USEC_PER_DAY as i128, den);
        }
    }

    /// Adds microseconds, rounding a fraction half away from zero.
    pub(crate) fn add_microseconds(&mut self, n: Magnitude) {
        let (whole, num, den) = n.parts();
        self.microseconds = saturate(self.microseconds as i128 + whole);
        self.add_microsecond_fraction(num, den);
    }

    /// Converts a clock reading to microseconds and adds it.
    pub(crate) fn add_time(&mut self, hours: Magnitude, minutes: Magnitude, seconds: Magnitude) {
        self.add_microseconds(hours.times(USEC_PER_HOUR as u64));
        self.add_microseconds(minutes.times(USEC_PER_MINUTE as u64));
        self.add_microseconds(seconds.times(USEC_PER_SEC as u64));
    }

    /// Adds `n` of `unit` into the field the unit maps to.
    pub(crate) fn add_unit(&mut self, unit: Unit, n: Magnitude) {
        match unit.scale() {
            FieldScale::Months(k) => self.add_months(n.times(k)),
            FieldScale::Days(k) => self.add_days(n.times(k)),
            FieldScale::Microseconds(k) => self.add_microseconds(n.times(k)),
        }
    }

    // `num / den` of a day, with `|num| < den * DAYS_PER_MONTH`.
    fn add_day_fraction(&mut self, num: i128, den: i128) {
        self.days = saturate(self.days as i128 + num / den);
        let rem = num % den;
        if rem != 0 {
            self.add_microsecond_fraction(rem * USEC_PER_DAY as i128, den);
        }
    }

    fn add_microsecond_fraction(&mut self, num: i128, den: i128) {
        self.microseconds = saturate(self.microseconds as i128 + round_half_away(num, den));
    }
}

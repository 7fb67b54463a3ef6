// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical text output.
//!
//! A normalised value renders as up to four space-separated parts, each
//! present only when non-zero:
//!
//! ```text
//! 1 year 2 mons 3 days 04:05:06.789000
//! ```
//!
//! The clock part is also forced when it would otherwise be the only
//! thing missing from an all-zero value, giving `00:00:00`.

use std::fmt;

use crate::fields::{IntervalFields, MONTHS_PER_YEAR, USEC_PER_HOUR, USEC_PER_MINUTE, USEC_PER_SEC};

/// [`Display`](fmt::Display) adapter writing fields in canonical form.
///
/// The fields are written as given; callers pass a normalised snapshot.
#[derive(Debug, Copy, Clone)]
pub struct Canonical(pub IntervalFields);

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let IntervalFields {
            months,
            days,
            microseconds,
        } = self.0;
        let mut out = Parts::new(f);

        // Truncating division: both pieces carry the sign of `months`.
        let years = months / MONTHS_PER_YEAR;
        let months = months % MONTHS_PER_YEAR;
        if years != 0 {
            out.counted(years, "year")?;
        }
        if months != 0 {
            out.counted(months, "mon")?;
        }
        if days != 0 {
            out.counted(days, "day")?;
        }
        if microseconds != 0 || out.is_empty() {
            out.clock(microseconds)?;
        }
        Ok(())
    }
}

/// Writes parts with a single space between them.
struct Parts<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    written: usize,
}

impl<'a, 'b> Parts<'a, 'b> {
    fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, written: 0 }
    }

    fn is_empty(&self) -> bool {
        self.written == 0
    }

    fn separator(&mut self) -> fmt::Result {
        self.written += 1;
        if self.written > 1 {
            self.f.write_str(" ")?;
        }
        Ok(())
    }

    fn counted(&mut self, n: i64, unit: &str) -> fmt::Result {
        self.separator()?;
        let plural = if n.unsigned_abs() == 1 { "" } else { "s" };
        write!(self.f, "{n} {unit}{plural}")
    }

    fn clock(&mut self, microseconds: i64) -> fmt::Result {
        self.separator()?;
        let sign = if microseconds < 0 { "-" } else { "" };
        let total = microseconds.unsigned_abs();
        let hours = total / USEC_PER_HOUR as u64;
        let rest = total % USEC_PER_HOUR as u64;
        let minutes = rest / USEC_PER_MINUTE as u64;
        let rest = rest % USEC_PER_MINUTE as u64;
        let seconds = rest / USEC_PER_SEC as u64;
        let fraction = rest % USEC_PER_SEC as u64;

        write!(self.f, "{sign}{hours:02}:{minutes:02}:{seconds:02}")?;
        if fraction != 0 {
            write!(self.f, ".{fraction:06}")?;
        }
        Ok(())
    }
}

/// Renders fields in canonical form. See [`Canonical`].
pub fn canonical_text(fields: IntervalFields) -> String {
    Canonical(fields).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::USEC_PER_DAY;

    fn text(months: i64, days: i64, microseconds: i64) -> String {
        canonical_text(IntervalFields::new(months, days, microseconds))
    }

    #[test]
    fn test_zero_is_clock() {
        assert_eq!(text(0, 0, 0), "00:00:00");
    }

    #[test]
    fn test_full_value() {
        assert_eq!(
            text(14, 3, 14_706_789_000),
            "1 year 2 mons 3 days 04:05:06.789000"
        );
    }

    #[test]
    fn test_plurals() {
        assert_eq!(text(1, 0, 0), "1 mon");
        assert_eq!(text(2, 0, 0), "2 mons");
        assert_eq!(text(24, 1, 0), "2 years 1 day");
        assert_eq!(text(-12, -1, 0), "-1 year -1 day");
        assert_eq!(text(-13, 0, 0), "-1 year -1 mon");
    }

    #[test]
    fn test_month_split_follows_total_sign() {
        assert_eq!(text(-14, 0, 0), "-1 year -2 mons");
        assert_eq!(text(-11, 0, 0), "-11 mons");
        assert_eq!(text(28, 0, 0), "2 years 4 mons");
    }

    #[test]
    fn test_clock_omitted_when_zero_after_other_parts() {
        assert_eq!(text(0, 3, 0), "3 days");
        assert_eq!(text(12, 0, 0), "1 year");
    }

    #[test]
    fn test_clock_only() {
        assert_eq!(text(0, 0, 5_400_000_000), "01:30:00");
        assert_eq!(text(0, 0, USEC_PER_DAY - 1), "23:59:59.999999");
    }

    #[test]
    fn test_fraction_is_fixed_width() {
        assert_eq!(text(0, 0, 123_000), "00:00:00.123000");
        assert_eq!(text(0, 0, 1), "00:00:00.000001");
        assert_eq!(text(0, 0, 1_500_000), "00:00:01.500000");
    }

    #[test]
    fn test_negative_clock() {
        assert_eq!(text(0, 0, -3_723_000_000), "-01:02:03");
        assert_eq!(text(1, 0, -82_800_000_000), "1 mon -23:00:00");
    }

    #[test]
    fn test_hours_past_a_day_are_not_folded() {
        assert_eq!(text(0, 0, 30 * USEC_PER_HOUR), "30:00:00");
    }

    #[test]
    fn test_display_adapter() {
        let f = IntervalFields::new(0, -1, 3_600_000_000);
        assert_eq!(format!("{}", Canonical(f)), "-1 day 01:00:00");
    }
}

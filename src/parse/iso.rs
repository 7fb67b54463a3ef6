// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO-8601 durations: `P[nY][nM][nW][nD][T[nH][nM][n[.f]S]]`.
//!
//! Components are unsigned; only the seconds may carry a fraction. A sign
//! is introduced solely by the `-P` prefix handled in [`parse_negated`].

use std::sync::OnceLock;

use regex::Regex;

use crate::accumulate::{Accumulator, Magnitude};
use crate::units::Unit;
use crate::Interval;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$",
        )
        .expect("ISO-8601 duration pattern is valid")
    })
}

/// Parses a duration that starts with `P`. Declines anything else.
pub(crate) fn parse(text: &str) -> Option<Interval> {
    let caps = pattern().captures(text)?;
    let component = |i: usize| -> Option<Magnitude> {
        match caps.get(i) {
            Some(m) => Magnitude::parse(m.as_str()),
            None => Some(Magnitude::ZERO),
        }
    };

    let years = component(1)?;
    let months = component(2)?;
    let weeks = component(3)?;
    let days = component(4)?;
    let (hours, minutes, seconds) = (component(5)?, component(6)?, component(7)?);

    let mut acc = Accumulator::new();
    acc.add_unit(Unit::Year, years);
    acc.add_months(months);
    acc.add_unit(Unit::Week, weeks);
    acc.add_days(days);
    acc.add_time(hours, minutes, seconds);
    Some(Interval::from_fields(acc.fields()))
}

/// Parses `-P...`: the ISO duration after the dash, with every field negated.
pub(crate) fn parse_negated(text: &str) -> Option<Interval> {
    let rest = text.strip_prefix('-')?;
    if !rest.starts_with('P') {
        return None;
    }
    parse(rest).map(Interval::negate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntervalFields;

    fn fields(text: &str) -> IntervalFields {
        parse(text)
            .unwrap_or_else(|| panic!("{text:?} should be ISO-8601"))
            .raw_fields()
    }

    #[test]
    fn test_full_duration() {
        assert_eq!(
            fields("P1Y2M3DT4H5M6.789S"),
            IntervalFields::new(14, 3, 14_706_789_000)
        );
    }

    #[test]
    fn test_bare_p_is_zero() {
        assert_eq!(fields("P"), IntervalFields::ZERO);
        assert_eq!(fields("PT"), IntervalFields::ZERO);
    }

    #[test]
    fn test_time_only() {
        assert_eq!(fields("PT36H"), IntervalFields::new(0, 0, 129_600_000_000));
        assert_eq!(fields("PT0.5S"), IntervalFields::new(0, 0, 500_000));
    }

    #[test]
    fn test_minutes_vs_months() {
        assert_eq!(fields("P2M"), IntervalFields::new(2, 0, 0));
        assert_eq!(fields("PT2M"), IntervalFields::new(0, 0, 120_000_000));
    }

    #[test]
    fn test_weeks() {
        assert_eq!(fields("P2W1D"), IntervalFields::new(0, 15, 0));
    }

    #[test]
    fn test_declines_non_iso() {
        for text in ["", "1 day", "P-1D", "P1H", "P1.5D", "p1d", "P1D ", "T1H", "P1S"] {
            assert!(parse(text).is_none(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_negated() {
        assert_eq!(
            parse_negated("-P1Y2M3DT4H5M6S").map(|v| v.raw_fields()),
            Some(IntervalFields::new(-14, -3, -14_706_000_000))
        );
        assert!(parse_negated("P1D").is_none());
        assert!(parse_negated("-PX").is_none());
        assert!(parse_negated("-1 day").is_none());
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit names accepted by the verbose grammar.
//!
//! Every unit folds into exactly one of the three stored fields:
//!
//! | Unit | Field | Factor |
//! |------|-------|--------|
//! | [`Unit::Millennium`] | months | 12 000 |
//! | [`Unit::Century`] | months | 1 200 |
//! | [`Unit::Decade`] | months | 120 |
//! | [`Unit::Year`] | months | 12 |
//! | [`Unit::Month`] | months | 1 |
//! | [`Unit::Week`] | days | 7 |
//! | [`Unit::Day`] | days | 1 |
//! | [`Unit::Hour`] | microseconds | 3 600 000 000 |
//! | [`Unit::Minute`] | microseconds | 60 000 000 |
//! | [`Unit::Second`] | microseconds | 1 000 000 |
//! | [`Unit::Millisecond`] | microseconds | 1 000 |
//! | [`Unit::Microsecond`] | microseconds | 1 |

use crate::fields::{MONTHS_PER_YEAR, USEC_PER_HOUR, USEC_PER_MINUTE, USEC_PER_SEC};

/// A unit of the verbose grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Millennium,
    Century,
    Decade,
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

/// Which stored field a unit accumulates into, and with what factor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum FieldScale {
    Months(u64),
    Days(u64),
    Microseconds(u64),
}

// Singular spellings only; a trailing `s` is stripped before a second lookup.
const ALIASES: &[(&str, Unit)] = &[
    ("millennium", Unit::Millennium),
    ("millennia", Unit::Millennium),
    ("mil", Unit::Millennium),
    ("century", Unit::Century),
    ("centuries", Unit::Century),
    ("cent", Unit::Century),
    ("c", Unit::Century),
    ("decade", Unit::Decade),
    ("dec", Unit::Decade),
    ("year", Unit::Year),
    ("yr", Unit::Year),
    ("y", Unit::Year),
    ("month", Unit::Month),
    ("mon", Unit::Month),
    ("week", Unit::Week),
    ("w", Unit::Week),
    ("day", Unit::Day),
    ("d", Unit::Day),
    ("hour", Unit::Hour),
    ("hr", Unit::Hour),
    ("h", Unit::Hour),
    ("minute", Unit::Minute),
    ("min", Unit::Minute),
    ("m", Unit::Minute),
    ("second", Unit::Second),
    ("sec", Unit::Second),
    ("s", Unit::Second),
    ("millisecond", Unit::Millisecond),
    ("msec", Unit::Millisecond),
    ("ms", Unit::Millisecond),
    ("microsecond", Unit::Microsecond),
    ("usec", Unit::Microsecond),
    ("us", Unit::Microsecond),
];

impl Unit {
    /// Resolves a unit name, ignoring ASCII case and one trailing `s`.
    ///
    /// ```
    /// use pg_interval::Unit;
    ///
    /// assert_eq!(Unit::from_name("Hours"), Some(Unit::Hour));
    /// assert_eq!(Unit::from_name("mons"), Some(Unit::Month));
    /// assert_eq!(Unit::from_name("ms"), Some(Unit::Millisecond));
    /// assert_eq!(Unit::from_name("fortnight"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Unit> {
        if name.is_empty() || !name.is_ascii() {
            return None;
        }
        let lower = name.to_ascii_lowercase();
        lookup(&lower).or_else(|| lower.strip_suffix('s').and_then(lookup))
    }

    /// Canonical singular name.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Millennium => "millennium",
            Unit::Century => "century",
            Unit::Decade => "decade",
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
        }
    }

    pub(crate) const fn scale(self) -> FieldScale {
        match self {
            Unit::Millennium => FieldScale::Months(1000 * MONTHS_PER_YEAR as u64),
            Unit::Century => FieldScale::Months(100 * MONTHS_PER_YEAR as u64),
            Unit::Decade => FieldScale::Months(10 * MONTHS_PER_YEAR as u64),
            Unit::Year => FieldScale::Months(MONTHS_PER_YEAR as u64),
            Unit::Month => FieldScale::Months(1),
            Unit::Week => FieldScale::Days(7),
            Unit::Day => FieldScale::Days(1),
            Unit::Hour => FieldScale::Microseconds(USEC_PER_HOUR as u64),
            Unit::Minute => FieldScale::Microseconds(USEC_PER_MINUTE as u64),
            Unit::Second => FieldScale::Microseconds(USEC_PER_SEC as u64),
            Unit::Millisecond => FieldScale::Microseconds(1_000),
            Unit::Microsecond => FieldScale::Microseconds(1),
        }
    }
}

fn lookup(name: &str) -> Option<Unit> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|&(_, unit)| unit)
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_forms() {
        for (name, unit) in [
            ("year", Unit::Year),
            ("years", Unit::Year),
            ("yrs", Unit::Year),
            ("month", Unit::Month),
            ("mons", Unit::Month),
            ("days", Unit::Day),
            ("hrs", Unit::Hour),
            ("mins", Unit::Minute),
            ("secs", Unit::Second),
            ("msecs", Unit::Millisecond),
            ("usecs", Unit::Microsecond),
            ("microseconds", Unit::Microsecond),
            ("weeks", Unit::Week),
        ] {
            assert_eq!(Unit::from_name(name), Some(unit), "alias {name}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Unit::from_name("YEARS"), Some(Unit::Year));
        assert_eq!(Unit::from_name("MiNuTe"), Some(Unit::Minute));
    }

    #[test]
    fn test_short_forms_are_not_stripped_first() {
        // "ms" must not resolve to minute via "m" + "s".
        assert_eq!(Unit::from_name("ms"), Some(Unit::Millisecond));
        assert_eq!(Unit::from_name("us"), Some(Unit::Microsecond));
        assert_eq!(Unit::from_name("s"), Some(Unit::Second));
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(Unit::from_name("centuries"), Some(Unit::Century));
        assert_eq!(Unit::from_name("millennia"), Some(Unit::Millennium));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(Unit::from_name(""), None);
        assert_eq!(Unit::from_name("yaers"), None);
        assert_eq!(Unit::from_name("hh"), None);
        assert_eq!(Unit::from_name("día"), None);
    }

    #[test]
    fn test_scales() {
        assert_eq!(Unit::Year.scale(), FieldScale::Months(12));
        assert_eq!(Unit::Week.scale(), FieldScale::Days(7));
        assert_eq!(Unit::Hour.scale(), FieldScale::Microseconds(3_600_000_000));
    }
}

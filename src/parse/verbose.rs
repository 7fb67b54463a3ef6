// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The verbose unit-list grammar: `1 year -2 mons 3 days 04:05:06`.
//!
//! Tokens are scanned left to right against a small state machine:
//!
//! | Token | Effect |
//! |-------|--------|
//! | number | becomes the pending magnitude |
//! | `-` | flips the sign of the next number or clock |
//! | `+` | accepted, no effect |
//! | unit name | consumes the pending magnitude |
//! | clock reading | adds a time; a pending bare number counts as days |
//! | `10s`, `-2mons` | split into number and unit |
//!
//! Anything else is skipped. The scan itself never fails; skipped tokens are
//! recorded so the strict entry point can report them.

use crate::accumulate::{Accumulator, Magnitude};
use crate::error::{IntervalError, IntervalResult};
use crate::parse::clock::ClockReading;
use crate::units::Unit;
use crate::Interval;

/// Outcome of one scan.
#[derive(Debug, Default)]
pub(crate) struct Scan<'a> {
    acc: Accumulator,
    tokens: usize,
    skipped: Vec<&'a str>,
    pending: Option<(Magnitude, &'a str)>,
    negate_next: Option<&'a str>,
}

impl<'a> Scan<'a> {
    pub(crate) fn run(text: &'a str) -> Self {
        let mut scan = Scan::default();
        for token in text.split_whitespace() {
            scan.tokens += 1;
            scan.feed(token);
        }
        scan
    }

    /// The accumulated value, ignoring whatever was skipped.
    pub(crate) fn lenient(&self) -> Interval {
        Interval::from_fields(self.acc.fields())
    }

    /// The accumulated value, or the first thing the scan had to ignore.
    pub(crate) fn strict(&self) -> IntervalResult<Interval> {
        if self.tokens == 0 {
            return Err(IntervalError::Empty);
        }
        if let Some(token) = self.skipped.first() {
            return Err(IntervalError::UnrecognizedToken {
                token: (*token).to_owned(),
            });
        }
        if let Some((_, text)) = self.pending {
            return Err(IntervalError::MissingUnit {
                magnitude: text.to_owned(),
            });
        }
        if let Some(sign) = self.negate_next {
            return Err(IntervalError::UnrecognizedToken {
                token: sign.to_owned(),
            });
        }
        Ok(self.lenient())
    }

    fn feed(&mut self, token: &'a str) {
        match token {
            "-" => {
                self.drop_pending();
                self.negate_next = match self.negate_next {
                    Some(_) => None,
                    None => Some(token),
                };
                return;
            }
            "+" => {
                self.drop_pending();
                return;
            }
            _ => {}
        }

        if let Some(magnitude) = Magnitude::parse(token) {
            self.drop_pending();
            let magnitude = match self.negate_next.take() {
                Some(_) => magnitude.negated(),
                None => magnitude,
            };
            self.pending = Some((magnitude, token));
        } else if let Some(unit) = Unit::from_name(token) {
            match self.pending.take() {
                Some((magnitude, _)) => self.acc.add_unit(unit, magnitude),
                None => self.skip(token),
            }
        } else if let Some(reading) = ClockReading::read(token) {
            if let Some((days, _)) = self.pending.take() {
                self.acc.add_unit(Unit::Day, days);
            }
            let reading = match self.negate_next.take() {
                Some(_) => reading.negated(),
                None => reading,
            };
            reading.accumulate(&mut self.acc);
        } else if let Some((number, unit)) = split_glued(token) {
            self.feed(number);
            self.feed(unit);
        } else {
            self.skip(token);
        }
    }

    fn drop_pending(&mut self) {
        if let Some((_, text)) = self.pending.take() {
            self.skip(text);
        }
    }

    fn skip(&mut self, token: &'a str) {
        tracing::debug!(token, "skipping unrecognized interval token");
        self.skipped.push(token);
    }
}

/// Splits `10s` into `("10", "s")` when both halves are meaningful.
fn split_glued(token: &str) -> Option<(&str, &str)> {
    let at = token.find(|c: char| c.is_ascii_alphabetic())?;
    let (number, unit) = token.split_at(at);
    if number.is_empty() {
        return None;
    }
    Magnitude::parse(number)?;
    Unit::from_name(unit)?;
    Some((number, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{USEC_PER_HOUR, USEC_PER_MINUTE, USEC_PER_SEC};
    use crate::IntervalFields;

    fn fields(text: &str) -> IntervalFields {
        Scan::run(text).lenient().raw_fields()
    }

    #[test]
    fn test_units_accumulate() {
        assert_eq!(
            fields("1 year 2 months 3 days"),
            IntervalFields::new(14, 3, 0)
        );
        assert_eq!(
            fields("4 hours 5 minutes 6 seconds 7 milliseconds 8 microseconds"),
            IntervalFields::new(
                0,
                0,
                4 * USEC_PER_HOUR + 5 * USEC_PER_MINUTE + 6 * USEC_PER_SEC + 7_008
            )
        );
    }

    #[test]
    fn test_per_token_signs() {
        assert_eq!(fields("1 year -2 months").months, 10);
        assert_eq!(
            fields("1 day -12 hours"),
            IntervalFields::new(0, 1, -12 * USEC_PER_HOUR)
        );
    }

    #[test]
    fn test_standalone_minus() {
        assert_eq!(fields("1 year - 2 months").months, 10);
        assert_eq!(fields("- 3 days").days, -3);
        assert_eq!(fields("- -3 days").days, 3);
        assert_eq!(fields("- - 3 days").days, 3);
        assert_eq!(fields("- + 3 days").days, -3);
    }

    #[test]
    fn test_plus_sign() {
        assert_eq!(fields("+3 days +2 hours"), IntervalFields::new(0, 3, 2 * USEC_PER_HOUR));
    }

    #[test]
    fn test_units_are_case_insensitive() {
        assert_eq!(fields("2 YEARS 1 Mon"), IntervalFields::new(25, 0, 0));
    }

    #[test]
    fn test_canonical_text_reads_back() {
        assert_eq!(
            fields("-1 years -2 mons 3 days 04:05:06.789000"),
            IntervalFields::new(-14, 3, 14_706_789_000)
        );
    }

    #[test]
    fn test_number_before_clock_is_days() {
        assert_eq!(
            fields("1 02:00:00"),
            IntervalFields::new(0, 1, 2 * USEC_PER_HOUR)
        );
    }

    #[test]
    fn test_minus_before_clock() {
        assert_eq!(fields("- 01:00:00").microseconds, -USEC_PER_HOUR);
        assert_eq!(fields("-01:00:00 1 day"), IntervalFields::new(0, 1, -USEC_PER_HOUR));
    }

    #[test]
    fn test_glued_tokens() {
        assert_eq!(fields("10s"), IntervalFields::new(0, 0, 10 * USEC_PER_SEC));
        assert_eq!(fields("-2mons 1.5h"), IntervalFields::new(-2, 0, 90 * USEC_PER_MINUTE));
    }

    #[test]
    fn test_fractional_units() {
        assert_eq!(fields("1.5 hours").microseconds, 5_400_000_000);
        assert_eq!(fields("0.5 days"), IntervalFields::new(0, 0, 12 * USEC_PER_HOUR));
        assert_eq!(fields("2 weeks"), IntervalFields::new(0, 14, 0));
    }

    // Known leniency: a misspelt unit silently drops its component.
    #[test]
    fn test_typo_is_silently_dropped() {
        assert_eq!(fields("1 yaer 2 days"), IntervalFields::new(0, 2, 0));
        let scan = Scan::run("1 yaer 2 days");
        assert_eq!(
            scan.strict(),
            Err(IntervalError::UnrecognizedToken {
                token: "yaer".into()
            })
        );
    }

    #[test]
    fn test_garbage_yields_zero() {
        for text in [
            "",
            "hello world",
            "::::",
            "P1X",
            "days days days",
            "- - -",
            "1e9 years",
            "∞ days",
        ] {
            assert_eq!(fields(text), IntervalFields::ZERO, "input {text:?}");
        }
    }

    #[test]
    fn test_partial_accumulation() {
        assert_eq!(
            fields("3 days and 4 bananas 2 hours"),
            IntervalFields::new(0, 3, 2 * USEC_PER_HOUR)
        );
    }

    #[test]
    fn test_strict_errors() {
        assert_eq!(Scan::run("   ").strict(), Err(IntervalError::Empty));
        assert_eq!(
            Scan::run("3 days 4").strict(),
            Err(IntervalError::MissingUnit {
                magnitude: "4".into()
            })
        );
        assert_eq!(
            Scan::run("days").strict(),
            Err(IntervalError::UnrecognizedToken {
                token: "days".into()
            })
        );
        assert_eq!(
            Scan::run("1 day -").strict(),
            Err(IntervalError::UnrecognizedToken { token: "-".into() })
        );
        assert!(Scan::run("1 year - 2 months 00:00:01").strict().is_ok());
    }
}

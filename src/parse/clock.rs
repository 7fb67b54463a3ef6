// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Signed clock readings: `[-]H+:MM:SS[.f+]`.

use std::sync::OnceLock;

use regex::Regex;

use crate::accumulate::{Accumulator, Magnitude};
use crate::Interval;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(-)?(\d+):(\d{2}):(\d{2}(?:\.\d+)?)$").expect("clock pattern is valid")
    })
}

/// Hours, minutes and seconds of one clock reading, sign already applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ClockReading {
    hours: Magnitude,
    minutes: Magnitude,
    seconds: Magnitude,
}

impl ClockReading {
    /// Reads a whole token as a clock. A leading `-` covers all three parts.
    pub(crate) fn read(text: &str) -> Option<Self> {
        let caps = pattern().captures(text)?;
        let negative = caps.get(1).is_some();
        let part = |i: usize| -> Option<Magnitude> {
            let magnitude = Magnitude::parse(caps.get(i)?.as_str())?;
            Some(if negative {
                magnitude.negated()
            } else {
                magnitude
            })
        };
        Some(Self {
            hours: part(2)?,
            minutes: part(3)?,
            seconds: part(4)?,
        })
    }

    pub(crate) fn negated(self) -> Self {
        Self {
            hours: self.hours.negated(),
            minutes: self.minutes.negated(),
            seconds: self.seconds.negated(),
        }
    }

    pub(crate) fn accumulate(self, acc: &mut Accumulator) {
        acc.add_time(self.hours, self.minutes, self.seconds);
    }
}

/// Parses a string that is exactly one clock reading.
pub(crate) fn parse(text: &str) -> Option<Interval> {
    let reading = ClockReading::read(text)?;
    let mut acc = Accumulator::new();
    reading.accumulate(&mut acc);
    Some(Interval::from_fields(acc.fields()))
}

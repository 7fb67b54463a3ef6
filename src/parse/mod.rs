// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text → [`Interval`] dispatch.
//!
//! The anchored grammars are tried in a fixed order and the first full
//! match wins. When none matches, the verbose grammar takes the text:
//!
//! | Order | Grammar | Example |
//! |-------|---------|---------|
//! | 1 | negated ISO-8601 | `-P1DT2H` |
//! | 2 | ISO-8601 | `P1Y2M3DT4H5M6.5S` |
//! | 3 | clock reading | `-12:30:00.5` |
//! | 4 | verbose (fallback) | `1 year -2 mons 3 days 04:05:06` |

mod clock;
mod iso;
mod verbose;

use crate::error::IntervalResult;
use crate::Interval;

type Grammar = fn(&str) -> Option<Interval>;

const ANCHORED: &[(&str, Grammar)] = &[
    ("negated iso-8601", iso::parse_negated),
    ("iso-8601", iso::parse),
    ("clock", clock::parse),
];

fn anchored(text: &str) -> Option<Interval> {
    ANCHORED.iter().find_map(|&(name, grammar)| {
        let parsed = grammar(text)?;
        tracing::trace!(grammar = name, text, "interval grammar matched");
        Some(parsed)
    })
}

/// Lenient parse: never fails, unknown tokens are skipped.
pub(crate) fn parse(text: &str) -> Interval {
    let text = text.trim();
    anchored(text).unwrap_or_else(|| {
        tracing::trace!(grammar = "verbose", text, "falling back to verbose interval grammar");
        verbose::Scan::run(text).lenient()
    })
}

/// Strict parse: the verbose fallback must consume every token.
pub(crate) fn parse_strict(text: &str) -> IntervalResult<Interval> {
    let text = text.trim();
    match anchored(text) {
        Some(parsed) => Ok(parsed),
        None => verbose::Scan::run(text).strict(),
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Errors from the fallible interval surfaces.
///
/// The default text constructor never fails; these only come from
/// [`Interval::parse_strict`](crate::Interval::parse_strict) (and `FromStr`)
/// and from the `chrono` conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("empty interval text")]
    Empty,

    #[error("unrecognized interval token {token:?}")]
    UnrecognizedToken { token: String },

    #[error("magnitude {magnitude:?} has no unit")]
    MissingUnit { magnitude: String },

    #[error("interval has {months} month(s), which have no fixed length")]
    NonZeroMonths { months: i64 },

    #[error("interval out of range for the target type")]
    OutOfRange,
}

pub type IntervalResult<T> = Result<T, IntervalError>;

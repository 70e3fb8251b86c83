//! Auto-dismiss duration resolution
//!
//! Durations arrive either as raw milliseconds or as a shorthand string like
//! `"3s"`. Shorthand is a numeric prefix followed by a unit suffix:
//! `ms` (milliseconds), `s` (seconds), or `m` (minutes). A bare numeric
//! string is read as milliseconds.
//!
//! Store operations never surface parse failures; `resolve` falls back to the
//! library-wide default duration instead.

use std::str::FromStr;
use thiserror::Error;

/// A duration as accepted by toast options
#[derive(Clone, Debug, PartialEq)]
pub enum DurationSpec {
    /// Raw milliseconds
    Millis(u64),
    /// Shorthand such as `"3s"`, `"250ms"`, or `"1.5m"`; parsed lazily at
    /// insertion time
    Shorthand(String),
}

impl DurationSpec {
    /// Resolve to milliseconds, substituting `default_ms` when shorthand
    /// parsing fails
    pub fn resolve(&self, default_ms: u64) -> u64 {
        match self {
            DurationSpec::Millis(ms) => *ms,
            DurationSpec::Shorthand(text) => match parse_shorthand(text) {
                Ok(ms) => ms,
                Err(err) => {
                    tracing::debug!(
                        "DurationSpec::resolve - {err}, falling back to {default_ms}ms"
                    );
                    default_ms
                }
            },
        }
    }
}

impl From<u64> for DurationSpec {
    fn from(ms: u64) -> Self {
        DurationSpec::Millis(ms)
    }
}

impl From<&str> for DurationSpec {
    fn from(text: &str) -> Self {
        DurationSpec::Shorthand(text.to_string())
    }
}

impl From<String> for DurationSpec {
    fn from(text: String) -> Self {
        DurationSpec::Shorthand(text)
    }
}

/// Error parsing a duration shorthand string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration string")]
    Empty,
    #[error("invalid duration number: {0:?}")]
    InvalidNumber(String),
    #[error("invalid duration unit: {0:?}")]
    InvalidUnit(String),
}

impl FromStr for DurationSpec {
    type Err = DurationParseError;

    /// Strict parse of a shorthand string into resolved milliseconds
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_shorthand(s).map(DurationSpec::Millis)
    }
}

/// Parse `"250ms"` / `"3s"` / `"1.5m"` / `"4000"` into milliseconds
pub fn parse_shorthand(text: &str) -> Result<u64, DurationParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let split = text
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(split);

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| DurationParseError::InvalidNumber(number.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(DurationParseError::InvalidNumber(number.to_string()));
    }

    let multiplier = match unit {
        "" | "ms" => 1.0,
        "s" => 1_000.0,
        "m" => 60_000.0,
        other => return Err(DurationParseError::InvalidUnit(other.to_string())),
    };

    Ok((value * multiplier).round() as u64)
}

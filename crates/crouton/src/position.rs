//! Screen placement for the toast stack
//!
//! The position only influences insertion order: stacks anchored to the
//! bottom of the screen grow downward (new toasts appended), every other
//! anchor grows from the top (new toasts prepended).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Corner or edge where the toast stack is anchored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    TopCenter,
    #[default]
    BottomLeft,
    BottomRight,
    BottomCenter,
}

impl Position {
    /// Whether the stack is anchored to the bottom of the screen
    ///
    /// Bottom anchors append new toasts; all others prepend.
    pub fn is_bottom(&self) -> bool {
        matches!(
            self,
            Position::BottomLeft | Position::BottomRight | Position::BottomCenter
        )
    }

    /// Kebab-case name, as used by CSS-facing renderers
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::TopCenter => "top-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::BottomCenter => "bottom-center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a position name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown position: {0:?}")]
pub struct PositionParseError(pub String);

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Position::TopLeft),
            "top-right" => Ok(Position::TopRight),
            "top-center" => Ok(Position::TopCenter),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-right" => Ok(Position::BottomRight),
            "bottom-center" => Ok(Position::BottomCenter),
            other => Err(PositionParseError(other.to_string())),
        }
    }
}

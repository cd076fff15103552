//! CSS `<time>` values.

use core::fmt::{self, Write};

use serde::Serialize;

use crate::value::{ToCss, write_number};

/// [CSS Values § 7.3 Duration Units](https://www.w3.org/TR/css-values-4/#time)
///
/// "Time values are dimensions denoted by `<time>`."
///
/// Stored in milliseconds. Negative times are representable; properties
/// that forbid them reject them in their grammar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Time {
    /// Milliseconds.
    pub milliseconds: f32,
}

impl Time {
    /// `0s`.
    pub const ZERO: Self = Self { milliseconds: 0.0 };

    /// "ms: Milliseconds. There are 1000 milliseconds in a second."
    #[must_use]
    pub const fn from_milliseconds(milliseconds: f32) -> Self {
        Self { milliseconds }
    }

    /// "s: Seconds."
    #[must_use]
    pub fn from_seconds(seconds: f32) -> Self {
        Self {
            milliseconds: seconds * 1000.0,
        }
    }

    /// True if the time is below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.milliseconds < 0.0
    }
}

impl ToCss for Time {
    /// Times serialize in seconds, the canonical unit.
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        write_number(dest, f64::from(self.milliseconds) / 1000.0)?;
        dest.write_char('s')
    }
}

//! Shadow values for `box-shadow` and `text-shadow`.

use core::fmt::{self, Write};

use serde::Serialize;

use super::{Color, Length};
use crate::value::ToCss;

/// [CSS Backgrounds § 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// "The 'box-shadow' property attaches one or more drop-shadows to the box."
///
/// `<shadow> = inset? && <length>{2,4} && <color>?`
///
/// - 2 required lengths: offset-x, offset-y
/// - 2 optional lengths: blur-radius (default 0, >= 0), spread-radius (default 0)
/// - `inset` keyword: inner shadow (optional)
/// - color defaults to `currentcolor`
///
/// `text-shadow` uses the same shape without `inset` and spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    /// Horizontal offset. Positive = right.
    pub offset_x: Length,
    /// Vertical offset. Positive = down.
    pub offset_y: Length,
    /// Blur radius. Never negative.
    pub blur_radius: Length,
    /// Spread radius. Positive grows the shadow.
    pub spread_radius: Length,
    /// Shadow color.
    pub color: Color,
    /// If true, shadow is drawn inside the box (inset shadow).
    pub inset: bool,
}

impl Shadow {
    /// A shadow at the given offsets with every other part defaulted.
    #[must_use]
    pub const fn new(offset_x: Length, offset_y: Length) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius: Length::ZERO,
            spread_radius: Length::ZERO,
            color: Color::CurrentColor,
            inset: false,
        }
    }
}

impl ToCss for Shadow {
    /// Blur is always written; spread only when non-zero and color only
    /// when not `currentcolor`, so `text-shadow` values stay valid.
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        if self.inset {
            dest.write_str("inset ")?;
        }
        self.offset_x.to_css(dest)?;
        dest.write_char(' ')?;
        self.offset_y.to_css(dest)?;
        dest.write_char(' ')?;
        self.blur_radius.to_css(dest)?;
        if self.spread_radius.value != 0.0 {
            dest.write_char(' ')?;
            self.spread_radius.to_css(dest)?;
        }
        if self.color != Color::CurrentColor {
            dest.write_char(' ')?;
            self.color.to_css(dest)?;
        }
        Ok(())
    }
}

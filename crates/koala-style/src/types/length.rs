//! CSS `<length>` values.
//!
//! [CSS Values § 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)

use core::fmt::{self, Write};

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::value::{ToCss, write_number};

/// [§ 6.1 Relative Lengths](https://www.w3.org/TR/css-values-4/#relative-lengths)
/// [§ 6.2 Absolute Lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
///
/// Units are matched ASCII case-insensitively: "`12PX`" is `12px`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// "pixels; 1px = 1/96th of 1in"
    Px,
    /// "Equal to the computed value of the font-size property of the element"
    Em,
    /// "Equal to the computed value of font-size on the root element"
    Rem,
    /// "Equal to the used x-height of the first available font"
    Ex,
    /// "Equal to the used advance measure of the '0' glyph"
    Ch,
    /// "Equal to 1% of the width of the initial containing block"
    Vw,
    /// "Equal to 1% of the height of the initial containing block"
    Vh,
    /// "Equal to the smaller of vw or vh"
    Vmin,
    /// "Equal to the larger of vw or vh"
    Vmax,
    /// "centimeters; 1cm = 96px/2.54"
    Cm,
    /// "millimeters; 1mm = 1/10th of 1cm"
    Mm,
    /// "quarter-millimeters; 1Q = 1/40th of 1cm"
    Q,
    /// "inches; 1in = 2.54cm = 96px"
    In,
    /// "points; 1pt = 1/72th of 1in"
    Pt,
    /// "picas; 1pc = 1/6th of 1in"
    Pc,
}

/// A `<length>`: a number with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// The number, as written.
    pub value: f32,
    /// The unit it is measured in.
    pub unit: LengthUnit,
}

impl Length {
    /// `0px`, the value of a unitless zero and of omitted shadow radii.
    pub const ZERO: Self = Self::px(0.0);

    /// A length in pixels.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// A length in an arbitrary unit.
    #[must_use]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// True if the number is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }
}

impl ToCss for Length {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        write_number(dest, f64::from(self.value))?;
        dest.write_str(self.unit.into())
    }
}

//! Keyword and count values of the `animation-*` and `transition-*` longhands.

use core::fmt::{self, Write};

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::value::{ToCss, write_number};

/// [CSS Animations § 3.6 'animation-iteration-count'](https://www.w3.org/TR/css-animations-1/#animation-iteration-count)
///
/// `<single-animation-iteration-count> = infinite | <number [0,∞]>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IterationCount {
    /// "The animation will repeat forever."
    Infinite,
    /// A finite, non-negative number of cycles (may be fractional).
    Count(f32),
}

impl ToCss for IterationCount {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::Infinite => dest.write_str("infinite"),
            Self::Count(count) => write_number(dest, f64::from(*count)),
        }
    }
}

/// [CSS Animations § 3.7 'animation-direction'](https://www.w3.org/TR/css-animations-1/#animation-direction)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    /// "All iterations of the animation are played as specified."
    Normal,
    /// "All iterations of the animation are played in the reverse direction."
    Reverse,
    /// "The animation cycle iterations that are odd counts are played in the
    /// normal direction, and the animation cycle iterations that are even
    /// counts are played in a reverse direction."
    Alternate,
    /// "The animation cycle iterations that are odd counts are played in the
    /// reverse direction, and the animation cycle iterations that are even
    /// counts are played in a normal direction."
    AlternateReverse,
}

/// [CSS Transitions § 2.1 'transition-property'](https://www.w3.org/TR/css-transitions-1/#transition-property-property)
///
/// `<single-transition-property> = all | <custom-ident>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionTarget {
    /// "The keyword all means all properties are to be transitioned."
    All,
    /// A property name. Unknown names are kept: "If one of the identifiers
    /// listed is not a recognized property name, the implementation must
    /// still start transitions on the animatable properties in the list".
    Property(String),
}

impl ToCss for TransitionTarget {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::All => dest.write_str("all"),
            Self::Property(name) => dest.write_str(name),
        }
    }
}

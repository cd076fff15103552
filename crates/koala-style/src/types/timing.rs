//! Easing functions for transitions and animations.
//!
//! [CSS Easing Functions Level 1](https://www.w3.org/TR/css-easing-1/)

use core::fmt::{self, Write};

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::value::{ToCss, write_number};

/// [§ 3.1 Step easing functions](https://www.w3.org/TR/css-easing-1/#step-easing-functions)
///
/// `<step-position> = jump-start | jump-end | jump-none | jump-both | start | end`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum StepPosition {
    /// "The first rise occurs at input progress value of 0."
    JumpStart,
    /// "The last rise occurs at input progress value of 1."
    JumpEnd,
    /// "All rises occur within the range (0, 1)."
    JumpNone,
    /// "The first rise occurs at input progress value of 0 and the last rise
    /// occurs at input progress value of 1."
    JumpBoth,
    /// "Behaves as jump-start."
    Start,
    /// "Behaves as jump-end."
    End,
}

impl StepPosition {
    /// True for the positions that may be omitted when serializing.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::JumpEnd | Self::End)
    }
}

/// [§ 2 Easing functions](https://www.w3.org/TR/css-easing-1/#easing-functions)
///
/// `<easing-function> = linear | <cubic-bezier-easing-function> | <step-easing-function>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    /// "Equivalent to cubic-bezier(0.25, 0.1, 0.25, 1)."
    Ease,
    /// "The linear easing function is an identity function."
    Linear,
    /// "Equivalent to cubic-bezier(0.42, 0, 1, 1)."
    EaseIn,
    /// "Equivalent to cubic-bezier(0, 0, 0.58, 1)."
    EaseOut,
    /// "Equivalent to cubic-bezier(0.42, 0, 0.58, 1)."
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; both x values are in [0, 1].
    CubicBezier {
        /// First control point, x.
        x1: f32,
        /// First control point, y.
        y1: f32,
        /// Second control point, x.
        x2: f32,
        /// Second control point, y.
        y2: f32,
    },
    /// `steps(count, position)`. `step-start` and `step-end` are
    /// `steps(1, start)` and `steps(1, end)`.
    Steps {
        /// Number of intervals; at least 1, at least 2 for `jump-none`.
        count: u32,
        /// Where the jumps happen.
        position: StepPosition,
    },
}

impl TimingFunction {
    /// [§ 2.2](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions)
    /// [§ 3.1](https://www.w3.org/TR/css-easing-1/#step-easing-functions)
    ///
    /// The keyword forms, ASCII case-insensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let keyword = keyword.to_ascii_lowercase();
        Some(match keyword.as_str() {
            "ease" => Self::Ease,
            "linear" => Self::Linear,
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            "step-start" => Self::Steps {
                count: 1,
                position: StepPosition::Start,
            },
            "step-end" => Self::Steps {
                count: 1,
                position: StepPosition::End,
            },
            _ => return None,
        })
    }

    /// The control points of a Bézier easing, including the keyword forms.
    #[must_use]
    pub const fn control_points(&self) -> Option<[f32; 4]> {
        match *self {
            Self::Ease => Some([0.25, 0.1, 0.25, 1.0]),
            Self::EaseIn => Some([0.42, 0.0, 1.0, 1.0]),
            Self::EaseOut => Some([0.0, 0.0, 0.58, 1.0]),
            Self::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
            Self::CubicBezier { x1, y1, x2, y2 } => Some([x1, y1, x2, y2]),
            Self::Linear | Self::Steps { .. } => None,
        }
    }
}

impl ToCss for TimingFunction {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::Ease => dest.write_str("ease"),
            Self::Linear => dest.write_str("linear"),
            Self::EaseIn => dest.write_str("ease-in"),
            Self::EaseOut => dest.write_str("ease-out"),
            Self::EaseInOut => dest.write_str("ease-in-out"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                dest.write_str("cubic-bezier(")?;
                for (i, point) in [x1, y1, x2, y2].into_iter().enumerate() {
                    if i > 0 {
                        dest.write_str(", ")?;
                    }
                    write_number(dest, f64::from(*point))?;
                }
                dest.write_char(')')
            }
            Self::Steps { count, position } if position.is_default() => {
                write!(dest, "steps({count})")
            }
            Self::Steps { count, position } => write!(dest, "steps({count}, {position})"),
        }
    }
}

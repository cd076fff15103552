//! Domain value types.
//!
//! Each type is a plain value: cloneable, comparable, serializable with
//! serde, and writable back to CSS text through [`ToCss`].

mod animation;
mod color;
mod length;
mod shadow;
mod time;
mod timing;
mod visibility;

use core::fmt::{self, Write};

pub use animation::{AnimationDirection, IterationCount, TransitionTarget};
pub use color::{Color, Rgba};
pub use length::{Length, LengthUnit};
pub use shadow::Shadow;
pub use time::Time;
pub use timing::{StepPosition, TimingFunction};
pub use visibility::Visibility;

use crate::value::ToCss;

/// Keyword enums serialize as their kebab-case name.
macro_rules! keyword_to_css {
    ($($keyword:ty),+ $(,)?) => {
        $(
            impl ToCss for $keyword {
                fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
                    dest.write_str((*self).into())
                }
            }
        )+
    };
}

keyword_to_css!(AnimationDirection, LengthUnit, StepPosition, Visibility);

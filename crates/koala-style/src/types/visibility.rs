//! The `visibility` keyword.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// [CSS Display § 4 'visibility'](https://www.w3.org/TR/css-display-3/#visibility)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// "The box is visible."
    Visible,
    /// "The box is invisible (fully transparent, nothing is drawn), but
    /// still affects layout."
    Hidden,
    /// "Indicates that the box is collapsed."
    Collapse,
}

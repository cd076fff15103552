//! Converters from a single [`CssValue`] to a domain type.
//!
//! Converters are plain functions, lifted into grammars with
//! [`convert`](super::convert). They reject out-of-range numbers and
//! invalid units instead of clamping, except for color channels, which
//! CSS Color defines as clamped.

use koala_common::warning::warn_once;

use super::Grammar;
use crate::error::GrammarError;
use crate::types::{
    Color, Length, LengthUnit, Rgba, Shadow, StepPosition, Time, TimingFunction,
};
use crate::value::{Component, CssValue};

/// [CSS Values § 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// `<length>`: a dimension with a supported unit, or a unitless zero.
/// "For zero lengths the unit identifier is optional."
///
/// # Errors
///
/// [`GrammarError::InvalidUnit`] for an unknown unit (also reported once
/// through `warn_once`), [`GrammarError::OutOfRange`] for a value too large
/// for `f32`, [`GrammarError::Mismatch`] for anything that is not a
/// dimension or zero.
pub fn length(value: &CssValue) -> Result<Length, GrammarError> {
    match value.as_component() {
        Some(Component::Dimension { value, unit }) => {
            let Ok(parsed) = unit.parse::<LengthUnit>() else {
                let _ = warn_once("CSS", &format!("unsupported length unit `{unit}`"));
                return Err(GrammarError::InvalidUnit {
                    what: "length",
                    unit: unit.clone(),
                });
            };
            Ok(Length::new(to_f32(*value, "length")?, parsed))
        }
        Some(Component::Number(number)) if *number == 0.0 => Ok(Length::ZERO),
        _ => Err(GrammarError::mismatch("<length>")),
    }
}

/// `<length [0,∞]>`.
///
/// # Errors
///
/// As [`length`], plus [`GrammarError::OutOfRange`] for negative lengths.
pub fn non_negative_length(value: &CssValue) -> Result<Length, GrammarError> {
    let length = length(value)?;
    if length.is_negative() {
        return Err(GrammarError::OutOfRange {
            what: "length",
            value: f64::from(length.value),
        });
    }
    Ok(length)
}

/// [CSS Values § 7.3 Duration Units](https://www.w3.org/TR/css-values-4/#time)
///
/// `<time>`: a dimension in `s` or `ms`. Unlike lengths, a unitless zero is
/// not a time.
///
/// # Errors
///
/// [`GrammarError::InvalidUnit`] for a dimension in another unit,
/// [`GrammarError::OutOfRange`] for a duration too large to store,
/// [`GrammarError::Mismatch`] for everything else.
pub fn time(value: &CssValue) -> Result<Time, GrammarError> {
    match value.as_component() {
        Some(Component::Dimension { value, unit }) => {
            let time = if unit.eq_ignore_ascii_case("s") {
                Time::from_seconds(to_f32(*value, "time")?)
            } else if unit.eq_ignore_ascii_case("ms") {
                Time::from_milliseconds(to_f32(*value, "time")?)
            } else {
                return Err(GrammarError::InvalidUnit {
                    what: "time",
                    unit: unit.clone(),
                });
            };
            // `1e38s` fits an f32 but its millisecond count does not.
            if !time.milliseconds.is_finite() {
                return Err(GrammarError::OutOfRange {
                    what: "time",
                    value: *value,
                });
            }
            Ok(time)
        }
        _ => Err(GrammarError::mismatch("<time>")),
    }
}

/// `<time [0s,∞]>`.
///
/// # Errors
///
/// As [`time`], plus [`GrammarError::OutOfRange`] for negative times.
pub fn non_negative_time(value: &CssValue) -> Result<Time, GrammarError> {
    let time = time(value)?;
    if time.is_negative() {
        return Err(GrammarError::OutOfRange {
            what: "time",
            value: f64::from(time.milliseconds),
        });
    }
    Ok(time)
}

/// `<number>`.
///
/// # Errors
///
/// [`GrammarError::Mismatch`] for anything but a plain number,
/// [`GrammarError::OutOfRange`] for one too large for `f32`.
pub fn number(value: &CssValue) -> Result<f32, GrammarError> {
    match value.as_component() {
        Some(Component::Number(number)) => to_f32(*number, "number"),
        _ => Err(GrammarError::mismatch("<number>")),
    }
}

/// `<number [0,∞]>`.
///
/// # Errors
///
/// As [`number`], plus [`GrammarError::OutOfRange`] for negative numbers.
pub fn non_negative_number(value: &CssValue) -> Result<f32, GrammarError> {
    let number = number(value)?;
    if number < 0.0 {
        return Err(GrammarError::OutOfRange {
            what: "number",
            value: f64::from(number),
        });
    }
    Ok(number)
}

/// [CSS Values § 4.2 Author-defined Identifiers](https://www.w3.org/TR/css-values-4/#custom-idents)
///
/// "The CSS-wide keywords are not valid `<custom-ident>`s. The default
/// keyword is reserved and is also not a valid `<custom-ident>`."
///
/// # Errors
///
/// [`GrammarError::Mismatch`] for non-identifiers and reserved words.
pub fn custom_ident(value: &CssValue) -> Result<String, GrammarError> {
    const RESERVED: [&str; 6] = ["initial", "inherit", "unset", "revert", "revert-layer", "default"];
    match value.as_ident() {
        Some(name) if !RESERVED.iter().any(|r| name.eq_ignore_ascii_case(r)) => {
            Ok(name.to_string())
        }
        _ => Err(GrammarError::mismatch("<custom-ident>")),
    }
}

/// [CSS Color § 4 Representing Colors](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// Hex colors, named colors, `transparent`, `currentcolor`, `rgb()`/`rgba()`
/// and `hsl()`/`hsla()` in both the comma and the space/slash syntax.
///
/// # Errors
///
/// [`GrammarError::Mismatch`] for anything that is not a color;
/// [`GrammarError::InvalidUnit`] for a hue in a non-angle unit.
pub fn color(value: &CssValue) -> Result<Color, GrammarError> {
    let mismatch = || GrammarError::mismatch("<color>");
    match value.as_component() {
        Some(Component::Hash(hex)) => Rgba::from_hex(hex).map(Color::Rgba).ok_or_else(mismatch),
        Some(Component::Ident(name)) if name.eq_ignore_ascii_case("currentcolor") => {
            Ok(Color::CurrentColor)
        }
        Some(Component::Ident(name)) => Rgba::from_named(name).map(Color::Rgba).ok_or_else(mismatch),
        Some(Component::Function { name, arguments }) => {
            let args = ColorArguments::split(arguments).ok_or_else(mismatch)?;
            match name.to_ascii_lowercase().as_str() {
                "rgb" | "rgba" => args.to_rgb().map(Color::Rgba),
                "hsl" | "hsla" => args.to_hsl().map(Color::Rgba),
                _ => Err(mismatch()),
            }
        }
        _ => Err(mismatch()),
    }
}

/// The three channels and optional alpha of a color function.
struct ColorArguments<'a> {
    channels: [&'a Component; 3],
    alpha: Option<&'a Component>,
}

impl<'a> ColorArguments<'a> {
    /// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// Modern syntax arrives as one whitespace list with an optional
    /// `/ alpha` tail; legacy syntax as three or four comma-separated values.
    fn split(arguments: &'a [CssValue]) -> Option<Self> {
        let items: Vec<&CssValue> = match arguments {
            [single] => single.whitespace_items().iter().collect(),
            [_, _, _] | [_, _, _, _] => arguments.iter().collect(),
            _ => return None,
        };
        let components: Vec<&Component> = items
            .into_iter()
            .map(CssValue::as_component)
            .collect::<Option<_>>()?;

        let (channels, alpha) = if arguments.len() == 1 {
            match components.as_slice() {
                [r, g, b] => ([*r, *g, *b], None),
                [r, g, b, Component::Delim('/'), a] => ([*r, *g, *b], Some(*a)),
                _ => return None,
            }
        } else {
            match components.as_slice() {
                [r, g, b] => ([*r, *g, *b], None),
                [r, g, b, a] => ([*r, *g, *b], Some(*a)),
                _ => return None,
            }
        };
        Some(Self { channels, alpha })
    }

    /// "Values outside these ranges are not invalid, but are clamped to the
    /// ranges defined here at parsed-value time."
    fn to_rgb(&self) -> Result<Rgba, GrammarError> {
        let mut rgb = [0u8; 3];
        for (slot, channel) in rgb.iter_mut().zip(self.channels) {
            let value = match channel {
                Component::Number(n) => *n,
                // "100% = 255"
                Component::Percentage(p) => p * 255.0 / 100.0,
                _ => return Err(GrammarError::mismatch("<number> or <percentage>")),
            };
            *slot = clamp_to_u8(value);
        }
        Ok(Rgba {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: self.alpha()?,
        })
    }

    /// [§ 7.1 The HSL functions](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
    fn to_hsl(&self) -> Result<Rgba, GrammarError> {
        let [hue, saturation, lightness] = self.channels;
        // "<hue> is a <number> or <angle>, interpreted as degrees."
        let hue = match hue {
            Component::Number(degrees) => *degrees,
            Component::Dimension { value, unit } => angle_to_degrees(*value, unit)?,
            _ => return Err(GrammarError::mismatch("<hue>")),
        };
        let fraction = |component: &Component| match component {
            Component::Percentage(p) | Component::Number(p) => Ok(p / 100.0),
            _ => Err(GrammarError::mismatch("<percentage>")),
        };
        let (r, g, b) = hsl_to_rgb(hue, fraction(saturation)?, fraction(lightness)?);
        Ok(Rgba {
            r,
            g,
            b,
            a: self.alpha()?,
        })
    }

    /// "The final argument, the `<alpha-value>`, specifies the alpha of the
    /// color. [...] If omitted, it defaults to 100%."
    fn alpha(&self) -> Result<u8, GrammarError> {
        match self.alpha {
            None => Ok(255),
            Some(Component::Number(n)) => Ok(clamp_to_u8(n * 255.0)),
            Some(Component::Percentage(p)) => Ok(clamp_to_u8(p * 255.0 / 100.0)),
            Some(_) => Err(GrammarError::mismatch("<alpha-value>")),
        }
    }
}

/// [CSS Values § 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
fn angle_to_degrees(value: f64, unit: &str) -> Result<f64, GrammarError> {
    match unit.to_ascii_lowercase().as_str() {
        "deg" => Ok(value),
        "rad" => Ok(value.to_degrees()),
        // "There are 400 gradians in a full circle."
        "grad" => Ok(value * 0.9),
        // "There is 1 turn in a full circle."
        "turn" => Ok(value * 360.0),
        _ => Err(GrammarError::InvalidUnit {
            what: "angle",
            unit: unit.to_string(),
        }),
    }
}

/// [CSS Color § 7.1 Converting HSL colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = if sector < 1.0 {
        (chroma, x, 0.0)
    } else if sector < 2.0 {
        (x, chroma, 0.0)
    } else if sector < 3.0 {
        (0.0, chroma, x)
    } else if sector < 4.0 {
        (0.0, x, chroma)
    } else if sector < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    let m = l - chroma / 2.0;
    let to_u8 = |channel: f64| clamp_to_u8((channel + m) * 255.0);
    (to_u8(r), to_u8(g), to_u8(b))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Narrows to `f32`, rejecting values that do not fit.
#[allow(clippy::cast_possible_truncation)]
fn to_f32(value: f64, what: &'static str) -> Result<f32, GrammarError> {
    let narrowed = value as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(GrammarError::OutOfRange { what, value })
    }
}

/// [CSS Easing § 2 Easing functions](https://www.w3.org/TR/css-easing-1/#easing-functions)
///
/// Keywords, `cubic-bezier()` and `steps()`.
///
/// # Errors
///
/// [`GrammarError::OutOfRange`] for x control points outside [0, 1] and
/// step counts below the minimum, [`GrammarError::Mismatch`] otherwise.
pub fn timing_function(value: &CssValue) -> Result<TimingFunction, GrammarError> {
    let mismatch = || GrammarError::mismatch("<easing-function>");
    if let Some(keyword) = value.as_ident() {
        return TimingFunction::from_keyword(keyword).ok_or_else(mismatch);
    }
    match value.as_component() {
        Some(Component::Function { name, arguments }) if name.eq_ignore_ascii_case("cubic-bezier") => {
            cubic_bezier(arguments)
        }
        Some(Component::Function { name, arguments }) if name.eq_ignore_ascii_case("steps") => {
            steps(arguments)
        }
        _ => Err(mismatch()),
    }
}

/// [§ 2.2 Cubic Bézier easing functions](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions)
///
/// "Both x values must be in the range [0, 1] or the definition is invalid."
fn cubic_bezier(arguments: &[CssValue]) -> Result<TimingFunction, GrammarError> {
    let [x1, y1, x2, y2] = arguments else {
        return Err(GrammarError::mismatch("four cubic-bezier() arguments"));
    };
    let x_coordinate = |value: &CssValue| {
        let x = number(value)?;
        if (0.0..=1.0).contains(&x) {
            Ok(x)
        } else {
            Err(GrammarError::OutOfRange {
                what: "cubic-bezier x coordinate",
                value: f64::from(x),
            })
        }
    };
    Ok(TimingFunction::CubicBezier {
        x1: x_coordinate(x1)?,
        y1: number(y1)?,
        x2: x_coordinate(x2)?,
        y2: number(y2)?,
    })
}

/// [§ 3.1 Step easing functions](https://www.w3.org/TR/css-easing-1/#step-easing-functions)
///
/// "`steps( <integer>, <step-position>? )` [...] If the `<step-position>`
/// is jump-none, the `<integer>` must be at least 2, or the function is
/// invalid. Otherwise, the `<integer>` must be at least 1."
fn steps(arguments: &[CssValue]) -> Result<TimingFunction, GrammarError> {
    let (count, position) = match arguments {
        [count] => (count, StepPosition::End),
        [count, position] => {
            let position = position
                .as_ident()
                .and_then(|keyword| keyword.parse::<StepPosition>().ok())
                .ok_or_else(|| GrammarError::mismatch("<step-position>"))?;
            (count, position)
        }
        _ => return Err(GrammarError::mismatch("one or two steps() arguments")),
    };

    let count = match count.as_component() {
        Some(Component::Number(n)) if n.fract() == 0.0 => *n,
        _ => return Err(GrammarError::mismatch("<integer>")),
    };
    let minimum = if position == StepPosition::JumpNone { 2.0 } else { 1.0 };
    if count < minimum || count > f64::from(u32::MAX) {
        return Err(GrammarError::OutOfRange {
            what: "step count",
            value: count,
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count as u32;
    Ok(TimingFunction::Steps { count, position })
}

/// [CSS Backgrounds § 6.1](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// `<shadow> = inset? && <length>{2,4} && <color>?`
///
/// The lengths are offset-x, offset-y, blur radius and spread radius, in
/// that order and written next to each other. `inset` and the color may
/// come before or after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowGrammar {
    /// Accept the `inset` keyword.
    pub allow_inset: bool,
    /// Accept a fourth (spread) length.
    pub allow_spread: bool,
}

impl ShadowGrammar {
    /// The `box-shadow` form: `inset` and spread allowed.
    pub const BOX: Self = Self {
        allow_inset: true,
        allow_spread: true,
    };

    /// [CSS Text Decoration § 4 'text-shadow'](https://www.w3.org/TR/css-text-decor-3/#text-shadow-property)
    ///
    /// "Values are interpreted as for box-shadow [...] The inset keyword
    /// is not allowed" and there is no spread.
    pub const TEXT: Self = Self {
        allow_inset: false,
        allow_spread: false,
    };

    const fn max_lengths(self) -> usize {
        if self.allow_spread { 4 } else { 3 }
    }
}

impl Grammar for ShadowGrammar {
    type Output = Shadow;

    fn try_convert(&self, value: &CssValue) -> Result<Shadow, GrammarError> {
        let items = value.whitespace_items();
        let mut inset = false;
        let mut lengths: Option<Vec<Length>> = None;
        let mut color_value: Option<Color> = None;

        let mut index = 0;
        while index < items.len() {
            let item = &items[index];

            if self.allow_inset && !inset && item.is_ident("inset") {
                inset = true;
                index += 1;
                continue;
            }

            if lengths.is_none() && is_length_like(item) {
                let run: Vec<Length> = items[index..]
                    .iter()
                    .take_while(|item| is_length_like(item))
                    .map(length)
                    .collect::<Result<_, _>>()?;
                if run.len() < 2 || run.len() > self.max_lengths() {
                    return Err(GrammarError::mismatch(format!(
                        "2 to {} shadow lengths",
                        self.max_lengths()
                    )));
                }
                index += run.len();
                lengths = Some(run);
                continue;
            }

            if color_value.is_none() {
                color_value = Some(color(item).map_err(|_| GrammarError::mismatch("<shadow>"))?);
                index += 1;
                continue;
            }

            return Err(GrammarError::mismatch("<shadow>"));
        }

        let Some(lengths) = lengths else {
            return Err(GrammarError::mismatch("shadow offsets"));
        };
        let blur_radius = lengths.get(2).copied().unwrap_or(Length::ZERO);
        // "Negative values are not allowed."
        if blur_radius.is_negative() {
            return Err(GrammarError::OutOfRange {
                what: "blur radius",
                value: f64::from(blur_radius.value),
            });
        }

        Ok(Shadow {
            offset_x: lengths[0],
            offset_y: lengths[1],
            blur_radius,
            spread_radius: lengths.get(3).copied().unwrap_or(Length::ZERO),
            color: color_value.unwrap_or_default(),
            inset,
        })
    }
}

fn is_length_like(value: &CssValue) -> bool {
    matches!(
        value.as_component(),
        Some(Component::Dimension { .. } | Component::Number(_))
    )
}

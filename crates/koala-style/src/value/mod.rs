//! Tokenized CSS values.
//!
//! [§ 5.3.7 Parse a list of component values](https://www.w3.org/TR/css-syntax-3/#parse-list-of-component-values)
//!
//! A declaration value reaches the grammars as a [`CssValue`]: a single
//! [`Component`] or an ordered list of values separated by commas or
//! whitespace. Values are immutable once built and compare structurally.

use core::fmt::{self, Write};

/// [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#component-value)
///
/// "A component value is one of the preserved tokens, a function, or a simple block."
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// `<ident-token>`, e.g. `none`, `inset`, `ease-in`.
    Ident(String),
    /// `<number-token>`, e.g. `0`, `1.5`, `-2`.
    Number(f64),
    /// `<percentage-token>`; the value is the number before `%`.
    Percentage(f64),
    /// `<dimension-token>`, e.g. `10px`, `250ms`.
    Dimension {
        /// The numeric part.
        value: f64,
        /// The unit as written, e.g. `px`, `MS`.
        unit: String,
    },
    /// `<hash-token>`; the value excludes the leading `#`.
    Hash(String),
    /// `<string-token>`; the value excludes the quotes.
    String(String),
    /// `<delim-token>`, e.g. `/`.
    Delim(char),
    /// "A function has a name and a value consisting of a list of component values."
    ///
    /// Arguments are already split on top-level commas.
    Function {
        /// The function name without the `(`.
        name: String,
        /// The comma-separated arguments.
        arguments: Vec<CssValue>,
    },
}

/// How the items of a [`CssValue::List`] were separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `a, b, c`
    Comma,
    /// `a b c`
    Whitespace,
}

/// A declaration value: one component value or a separated list of values.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A single component value.
    Component(Component),
    /// An ordered list of values.
    List {
        /// Separator between the items.
        separator: Separator,
        /// The items, in source order.
        items: Vec<CssValue>,
    },
}

impl CssValue {
    /// An `<ident-token>` value.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Component(Component::Ident(name.into()))
    }

    /// A `<number-token>` value.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Component(Component::Number(value))
    }

    /// A `<percentage-token>` value.
    #[must_use]
    pub const fn percentage(value: f64) -> Self {
        Self::Component(Component::Percentage(value))
    }

    /// A `<dimension-token>` value.
    #[must_use]
    pub fn dimension(value: f64, unit: impl Into<String>) -> Self {
        Self::Component(Component::Dimension {
            value,
            unit: unit.into(),
        })
    }

    /// A `<hash-token>` value; `value` excludes the `#`.
    #[must_use]
    pub fn hash(value: impl Into<String>) -> Self {
        Self::Component(Component::Hash(value.into()))
    }

    /// A function with already comma-split arguments.
    #[must_use]
    pub fn function(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Component(Component::Function {
            name: name.into(),
            arguments,
        })
    }

    /// A comma-separated list. A single item is returned unwrapped.
    #[must_use]
    pub fn comma_list(mut items: Vec<Self>) -> Self {
        if items.len() == 1 {
            return items.remove(0);
        }
        Self::List {
            separator: Separator::Comma,
            items,
        }
    }

    /// A whitespace-separated list. A single item is returned unwrapped.
    #[must_use]
    pub fn whitespace_list(mut items: Vec<Self>) -> Self {
        if items.len() == 1 {
            return items.remove(0);
        }
        Self::List {
            separator: Separator::Whitespace,
            items,
        }
    }

    /// The component, if this is not a list.
    #[must_use]
    pub const fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            Self::List { .. } => None,
        }
    }

    /// The keyword, if this is a single `<ident-token>`.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Component(Component::Ident(name)) => Some(name),
            _ => None,
        }
    }

    /// True if this is a single keyword matching `keyword` ASCII case-insensitively.
    #[must_use]
    pub fn is_ident(&self, keyword: &str) -> bool {
        self.as_ident()
            .is_some_and(|name| name.eq_ignore_ascii_case(keyword))
    }

    /// The items of a comma-separated list, or the value itself as a
    /// one-item list.
    #[must_use]
    pub fn comma_items(&self) -> &[Self] {
        self.items_separated_by(Separator::Comma)
    }

    /// The items of a whitespace-separated list, or the value itself as a
    /// one-item list.
    #[must_use]
    pub fn whitespace_items(&self) -> &[Self] {
        self.items_separated_by(Separator::Whitespace)
    }

    fn items_separated_by(&self, wanted: Separator) -> &[Self] {
        match self {
            Self::List { separator, items } if *separator == wanted => items,
            _ => std::slice::from_ref(self),
        }
    }
}

impl From<Component> for CssValue {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

/// [CSSOM § 6.7 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
///
/// Write a value back out as CSS text.
pub trait ToCss {
    /// Serialize `self` into `dest`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result;

    /// Serialize `self` into a new `String`.
    fn to_css_string(&self) -> String {
        let mut css = String::new();
        // Writing into a String cannot fail.
        let _ = self.to_css(&mut css);
        css
    }
}

/// [CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serialize-a-css-component-value)
///
/// "<number>: A base-ten number using digits 0-9 (U+0030 to U+0039) in the
/// shortest form possible, using "." to separate decimals (if any),
/// rounding the value if necessary to not produce more than 6 decimals,
/// preceded by "-" (U+002D) if it is negative."
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_number<W: Write>(dest: &mut W, value: f64) -> fmt::Result {
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;
    if rounded == 0.0 {
        // Avoid printing `-0`.
        return dest.write_char('0');
    }
    write!(dest, "{rounded}")
}

/// [CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serialize-a-string)
///
/// "To serialize a string means to create a string represented by '"',
/// followed by the result of applying the rules below to each character
/// of the given string, followed by '"'"
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_string<W: Write>(dest: &mut W, value: &str) -> fmt::Result {
    dest.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                dest.write_char('\\')?;
                dest.write_char(c)?;
            }
            '\n' => dest.write_str("\\a ")?,
            _ => dest.write_char(c)?,
        }
    }
    dest.write_char('"')
}

impl ToCss for Component {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::Ident(name) => dest.write_str(name),
            Self::Number(value) => write_number(dest, *value),
            Self::Percentage(value) => {
                write_number(dest, *value)?;
                dest.write_char('%')
            }
            Self::Dimension { value, unit } => {
                write_number(dest, *value)?;
                dest.write_str(unit)
            }
            Self::Hash(value) => {
                dest.write_char('#')?;
                dest.write_str(value)
            }
            Self::String(value) => write_string(dest, value),
            Self::Delim(c) => dest.write_char(*c),
            Self::Function { name, arguments } => {
                dest.write_str(name)?;
                dest.write_char('(')?;
                write_separated(dest, arguments, ", ")?;
                dest.write_char(')')
            }
        }
    }
}

impl ToCss for CssValue {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::Component(component) => component.to_css(dest),
            Self::List {
                separator: Separator::Comma,
                items,
            } => write_separated(dest, items, ", "),
            Self::List {
                separator: Separator::Whitespace,
                items,
            } => write_separated(dest, items, " "),
        }
    }
}

/// Serialize `items` joined by `separator`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_separated<W: Write, T: ToCss>(
    dest: &mut W,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            dest.write_str(separator)?;
        }
        item.to_css(dest)?;
    }
    Ok(())
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_css(f)
    }
}

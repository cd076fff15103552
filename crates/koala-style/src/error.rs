//! Error types.
//!
//! Property validation is boolean to callers, following
//! [CSS Syntax § 2.2 Error handling](https://www.w3.org/TR/css-syntax-3/#error-handling):
//! "When errors occur in CSS, the parser attempts to recover gracefully,
//! throwing away only the minimum amount of content". These types keep the
//! reason around for diagnostics, the CLI, and tests.

use thiserror::Error;

/// Failure to turn declaration-value text into a [`CssValue`](crate::CssValue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The value contained no component values at all.
    #[error("empty value")]
    Empty,

    /// A string ran into a newline or the end of input.
    #[error("unterminated string")]
    UnterminatedString,

    /// A function or block was not closed.
    #[error("missing closing `{0}`")]
    Unclosed(char),

    /// A token that cannot appear in a declaration value.
    #[error("unexpected `{0}`")]
    Unexpected(char),

    /// Two commas in a row, or a comma at either end of a list.
    #[error("empty item in comma-separated list")]
    EmptyListItem,
}

/// Failure to convert a value with a [`Grammar`](crate::Grammar).
///
/// The first variant is a shape mismatch; [`OutOfRange`](Self::OutOfRange)
/// and [`InvalidUnit`](Self::InvalidUnit) mean the shape was right but the
/// number or unit was not.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrammarError {
    /// The value does not have the shape the grammar accepts.
    #[error("expected {expected}")]
    Mismatch {
        /// Human readable description of what was expected.
        expected: String,
    },

    /// A number of the right type but outside the accepted range.
    #[error("{what} out of range: {value}")]
    OutOfRange {
        /// The kind of value that was rejected.
        what: &'static str,
        /// The rejected number.
        value: f64,
    },

    /// A dimension whose unit is not valid here.
    #[error("invalid unit `{unit}` for {what}")]
    InvalidUnit {
        /// The kind of value that was rejected.
        what: &'static str,
        /// The rejected unit, as written.
        unit: String,
    },

    /// One item of a comma-separated list failed.
    #[error("list item {index}: {source}")]
    InvalidListItem {
        /// Zero-based position of the failing item.
        index: usize,
        /// Why the item failed.
        #[source]
        source: Box<GrammarError>,
    },
}

impl GrammarError {
    /// Shorthand for [`GrammarError::Mismatch`].
    #[must_use]
    pub fn mismatch(expected: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
        }
    }

    /// True for range and unit violations, false for shape mismatches.
    /// List errors report the class of the failing item.
    #[must_use]
    pub fn is_range_or_unit(&self) -> bool {
        match self {
            Self::Mismatch { .. } => false,
            Self::OutOfRange { .. } | Self::InvalidUnit { .. } => true,
            Self::InvalidListItem { source, .. } => source.is_range_or_unit(),
        }
    }
}

/// Failure to parse selector text.
///
/// [`parse_selector`](crate::parse_selector) recovers from every variant by
/// producing [`Selector::Unknown`](crate::Selector::Unknown).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Nothing but whitespace.
    #[error("empty selector")]
    Empty,

    /// A character that does not start any selector syntax.
    #[error("unexpected `{0}` in selector")]
    UnexpectedChar(char),

    /// The selector ended where more input was required.
    #[error("unexpected end of selector")]
    UnexpectedEnd,

    /// A combinator with nothing on one side.
    #[error("combinator `{0}` is missing a compound selector")]
    DanglingCombinator(char),

    /// A pseudo-class name that is not supported.
    #[error("unknown pseudo-class `:{0}`")]
    UnknownPseudoClass(String),

    /// A pseudo-element name that is not supported.
    #[error("unknown pseudo-element `::{0}`")]
    UnknownPseudoElement(String),

    /// A pseudo-element followed by more selector syntax.
    #[error("pseudo-element must be at the end of the selector")]
    PseudoElementNotLast,

    /// Malformed `[attr]` syntax.
    #[error("invalid attribute selector")]
    InvalidAttribute,

    /// Malformed `An+B` argument.
    #[error("invalid An+B expression `{0}`")]
    InvalidNth(String),

    /// A functional pseudo-class without its closing parenthesis.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// A quoted attribute value without its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A comma where a single selector was expected.
    #[error("selector lists are not allowed here")]
    UnexpectedList,
}

//! CSS selector parsing, specificity and matching.
//!
//! This module implements selectors per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! A [`Selector`] is a closed set of variants: a single simple selector, a
//! compound of simple selectors, a complex selector joining two selectors
//! with a [`Combinator`], or [`Selector::Unknown`] for text that could not be
//! parsed. Unknown selectors keep their source text, have zero specificity
//! and never match, so a malformed rule can neither apply nor outrank a
//! valid one.
//!
//! ```
//! use koala_style::{Specificity, ToCss, parse_selector};
//!
//! let selector = parse_selector("ul#nav > li.item:first-child");
//! assert_eq!(selector.specificity(), Specificity::new(1, 2, 2));
//! assert_eq!(selector.to_css_string(), "ul#nav > li.item:first-child");
//!
//! let broken = parse_selector("li::before.item");
//! assert_eq!(broken.specificity(), Specificity::default());
//! assert_eq!(broken.to_css_string(), "li::before.item");
//! ```

mod element;
mod matching;
mod nth;
mod parser;

use core::fmt::{self, Write};
use core::ops::{Add, AddAssign};

use koala_common::warning::warn_once;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub use element::Element;
pub use nth::Nth;

use crate::error::SelectorError;
use crate::syntax::tokenizer::is_ident_code_point;
use crate::value::{ToCss, write_string};

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that follows
    /// element A (not necessarily immediately), where A and B share the same
    /// parent."
    SubsequentSibling,
}

impl ToCss for Combinator {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(match self {
            Self::Descendant => " ",
            Self::Child => " > ",
            Self::NextSibling => " + ",
            Self::SubsequentSibling => " ~ ",
        })
    }
}

/// The operator of an attribute selector with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `[att=val]`: "exactly 'val'".
    Equals,
    /// `[att~=val]`: "a whitespace-separated list of words, one of which is
    /// exactly 'val'".
    Includes,
    /// `[att|=val]`: "either being exactly 'val' or beginning with 'val'
    /// immediately followed by '-'".
    DashMatch,
    /// `[att^=val]`: "begins with the prefix 'val'".
    Prefix,
    /// `[att$=val]`: "ends with the suffix 'val'".
    Suffix,
    /// `[att*=val]`: "contains at least one instance of the substring 'val'".
    Substring,
}

impl AttributeOperator {
    /// The operator as written.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::Includes => "~=",
            Self::DashMatch => "|=",
            Self::Prefix => "^=",
            Self::Suffix => "$=",
            Self::Substring => "*=",
        }
    }
}

/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Examples: `[href]`, `[type=text]`, `[class~=active]`, `[lang|=en]`,
/// `[href^=https]`, `[src$=".png"]`, `[data-theme*=dark i]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    /// The attribute name, ASCII-lowercased.
    pub name: String,
    /// The operator and value; `None` for `[att]`.
    pub matcher: Option<(AttributeOperator, String)>,
    /// [§ 6.3 Case-sensitivity](https://www.w3.org/TR/selectors-4/#attribute-case)
    /// The `i` flag: compare values ASCII case-insensitively.
    pub case_insensitive: bool,
}

impl ToCss for AttributeSelector {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_char('[')?;
        dest.write_str(&self.name)?;
        if let Some((operator, value)) = &self.matcher {
            dest.write_str(operator.as_str())?;
            write_string(dest, value)?;
            if self.case_insensitive {
                dest.write_str(" i")?;
            }
        }
        dest.write_char(']')
    }
}

/// [§ 4.2 User action pseudo-classes](https://www.w3.org/TR/selectors-4/#useraction-pseudos)
/// and the location pseudo-classes that depend on navigation history.
///
/// A static document has no pointer, focus, history or fragment, so these
/// never match. They parse so that rules using them are not dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum UserActionState {
    /// `:hover`
    Hover,
    /// `:active`
    Active,
    /// `:focus`
    Focus,
    /// `:focus-within`
    FocusWithin,
    /// `:focus-visible`
    FocusVisible,
    /// `:visited`
    Visited,
    /// `:target`
    Target,
}

/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    /// [§ 14.1 :root](https://www.w3.org/TR/selectors-4/#the-root-pseudo)
    /// "The :root pseudo-class represents an element that is the root of the document."
    Root,
    /// [§ 14.2 :empty](https://www.w3.org/TR/selectors-4/#the-empty-pseudo)
    /// "The :empty pseudo-class represents an element that has no children
    /// except, optionally, document white space characters."
    Empty,
    /// [§ 14.4.1 :first-child](https://www.w3.org/TR/selectors-4/#the-first-child-pseudo)
    FirstChild,
    /// [§ 14.4.2 :last-child](https://www.w3.org/TR/selectors-4/#the-last-child-pseudo)
    LastChild,
    /// [§ 14.4.3 :only-child](https://www.w3.org/TR/selectors-4/#the-only-child-pseudo)
    OnlyChild,
    /// [§ 14.5.3 :first-of-type](https://www.w3.org/TR/selectors-4/#the-first-of-type-pseudo)
    FirstOfType,
    /// [§ 14.5.4 :last-of-type](https://www.w3.org/TR/selectors-4/#the-last-of-type-pseudo)
    LastOfType,
    /// [§ 14.5.5 :only-of-type](https://www.w3.org/TR/selectors-4/#the-only-of-type-pseudo)
    OnlyOfType,
    /// [§ 14.3.1 :nth-child()](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
    NthChild(Nth),
    /// [§ 14.3.2 :nth-last-child()](https://www.w3.org/TR/selectors-4/#the-nth-last-child-pseudo)
    NthLastChild(Nth),
    /// [§ 14.5.1 :nth-of-type()](https://www.w3.org/TR/selectors-4/#the-nth-of-type-pseudo)
    NthOfType(Nth),
    /// [§ 14.5.2 :nth-last-of-type()](https://www.w3.org/TR/selectors-4/#the-nth-last-of-type-pseudo)
    NthLastOfType(Nth),
    /// [§ 8.2 :link](https://www.w3.org/TR/selectors-4/#link)
    /// In a static document every link is unvisited.
    Link,
    /// [§ 8.1 :any-link](https://www.w3.org/TR/selectors-4/#the-any-link-pseudo)
    AnyLink,
    /// [§ 13.1.1 :enabled](https://www.w3.org/TR/selectors-4/#enableddisabled)
    Enabled,
    /// [§ 13.1.1 :disabled](https://www.w3.org/TR/selectors-4/#enableddisabled)
    Disabled,
    /// [§ 13.3.1 :checked](https://www.w3.org/TR/selectors-4/#checked)
    Checked,
    /// [§ 4.3 :not()](https://www.w3.org/TR/selectors-4/#negation)
    /// "represents an element that is not represented by its argument."
    Not(Vec<Selector>),
    /// [§ 4.2 :is()](https://www.w3.org/TR/selectors-4/#matches)
    /// "represents an element that is represented by any of its arguments."
    Is(Vec<Selector>),
    /// [§ 4.4 :where()](https://www.w3.org/TR/selectors-4/#zero-matches)
    /// Like `:is()`, but with zero specificity.
    Where(Vec<Selector>),
    /// A state that never applies to a static document.
    UserAction(UserActionState),
}

impl PseudoClass {
    /// The pseudo-class for a non-functional name, if known.
    #[must_use]
    pub fn from_keyword(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "root" => Self::Root,
            "empty" => Self::Empty,
            "first-child" => Self::FirstChild,
            "last-child" => Self::LastChild,
            "only-child" => Self::OnlyChild,
            "first-of-type" => Self::FirstOfType,
            "last-of-type" => Self::LastOfType,
            "only-of-type" => Self::OnlyOfType,
            "link" => Self::Link,
            "any-link" => Self::AnyLink,
            "enabled" => Self::Enabled,
            "disabled" => Self::Disabled,
            "checked" => Self::Checked,
            other => Self::UserAction(other.parse().ok()?),
        })
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// "The specificity of an :is(), :not(), or :has() pseudo-class is
    /// replaced by the specificity of the most specific complex selector in
    /// its selector list argument."
    /// "The specificity of a :where() pseudo-class is replaced by zero."
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Not(arguments) | Self::Is(arguments) => arguments
                .iter()
                .map(Selector::specificity)
                .max()
                .unwrap_or_default(),
            Self::Where(_) => Specificity::default(),
            _ => Specificity(0, 1, 0),
        }
    }
}

impl ToCss for PseudoClass {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        let (name, nth) = match self {
            Self::Root => (":root", None),
            Self::Empty => (":empty", None),
            Self::FirstChild => (":first-child", None),
            Self::LastChild => (":last-child", None),
            Self::OnlyChild => (":only-child", None),
            Self::FirstOfType => (":first-of-type", None),
            Self::LastOfType => (":last-of-type", None),
            Self::OnlyOfType => (":only-of-type", None),
            Self::NthChild(nth) => (":nth-child", Some(nth)),
            Self::NthLastChild(nth) => (":nth-last-child", Some(nth)),
            Self::NthOfType(nth) => (":nth-of-type", Some(nth)),
            Self::NthLastOfType(nth) => (":nth-last-of-type", Some(nth)),
            Self::Link => (":link", None),
            Self::AnyLink => (":any-link", None),
            Self::Enabled => (":enabled", None),
            Self::Disabled => (":disabled", None),
            Self::Checked => (":checked", None),
            Self::Not(arguments) => return write_functional(dest, ":not", arguments),
            Self::Is(arguments) => return write_functional(dest, ":is", arguments),
            Self::Where(arguments) => return write_functional(dest, ":where", arguments),
            Self::UserAction(state) => {
                dest.write_char(':')?;
                return dest.write_str((*state).into());
            }
        };
        dest.write_str(name)?;
        if let Some(nth) = nth {
            dest.write_char('(')?;
            nth.to_css(dest)?;
            dest.write_char(')')?;
        }
        Ok(())
    }
}

fn write_functional<W: Write>(dest: &mut W, name: &str, arguments: &[Selector]) -> fmt::Result {
    dest.write_str(name)?;
    dest.write_char('(')?;
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            dest.write_str(", ")?;
        }
        argument.to_css(dest)?;
    }
    dest.write_char(')')
}

/// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// "Pseudo-elements represent abstract elements of the document beyond
/// those elements explicitly created by the document language."
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PseudoElement {
    /// `::before`
    Before,
    /// `::after`
    After,
    /// `::first-line`
    FirstLine,
    /// `::first-letter`
    FirstLetter,
    /// `::marker`
    Marker,
    /// `::placeholder`
    Placeholder,
    /// `::selection`
    Selection,
}

impl PseudoElement {
    /// [§ 3.6.1](https://www.w3.org/TR/selectors-4/#pseudo-element-syntax)
    ///
    /// "For compatibility with existing style sheets, user agents must also
    /// accept the previous one-colon notation for pseudo-elements introduced
    /// in CSS levels 1 and 2 (namely, :first-line, :first-letter, :before and
    /// :after)."
    #[must_use]
    pub const fn allows_single_colon(self) -> bool {
        matches!(
            self,
            Self::Before | Self::After | Self::FirstLine | Self::FirstLetter
        )
    }
}

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    ///
    /// Stored ASCII-lowercased. Examples: `div`, `p`, `span`
    Type(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    Universal,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    Id(String),

    /// An attribute selector.
    Attribute(AttributeSelector),

    /// A pseudo-class.
    PseudoClass(PseudoClass),

    /// A pseudo-element. Only valid at the end of a selector.
    PseudoElement(PseudoElement),
}

impl SimpleSelector {
    /// The contribution of this simple selector to specificity.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            // "count the number of ID selectors in the selector (= A)"
            Self::Id(_) => Specificity(1, 0, 0),
            // "count the number of class selectors, attributes selectors,
            // and pseudo-classes in the selector (= B)"
            Self::Class(_) | Self::Attribute(_) => Specificity(0, 1, 0),
            Self::PseudoClass(pseudo_class) => pseudo_class.specificity(),
            // "count the number of type selectors and pseudo-elements
            // in the selector (= C)"
            Self::Type(_) | Self::PseudoElement(_) => Specificity(0, 0, 1),
            // "ignore the universal selector"
            Self::Universal => Specificity::default(),
        }
    }
}

impl ToCss for SimpleSelector {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::Type(name) => write_identifier(dest, name),
            Self::Universal => dest.write_char('*'),
            Self::Class(name) => {
                dest.write_char('.')?;
                write_identifier(dest, name)
            }
            Self::Id(id) => {
                dest.write_char('#')?;
                write_identifier(dest, id)
            }
            Self::Attribute(attribute) => attribute.to_css(dest),
            Self::PseudoClass(pseudo_class) => pseudo_class.to_css(dest),
            Self::PseudoElement(pseudo_element) => {
                dest.write_str("::")?;
                dest.write_str((*pseudo_element).into())
            }
        }
    }
}

/// [CSSOM § 2.1 Serialize an identifier](https://www.w3.org/TR/cssom-1/#serialize-an-identifier)
///
/// Leading digits are written as code point escapes, other characters that
/// cannot appear in an identifier are backslash-escaped.
fn write_identifier<W: Write>(dest: &mut W, name: &str) -> fmt::Result {
    let hyphen_start = name.starts_with('-');
    for (i, c) in name.chars().enumerate() {
        let leading_digit = c.is_ascii_digit() && (i == 0 || (i == 1 && hyphen_start));
        if leading_digit {
            write!(dest, "\\{:x} ", u32::from(c))?;
        } else if is_ident_code_point(c) {
            dest.write_char(c)?;
        } else {
            dest.write_char('\\')?;
            dest.write_char(c)?;
        }
    }
    Ok(())
}

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// Complex selectors are left-associative: `a > b c` is
/// `Complex { left: Complex { a, Child, b }, Descendant, c }`, so `right`
/// is always the compound for the element being matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A lone simple selector.
    Simple(SimpleSelector),

    /// [§ 3.1](https://www.w3.org/TR/selectors-4/#compound)
    /// "A compound selector is a sequence of simple selectors that are not
    /// separated by a combinator, and represents a set of simultaneous
    /// conditions on a single element."
    Compound(Vec<SimpleSelector>),

    /// [§ 3.1](https://www.w3.org/TR/selectors-4/#complex)
    /// "A complex selector is a sequence of one or more compound selectors
    /// separated by combinators."
    Complex {
        /// The selector for the related element.
        left: Box<Selector>,
        /// How the two elements are related.
        combinator: Combinator,
        /// The selector for the subject element.
        right: Box<Selector>,
    },

    /// Text that could not be parsed, kept for serialization.
    Unknown(Option<String>),
}

impl Selector {
    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Compound and complex selectors sum the contributions of their parts;
    /// combinators contribute nothing and unknown selectors are zero.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Simple(simple) => simple.specificity(),
            Self::Compound(simples) => simples
                .iter()
                .map(SimpleSelector::specificity)
                .fold(Specificity::default(), Add::add),
            Self::Complex { left, right, .. } => left.specificity() + right.specificity(),
            Self::Unknown(_) => Specificity::default(),
        }
    }

    /// True for [`Selector::Unknown`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// The simple selectors of the subject compound.
    #[must_use]
    pub fn subject(&self) -> &[SimpleSelector] {
        match self {
            Self::Simple(simple) => core::slice::from_ref(simple),
            Self::Compound(simples) => simples,
            Self::Complex { right, .. } => right.subject(),
            Self::Unknown(_) => &[],
        }
    }

    /// The pseudo-element this selector targets, if any.
    #[must_use]
    pub fn pseudo_element(&self) -> Option<PseudoElement> {
        self.subject().iter().find_map(|simple| match simple {
            SimpleSelector::PseudoElement(pseudo_element) => Some(*pseudo_element),
            _ => None,
        })
    }
}

impl ToCss for Selector {
    /// Valid selectors serialize to equivalent CSS; unknown selectors write
    /// back their source text unchanged.
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::Simple(simple) => simple.to_css(dest),
            Self::Compound(simples) => simples.iter().try_for_each(|simple| simple.to_css(dest)),
            Self::Complex {
                left,
                combinator,
                right,
            } => {
                left.to_css(dest)?;
                combinator.to_css(dest)?;
                right.to_css(dest)
            }
            Self::Unknown(text) => dest.write_str(text.as_deref().unwrap_or_default()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_css(f)
    }
}

/// [§ 3.1](https://www.w3.org/TR/selectors-4/#selector-list)
///
/// "A list of simple/compound/complex selectors is a comma-separated list of
/// simple, compound, or complex selectors."
///
/// "If just one of these selectors were invalid, the entire selector list
/// would be invalid." An invalid list holds a single unknown selector with
/// the whole source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    /// Parse a comma-separated list, degrading to one unknown selector.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match Self::try_parse(text) {
            Ok(list) => list,
            Err(error) => Self {
                selectors: vec![unknown_selector(text, &error)],
            },
        }
    }

    /// Parse a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError`] in any member.
    pub fn try_parse(text: &str) -> Result<Self, SelectorError> {
        parser::parse_list(text).map(|selectors| Self { selectors })
    }

    /// The members, in source order.
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// True if the list failed to parse.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.selectors.iter().any(Selector::is_unknown)
    }

    /// True if any member matches `element`.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        self.selectors.iter().any(|selector| selector.matches(element))
    }

    /// The highest specificity among the members that match `element`, or
    /// `None` if none does. This is the specificity the cascade uses for a
    /// style rule with this selector list.
    #[must_use]
    pub fn matching_specificity<E: Element>(&self, element: &E) -> Option<Specificity> {
        self.selectors
            .iter()
            .filter(|selector| selector.matches(element))
            .map(Selector::specificity)
            .max()
    }
}

impl ToCss for SelectorList {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                dest.write_str(", ")?;
            }
            selector.to_css(dest)?;
        }
        Ok(())
    }
}

/// Parse a single selector.
///
/// [§ 3 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax)
///
/// # Errors
///
/// Returns a [`SelectorError`] describing the first problem. A
/// comma-separated list is [`SelectorError::UnexpectedList`]; use
/// [`parse_selector_list`] for those.
pub fn try_parse_selector(text: &str) -> Result<Selector, SelectorError> {
    let mut selectors = parser::parse_list(text)?;
    if selectors.len() > 1 {
        return Err(SelectorError::UnexpectedList);
    }
    selectors.pop().ok_or(SelectorError::Empty)
}

/// Parse a single selector, degrading to [`Selector::Unknown`] on error.
///
/// Degradation is reported once per distinct message through `warn_once`.
#[must_use]
pub fn parse_selector(text: &str) -> Selector {
    try_parse_selector(text).unwrap_or_else(|error| unknown_selector(text, &error))
}

/// Parse a selector list, degrading to a single unknown selector on error.
#[must_use]
pub fn parse_selector_list(text: &str) -> SelectorList {
    SelectorList::parse(text)
}

/// Keeps `text` exactly as given, surrounding whitespace included.
fn unknown_selector(text: &str, error: &SelectorError) -> Selector {
    let _ = warn_once(
        "CSS",
        &format!("unsupported selector '{}': {error}", text.trim()),
    );
    Selector::Unknown((!text.is_empty()).then(|| text.to_string()))
}

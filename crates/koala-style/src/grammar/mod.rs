//! Composable value grammars.
//!
//! [CSS Values § 2 Value Definition Syntax](https://www.w3.org/TR/css-values-4/#value-defs)
//!
//! A [`Grammar`] converts a [`CssValue`] into a typed value or reports why
//! it cannot. Property grammars are built once from a handful of
//! combinators and reused for every validation:
//!
//! ```
//! use koala_style::grammar::{self, converters};
//! use koala_style::{Grammar, Time, parse_value};
//!
//! let delays = grammar::list_of(grammar::convert(converters::time));
//! let value = parse_value("1s, 250ms").unwrap();
//! assert_eq!(
//!     delays.try_convert(&value).unwrap(),
//!     vec![Time::from_seconds(1.0), Time::from_milliseconds(250.0)],
//! );
//! ```
//!
//! Combinators never have side effects: a failed conversion leaves nothing
//! behind, which is what lets properties apply a result all-or-nothing.

/// Converters from single values to domain types.
pub mod converters;

use core::marker::PhantomData;

use strum::IntoEnumIterator;

use crate::error::GrammarError;
use crate::value::CssValue;

/// A rule that accepts some shapes of [`CssValue`] and converts them.
///
/// Grammars are shared between threads and hold no mutable state.
pub trait Grammar: Send + Sync {
    /// The typed result of a successful conversion.
    type Output;

    /// Convert `value`, or explain why it does not match.
    ///
    /// # Errors
    ///
    /// Returns a [`GrammarError`] if `value` is not accepted by this grammar.
    fn try_convert(&self, value: &CssValue) -> Result<Self::Output, GrammarError>;
}

/// A type-erased grammar, for ordered collections of alternatives.
pub type BoxedGrammar<T> = Box<dyn Grammar<Output = T>>;

impl<G: Grammar + ?Sized> Grammar for Box<G> {
    type Output = G::Output;

    fn try_convert(&self, value: &CssValue) -> Result<Self::Output, GrammarError> {
        (**self).try_convert(value)
    }
}

/// Accepts one of a fixed set of keywords. See [`one_of`].
pub struct OneOf<T> {
    options: Vec<(&'static str, T)>,
}

/// Accept exactly one of `options`' keywords, ASCII case-insensitively,
/// and produce a clone of the paired constant.
///
/// ```
/// use koala_style::grammar::one_of;
/// use koala_style::{CssValue, Grammar};
///
/// let none = one_of([("none", Vec::<u8>::new())]);
/// assert_eq!(none.try_convert(&CssValue::ident("NONE")), Ok(vec![]));
/// ```
///
/// # Panics
///
/// Panics if `options` is empty; a grammar that can never match is a
/// programming error.
#[must_use]
pub fn one_of<T>(options: impl IntoIterator<Item = (&'static str, T)>) -> OneOf<T>
where
    T: Clone + Send + Sync,
{
    let options: Vec<_> = options.into_iter().collect();
    assert!(!options.is_empty(), "one_of needs at least one keyword");
    OneOf { options }
}

impl<T: Clone + Send + Sync> Grammar for OneOf<T> {
    type Output = T;

    fn try_convert(&self, value: &CssValue) -> Result<T, GrammarError> {
        let keyword = value.as_ident();
        self.options
            .iter()
            .find(|(name, _)| keyword.is_some_and(|keyword| keyword.eq_ignore_ascii_case(name)))
            .map(|(_, constant)| constant.clone())
            .ok_or_else(|| {
                let names: Vec<_> = self.options.iter().map(|(name, _)| *name).collect();
                GrammarError::mismatch(format!("one of `{}`", names.join("`, `")))
            })
    }
}

/// Accept any variant of a keyword enum by its CSS name.
///
/// The enum's `IntoStaticStr` names are the keywords, so a
/// `#[strum(serialize_all = "kebab-case")]` enum maps `AlternateReverse`
/// to `alternate-reverse`.
#[must_use]
pub fn keywords<E>() -> OneOf<E>
where
    E: IntoEnumIterator + Into<&'static str> + Clone + Send + Sync,
{
    one_of(E::iter().map(|variant| (variant.clone().into(), variant)))
}

/// Applies an element grammar to every comma-separated item. See [`list_of`].
pub struct ListOf<G> {
    element: G,
}

/// [§ 2.1 Component value multipliers](https://www.w3.org/TR/css-values-4/#mult-comma)
///
/// "A hash mark (#) indicates that the preceding type, word, or group
/// occurs one or more times, separated by comma tokens"
///
/// Succeeds only if every item converts; the output keeps the input order.
/// A value without commas is a one-item list.
#[must_use]
pub const fn list_of<G: Grammar>(element: G) -> ListOf<G> {
    ListOf { element }
}

impl<G: Grammar> Grammar for ListOf<G> {
    type Output = Vec<G::Output>;

    fn try_convert(&self, value: &CssValue) -> Result<Self::Output, GrammarError> {
        let items = value.comma_items();
        if items.is_empty() {
            return Err(GrammarError::mismatch("at least one list item"));
        }
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.element
                    .try_convert(item)
                    .map_err(|source| GrammarError::InvalidListItem {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect()
    }
}

/// Tries two grammars in order. See [`either`].
pub struct Either<A, B> {
    first: A,
    second: B,
}

/// [§ 2.2 Component value combinators](https://www.w3.org/TR/css-values-4/#component-combinators)
///
/// "A bar (|) separates two or more alternatives: exactly one of them must occur."
///
/// Tries `first`, then `second`; the first success wins. On double failure
/// the error from `second` is reported.
#[must_use]
pub const fn either<A, B>(first: A, second: B) -> Either<A, B>
where
    A: Grammar,
    B: Grammar<Output = A::Output>,
{
    Either { first, second }
}

impl<A, B> Grammar for Either<A, B>
where
    A: Grammar,
    B: Grammar<Output = A::Output>,
{
    type Output = A::Output;

    fn try_convert(&self, value: &CssValue) -> Result<Self::Output, GrammarError> {
        self.first
            .try_convert(value)
            .or_else(|_| self.second.try_convert(value))
    }
}

/// Tries an ordered collection of alternatives. See [`any_of`].
pub struct AnyOf<T> {
    alternatives: Vec<BoxedGrammar<T>>,
}

/// The n-ary form of [`either`]: tries each alternative in order.
///
/// # Panics
///
/// Panics if `alternatives` is empty.
#[must_use]
pub fn any_of<T>(alternatives: Vec<BoxedGrammar<T>>) -> AnyOf<T> {
    assert!(!alternatives.is_empty(), "any_of needs at least one alternative");
    AnyOf { alternatives }
}

impl<T> Grammar for AnyOf<T> {
    type Output = T;

    fn try_convert(&self, value: &CssValue) -> Result<T, GrammarError> {
        let mut last_error = None;
        for alternative in &self.alternatives {
            match alternative.try_convert(value) {
                Ok(converted) => return Ok(converted),
                Err(error) => last_error = Some(error),
            }
        }
        Err(last_error.unwrap_or_else(|| GrammarError::mismatch("an alternative")))
    }
}

/// Transforms the output of a grammar. See [`GrammarExt::map`].
pub struct Map<G, F, T> {
    inner: G,
    transform: F,
    output: PhantomData<fn() -> T>,
}

impl<G, F, T> Grammar for Map<G, F, T>
where
    G: Grammar,
    F: Fn(G::Output) -> T + Send + Sync,
{
    type Output = T;

    fn try_convert(&self, value: &CssValue) -> Result<T, GrammarError> {
        self.inner.try_convert(value).map(&self.transform)
    }
}

/// A converter function used as a grammar. See [`convert`].
pub struct Convert<F, T> {
    converter: F,
    output: PhantomData<fn() -> T>,
}

/// Lift a converter function (see [`converters`]) into a grammar.
#[must_use]
pub const fn convert<F, T>(converter: F) -> Convert<F, T>
where
    F: Fn(&CssValue) -> Result<T, GrammarError> + Send + Sync,
{
    Convert {
        converter,
        output: PhantomData,
    }
}

impl<F, T> Grammar for Convert<F, T>
where
    F: Fn(&CssValue) -> Result<T, GrammarError> + Send + Sync,
{
    type Output = T;

    fn try_convert(&self, value: &CssValue) -> Result<T, GrammarError> {
        (self.converter)(value)
    }
}

/// Adapters available on every grammar.
pub trait GrammarExt: Grammar + Sized {
    /// `either(self, other)`.
    fn or<B>(self, other: B) -> Either<Self, B>
    where
        B: Grammar<Output = Self::Output>,
    {
        either(self, other)
    }

    /// Transform successful output with `transform`.
    fn map<T, F>(self, transform: F) -> Map<Self, F, T>
    where
        F: Fn(Self::Output) -> T + Send + Sync,
    {
        Map {
            inner: self,
            transform,
            output: PhantomData,
        }
    }

    /// Erase the grammar's type.
    fn boxed(self) -> BoxedGrammar<Self::Output>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<G: Grammar> GrammarExt for G {}

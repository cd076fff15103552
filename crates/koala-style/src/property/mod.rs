//! Typed CSS properties.
//!
//! A property is described once by a zero-sized [`PropertyDefinition`]
//! (name, flags, initial value, grammar) and instantiated as a
//! [`Property<D>`], which owns the current value list. Declaration blocks
//! hold properties of different value types through the object-safe
//! [`CssProperty`] trait.
//!
//! ```
//! use koala_style::property::longhands::TransitionDelay;
//! use koala_style::{Property, Time, parse_value};
//!
//! let mut delay = Property::<TransitionDelay>::new();
//! assert_eq!(delay.values(), [Time::ZERO]);
//!
//! assert!(delay.is_valid(&parse_value("1s, 200ms").unwrap()));
//! assert_eq!(delay.css_text(), "1s, 0.2s");
//!
//! // Rejected values leave the property untouched.
//! assert!(!delay.is_valid(&parse_value("0").unwrap()));
//! assert_eq!(delay.values().len(), 2);
//! ```

/// The supported longhand properties.
pub mod longhands;

use core::any::Any;
use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::GrammarError;
use crate::grammar::BoxedGrammar;
use crate::value::{CssValue, ToCss, write_separated};

/// Static description of one CSS property.
///
/// Implementors are zero-sized marker types; see [`longhands`].
pub trait PropertyDefinition: 'static {
    /// The type of one item in the property's value list.
    type Value: Clone + fmt::Debug + PartialEq + ToCss + Serialize + Send + Sync + 'static;

    /// The property name.
    const NAME: PropertyName;

    /// [CSS Values § Animation types](https://www.w3.org/TR/css-values-4/#animation-type)
    ///
    /// True if the typed values can be interpolated by an animation.
    const ANIMATABLE: bool;

    /// [CSS Cascade § 7.2 Inherited Properties](https://www.w3.org/TR/css-cascade-4/#inheriting)
    ///
    /// True if `unset` behaves as `inherit` for this property.
    const INHERITED: bool;

    /// True if an empty value list is written as `none`.
    const NONE_WHEN_EMPTY: bool = false;

    /// The value list after `reset` and for the `initial` keyword.
    fn initial_value() -> Vec<Self::Value>;

    /// The grammar that converts a declaration value to a value list.
    fn grammar() -> BoxedGrammar<Vec<Self::Value>>;
}

/// [CSS Cascade § 7.3 Explicit Defaulting](https://www.w3.org/TR/css-cascade-4/#defaulting-keywords)
///
/// "Several CSS-wide property values are defined below; declaring a property
/// to have these values explicitly specifies a particular defaulting behavior."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CssWideKeyword {
    /// "The inherit keyword represents the computed value of the property on
    /// the element's parent."
    Inherit,
    /// "The initial keyword represents the value defined as the property's
    /// initial value."
    Initial,
    /// "If the cascaded value of a property is the unset keyword, then if it
    /// is an inherited property, this is treated as inherit, and if it is
    /// not, this is treated as initial."
    Unset,
}

impl CssWideKeyword {
    /// The keyword `value` spells, if any.
    #[must_use]
    pub fn from_value(value: &CssValue) -> Option<Self> {
        value.as_ident().and_then(|ident| ident.parse().ok())
    }
}

/// A property instance: a definition plus its current value list.
///
/// The list only changes through [`reset`](Self::reset) and successful
/// validation. A failed validation never leaves a partial result behind.
pub struct Property<D: PropertyDefinition> {
    values: Vec<D::Value>,
    inherited: bool,
    grammar: BoxedGrammar<Vec<D::Value>>,
}

impl<D: PropertyDefinition> Property<D> {
    /// A property holding its initial value. The grammar is built here and
    /// reused for every validation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: D::initial_value(),
            inherited: false,
            grammar: D::grammar(),
        }
    }

    /// The property name.
    #[must_use]
    pub const fn name(&self) -> PropertyName {
        D::NAME
    }

    /// See [`PropertyDefinition::ANIMATABLE`].
    #[must_use]
    pub const fn is_animatable(&self) -> bool {
        D::ANIMATABLE
    }

    /// See [`PropertyDefinition::INHERITED`].
    #[must_use]
    pub const fn inherits(&self) -> bool {
        D::INHERITED
    }

    /// True after `inherit` (or `unset` on an inherited property) until the
    /// next reset or successful validation.
    #[must_use]
    pub const fn is_inherited(&self) -> bool {
        self.inherited
    }

    /// The current value list.
    #[must_use]
    pub fn values(&self) -> &[D::Value] {
        &self.values
    }

    /// Restore the initial value list and clear the inherited flag.
    pub fn reset(&mut self) {
        self.values = D::initial_value();
        self.inherited = false;
    }

    /// Convert `value` and, on success, replace the whole value list.
    ///
    /// # Errors
    ///
    /// Returns the grammar's error; the property is left unchanged.
    pub fn validate(&mut self, value: &CssValue) -> Result<(), GrammarError> {
        let converted = self.grammar.try_convert(value)?;
        self.values = converted;
        self.inherited = false;
        Ok(())
    }

    /// [`validate`](Self::validate) reduced to a boolean, the way CSS error
    /// recovery sees it: invalid declarations are ignored.
    pub fn is_valid(&mut self, value: &CssValue) -> bool {
        let result = self.validate(value);
        #[cfg(feature = "grammar-trace")]
        if let Err(error) = &result {
            eprintln!("[GRAMMAR] {}: rejected `{value}`: {error}", D::NAME);
        }
        result.is_ok()
    }

    /// Apply a declaration value, honoring the CSS-wide keywords.
    pub fn try_set(&mut self, value: &CssValue) -> bool {
        match CssWideKeyword::from_value(value) {
            Some(CssWideKeyword::Inherit) => {
                self.inherited = true;
                true
            }
            Some(CssWideKeyword::Unset) if D::INHERITED => {
                self.inherited = true;
                true
            }
            Some(CssWideKeyword::Initial | CssWideKeyword::Unset) => {
                self.reset();
                true
            }
            None => self.is_valid(value),
        }
    }

    /// [CSSOM § 6.7.2 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
    ///
    /// The value list as CSS text, comma separated.
    #[must_use]
    pub fn css_text(&self) -> String {
        if self.inherited {
            return "inherit".to_string();
        }
        if self.values.is_empty() && D::NONE_WHEN_EMPTY {
            return "none".to_string();
        }
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = write_separated(&mut text, &self.values, ", ");
        text
    }
}

impl<D: PropertyDefinition> Default for Property<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: PropertyDefinition> Clone for Property<D> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            inherited: self.inherited,
            grammar: D::grammar(),
        }
    }
}

impl<D: PropertyDefinition> fmt::Debug for Property<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &D::NAME)
            .field("values", &self.values)
            .field("inherited", &self.inherited)
            .finish_non_exhaustive()
    }
}

/// A property of any value type.
pub trait CssProperty: Any + fmt::Debug + Send + Sync {
    /// The property name.
    fn name(&self) -> PropertyName;

    /// See [`PropertyDefinition::ANIMATABLE`].
    fn is_animatable(&self) -> bool;

    /// See [`PropertyDefinition::INHERITED`].
    fn inherits(&self) -> bool;

    /// See [`Property::is_inherited`].
    fn is_inherited(&self) -> bool;

    /// See [`Property::reset`].
    fn reset(&mut self);

    /// See [`Property::validate`].
    ///
    /// # Errors
    ///
    /// Returns the grammar's error; the property is left unchanged.
    fn validate(&mut self, value: &CssValue) -> Result<(), GrammarError>;

    /// See [`Property::is_valid`].
    fn is_valid(&mut self, value: &CssValue) -> bool;

    /// See [`Property::try_set`].
    fn try_set(&mut self, value: &CssValue) -> bool;

    /// See [`Property::css_text`].
    fn css_text(&self) -> String;

    /// The typed value list as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be represented in JSON.
    fn values_json(&self) -> Result<serde_json::Value, serde_json::Error>;

    /// Upcast for downcasting to a concrete [`Property<D>`].
    fn as_any(&self) -> &dyn Any;
}

impl<D: PropertyDefinition> CssProperty for Property<D> {
    fn name(&self) -> PropertyName {
        D::NAME
    }

    fn is_animatable(&self) -> bool {
        D::ANIMATABLE
    }

    fn inherits(&self) -> bool {
        D::INHERITED
    }

    fn is_inherited(&self) -> bool {
        self.inherited
    }

    fn reset(&mut self) {
        Self::reset(self);
    }

    fn validate(&mut self, value: &CssValue) -> Result<(), GrammarError> {
        Self::validate(self, value)
    }

    fn is_valid(&mut self, value: &CssValue) -> bool {
        Self::is_valid(self, value)
    }

    fn try_set(&mut self, value: &CssValue) -> bool {
        Self::try_set(self, value)
    }

    fn css_text(&self) -> String {
        Self::css_text(self)
    }

    fn values_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.values)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Every property this crate knows, by its CSS name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyName {
    /// `box-shadow`
    BoxShadow,
    /// `text-shadow`
    TextShadow,
    /// `transition-delay`
    TransitionDelay,
    /// `transition-duration`
    TransitionDuration,
    /// `transition-timing-function`
    TransitionTimingFunction,
    /// `transition-property`
    TransitionProperty,
    /// `animation-delay`
    AnimationDelay,
    /// `animation-duration`
    AnimationDuration,
    /// `animation-timing-function`
    AnimationTimingFunction,
    /// `animation-iteration-count`
    AnimationIterationCount,
    /// `animation-direction`
    AnimationDirection,
    /// `visibility`
    Visibility,
}

impl PropertyName {
    /// A fresh property instance holding its initial value.
    #[must_use]
    pub fn create(self) -> Box<dyn CssProperty> {
        use longhands as l;
        match self {
            Self::BoxShadow => Box::new(Property::<l::BoxShadow>::new()),
            Self::TextShadow => Box::new(Property::<l::TextShadow>::new()),
            Self::TransitionDelay => Box::new(Property::<l::TransitionDelay>::new()),
            Self::TransitionDuration => Box::new(Property::<l::TransitionDuration>::new()),
            Self::TransitionTimingFunction => {
                Box::new(Property::<l::TransitionTimingFunction>::new())
            }
            Self::TransitionProperty => Box::new(Property::<l::TransitionProperty>::new()),
            Self::AnimationDelay => Box::new(Property::<l::AnimationDelay>::new()),
            Self::AnimationDuration => Box::new(Property::<l::AnimationDuration>::new()),
            Self::AnimationTimingFunction => Box::new(Property::<l::AnimationTimingFunction>::new()),
            Self::AnimationIterationCount => Box::new(Property::<l::AnimationIterationCount>::new()),
            Self::AnimationDirection => Box::new(Property::<l::AnimationDirection>::new()),
            Self::Visibility => Box::new(Property::<l::Visibility>::new()),
        }
    }

    /// The CSS name, e.g. `"box-shadow"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

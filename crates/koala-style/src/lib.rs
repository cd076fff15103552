//! CSS value grammars, typed properties, and selector matching for the Koala style engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value model** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Component values (keywords, numbers, percentages, dimensions, hashes,
//!     strings, delimiters, functions) and comma/whitespace separated lists
//!   - A small declaration-value tokenizer and parser for feeding values in
//!     from text
//!
//! - **Value grammars** ([§ 2 Value Definition Syntax](https://www.w3.org/TR/css-values-4/#value-defs))
//!   - `one_of`, `list_of`, `either`, `any_of`, `map`, `convert`
//!   - Converters for `<length>`, `<time>`, `<color>`, `<shadow>`,
//!     `<easing-function>`, numbers, and keyword enums
//!
//! - **Properties**
//!   - `box-shadow`, `text-shadow`, the `transition-*` and `animation-*`
//!     longhands, `visibility`
//!   - CSS-wide keywords (`inherit`, `initial`, `unset`)
//!   - Declaration blocks with serialization
//!
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, universal, class, ID, attribute, pseudo-class and pseudo-element selectors
//!   - Compound and complex selectors with all four combinators
//!   - Specificity calculation, matching, serialization
//!   - An `Unknown` selector for text that fails to parse
//!
//! # Not Yet Implemented
//!
//! - Stylesheet and rule parsing
//! - `calc()` and other math functions
//! - Namespaced type and attribute selectors
//! - `:has()`

/// Error types for value parsing, grammar conversion, and selector parsing.
pub mod error;
/// Typed declaration blocks per [CSSOM § 6.6](https://www.w3.org/TR/cssom-1/#css-declaration-blocks).
pub mod declaration;
/// Composable value grammars per [CSS Values § 2](https://www.w3.org/TR/css-values-4/#value-defs).
pub mod grammar;
/// Property definitions and the property container.
pub mod property;
/// Selector parsing, specificity and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Declaration-value tokenizer and parser per [CSS Syntax Level 3](https://www.w3.org/TR/css-syntax-3/).
pub mod syntax;
/// Domain value types produced by the grammars.
pub mod types;
/// Tokenized CSS values and CSS text serialization.
pub mod value;

pub use declaration::StyleDeclaration;
pub use error::{GrammarError, SelectorError, SyntaxError};
pub use grammar::{BoxedGrammar, Grammar, GrammarExt};
pub use property::{CssProperty, CssWideKeyword, Property, PropertyDefinition, PropertyName};
pub use selector::{
    Combinator, Element, Selector, SelectorList, SimpleSelector, Specificity, parse_selector,
    parse_selector_list, try_parse_selector,
};
pub use syntax::parse_value;
pub use types::{
    AnimationDirection, Color, IterationCount, Length, LengthUnit, Rgba, Shadow, StepPosition,
    Time, TimingFunction, TransitionTarget, Visibility,
};
pub use value::{Component, CssValue, Separator, ToCss};

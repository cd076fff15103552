//! Selector text to [`Selector`] values.
//!
//! [§ 18 Grammar](https://www.w3.org/TR/selectors-4/#grammar)
//!
//! ```text
//! <selector-list> = <complex-selector>#
//! <complex-selector> = <compound-selector> [ <combinator>? <compound-selector> ]*
//! <compound-selector> = [ <type-selector>? <subclass-selector>*
//!                         [ <pseudo-element-selector> ]? ]!
//! ```

use super::nth::Nth;
use super::{
    AttributeOperator, AttributeSelector, Combinator, PseudoClass, PseudoElement, Selector,
    SimpleSelector,
};
use crate::error::SelectorError;
use crate::syntax::tokenizer::{is_ident_code_point, is_ident_start_code_point};

/// Parse a comma-separated selector list. Any invalid member fails the list.
pub(super) fn parse_list(text: &str) -> Result<Vec<Selector>, SelectorError> {
    if text.trim().is_empty() {
        return Err(SelectorError::Empty);
    }
    SelectorParser::new(text).selector_list(false)
}

struct SelectorParser {
    chars: Vec<char>,
    position: usize,
}

impl SelectorParser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    /// Returns true if any whitespace was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.position += 1;
        }
        self.position != start
    }

    fn unexpected(&self) -> SelectorError {
        self.peek()
            .map_or(SelectorError::UnexpectedEnd, SelectorError::UnexpectedChar)
    }

    /// Stops in front of `)` when `nested`, for functional pseudo-classes.
    fn selector_list(&mut self, nested: bool) -> Result<Vec<Selector>, SelectorError> {
        let mut selectors = Vec::new();
        loop {
            selectors.push(self.complex_selector()?);
            match self.peek() {
                Some(',') => self.position += 1,
                Some(')') if nested => return Ok(selectors),
                Some(')') => return Err(SelectorError::UnbalancedParens),
                None if nested => return Err(SelectorError::UnbalancedParens),
                None => return Ok(selectors),
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
    }

    /// [§ 3.1](https://www.w3.org/TR/selectors-4/#complex)
    ///
    /// Builds the left-associative chain; leaves the parser at `,`, `)` or
    /// the end of input.
    fn complex_selector(&mut self) -> Result<Selector, SelectorError> {
        let _ = self.skip_whitespace();
        let mut selector = self.required_compound(None)?;

        loop {
            let had_whitespace = self.skip_whitespace();
            let (combinator, symbol) = match self.peek() {
                None | Some(',' | ')') => return Ok(selector),
                Some('>') => (Combinator::Child, '>'),
                Some('+') => (Combinator::NextSibling, '+'),
                Some('~') => (Combinator::SubsequentSibling, '~'),
                Some(_) if had_whitespace => (Combinator::Descendant, ' '),
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            };

            // [§ 3.6.1](https://www.w3.org/TR/selectors-4/#pseudo-element-syntax)
            // "Pseudo-elements [...] must be the last simple selector."
            if selector.pseudo_element().is_some() {
                return Err(SelectorError::PseudoElementNotLast);
            }

            let dangling = if combinator == Combinator::Descendant {
                None
            } else {
                self.position += 1;
                let _ = self.skip_whitespace();
                Some(symbol)
            };
            let right = self.required_compound(dangling)?;
            selector = Selector::Complex {
                left: Box::new(selector),
                combinator,
                right: Box::new(right),
            };
        }
    }

    fn required_compound(&mut self, after: Option<char>) -> Result<Selector, SelectorError> {
        if let Some(compound) = self.compound_selector()? {
            return Ok(compound);
        }
        Err(match (after, self.peek()) {
            (Some(symbol), _) => SelectorError::DanglingCombinator(symbol),
            (None, Some(symbol @ ('>' | '+' | '~'))) => SelectorError::DanglingCombinator(symbol),
            _ => self.unexpected(),
        })
    }

    /// [§ 3.1](https://www.w3.org/TR/selectors-4/#compound)
    ///
    /// "If it contains a type selector or universal selector, that selector
    /// must come first in the sequence."
    fn compound_selector(&mut self) -> Result<Option<Selector>, SelectorError> {
        let mut simples = Vec::new();

        if self.peek() == Some('*') {
            self.position += 1;
            simples.push(SimpleSelector::Universal);
        } else if let Some(name) = self.ident() {
            simples.push(SimpleSelector::Type(name.to_ascii_lowercase()));
        }

        loop {
            let simple = match self.peek() {
                Some('.') => {
                    self.position += 1;
                    SimpleSelector::Class(self.required_ident()?)
                }
                Some('#') => {
                    self.position += 1;
                    SimpleSelector::Id(self.required_ident()?)
                }
                Some('[') => {
                    self.position += 1;
                    SimpleSelector::Attribute(self.attribute()?)
                }
                Some(':') => {
                    self.position += 1;
                    self.pseudo()?
                }
                _ => break,
            };
            if simples
                .iter()
                .any(|simple| matches!(simple, SimpleSelector::PseudoElement(_)))
            {
                return Err(SelectorError::PseudoElementNotLast);
            }
            simples.push(simple);
        }

        Ok(match simples.len() {
            0 => None,
            1 => simples.pop().map(Selector::Simple),
            _ => Some(Selector::Compound(simples)),
        })
    }

    /// [CSS Syntax § 4.3.9](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn starts_ident(&self) -> bool {
        match (self.peek(), self.peek_at(1)) {
            (Some('-'), Some(next)) => {
                is_ident_start_code_point(next) || next == '-' || next == '\\'
            }
            (Some('\\'), Some(next)) => next != '\n',
            (Some(c), _) => is_ident_start_code_point(c),
            (None, _) => false,
        }
    }

    /// [CSS Syntax § 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn ident(&mut self) -> Option<String> {
        if !self.starts_ident() {
            return None;
        }
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_ident_code_point(c) {
                name.push(c);
                self.position += 1;
            } else if c == '\\' && self.peek_at(1).is_some_and(|next| next != '\n') {
                self.position += 1;
                name.push(self.escape());
            } else {
                break;
            }
        }
        Some(name)
    }

    fn required_ident(&mut self) -> Result<String, SelectorError> {
        self.ident().ok_or_else(|| self.unexpected())
    }

    /// [CSS Syntax § 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Called after the backslash.
    fn escape(&mut self) -> char {
        let mut hex = String::new();
        while hex.len() < 6 && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            hex.extend(self.bump());
        }
        if hex.is_empty() {
            return self.bump().unwrap_or(char::REPLACEMENT_CHARACTER);
        }
        // "If the next input code point is whitespace, consume it as well."
        if self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.position += 1;
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .filter(|&c| c != '\0')
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// [CSS Syntax § 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// Called after the opening quote.
    fn string(&mut self, quote: char) -> Result<String, SelectorError> {
        let mut value = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(value),
                None | Some('\n') => return Err(SelectorError::UnterminatedString),
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.escape()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Called after `[`.
    fn attribute(&mut self) -> Result<AttributeSelector, SelectorError> {
        let _ = self.skip_whitespace();
        let name = self
            .ident()
            .ok_or(SelectorError::InvalidAttribute)?
            .to_ascii_lowercase();
        let _ = self.skip_whitespace();

        let operator = match self.bump() {
            Some(']') => {
                return Ok(AttributeSelector {
                    name,
                    matcher: None,
                    case_insensitive: false,
                });
            }
            Some('=') => AttributeOperator::Equals,
            Some(c @ ('~' | '|' | '^' | '$' | '*')) if self.peek() == Some('=') => {
                self.position += 1;
                match c {
                    '~' => AttributeOperator::Includes,
                    '|' => AttributeOperator::DashMatch,
                    '^' => AttributeOperator::Prefix,
                    '$' => AttributeOperator::Suffix,
                    _ => AttributeOperator::Substring,
                }
            }
            None => return Err(SelectorError::UnexpectedEnd),
            Some(_) => return Err(SelectorError::InvalidAttribute),
        };

        let _ = self.skip_whitespace();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.position += 1;
                self.string(quote)?
            }
            _ => self.ident().ok_or(SelectorError::InvalidAttribute)?,
        };
        let _ = self.skip_whitespace();

        // [§ 6.3](https://www.w3.org/TR/selectors-4/#attribute-case)
        // "Adding the modifier i [...] causes the attribute value to be
        // matched ASCII case-insensitively."
        let mut case_insensitive = false;
        if let Some(flag) = self.ident() {
            match flag.to_ascii_lowercase().as_str() {
                "i" => case_insensitive = true,
                "s" => {}
                _ => return Err(SelectorError::InvalidAttribute),
            }
            let _ = self.skip_whitespace();
        }

        match self.bump() {
            Some(']') => Ok(AttributeSelector {
                name,
                matcher: Some((operator, value)),
                case_insensitive,
            }),
            None => Err(SelectorError::UnexpectedEnd),
            Some(_) => Err(SelectorError::InvalidAttribute),
        }
    }

    /// Called after the first `:`.
    fn pseudo(&mut self) -> Result<SimpleSelector, SelectorError> {
        if self.peek() == Some(':') {
            self.position += 1;
            let name = self.required_ident()?;
            return name
                .parse::<PseudoElement>()
                .map(SimpleSelector::PseudoElement)
                .map_err(|_| SelectorError::UnknownPseudoElement(name));
        }

        let name = self.required_ident()?.to_ascii_lowercase();
        if self.peek() == Some('(') {
            self.position += 1;
            return self
                .functional_pseudo_class(&name)
                .map(SimpleSelector::PseudoClass);
        }
        if let Some(pseudo_class) = PseudoClass::from_keyword(&name) {
            return Ok(SimpleSelector::PseudoClass(pseudo_class));
        }
        match name.parse::<PseudoElement>() {
            Ok(legacy) if legacy.allows_single_colon() => Ok(SimpleSelector::PseudoElement(legacy)),
            _ => Err(SelectorError::UnknownPseudoClass(name)),
        }
    }

    /// Called after `name(`; consumes the closing `)`.
    fn functional_pseudo_class(&mut self, name: &str) -> Result<PseudoClass, SelectorError> {
        match name {
            "not" => {
                let arguments = self.selector_list(true)?;
                self.position += 1;
                if arguments
                    .iter()
                    .any(|argument| argument.pseudo_element().is_some())
                {
                    return Err(SelectorError::PseudoElementNotLast);
                }
                Ok(PseudoClass::Not(arguments))
            }
            "is" => self.forgiving_selector_list().map(PseudoClass::Is),
            "where" => self.forgiving_selector_list().map(PseudoClass::Where),
            "nth-child" | "nth-last-child" | "nth-of-type" | "nth-last-of-type" => {
                let argument = self.raw_argument()?;
                let nth = Nth::parse(&argument)
                    .ok_or_else(|| SelectorError::InvalidNth(argument.trim().to_string()))?;
                Ok(match name {
                    "nth-child" => PseudoClass::NthChild(nth),
                    "nth-last-child" => PseudoClass::NthLastChild(nth),
                    "nth-of-type" => PseudoClass::NthOfType(nth),
                    _ => PseudoClass::NthLastOfType(nth),
                })
            }
            _ => Err(SelectorError::UnknownPseudoClass(format!("{name}()"))),
        }
    }

    /// [§ 3.2 Forgiving selectors](https://www.w3.org/TR/selectors-4/#forgiving-selector)
    ///
    /// "The forgiving selector list production instead parses each selector
    /// in the list individually, simply ignoring ones that fail to parse, so
    /// the remaining selectors can still be used."
    ///
    /// Members with a pseudo-element are ignored too. Consumes the closing `)`.
    fn forgiving_selector_list(&mut self) -> Result<Vec<Selector>, SelectorError> {
        let mut selectors = Vec::new();
        loop {
            let start = self.position;
            let parsed = self.complex_selector();
            match (parsed, self.peek()) {
                (Ok(selector), Some(',' | ')')) if selector.pseudo_element().is_none() => {
                    selectors.push(selector);
                }
                _ => {
                    self.position = start;
                    self.skip_argument()?;
                }
            }
            match self.bump() {
                Some(',') => {}
                Some(')') => return Ok(selectors),
                _ => return Err(SelectorError::UnbalancedParens),
            }
        }
    }

    /// Moves to the next `,` or `)` outside nested parentheses and strings,
    /// leaving it unconsumed.
    fn skip_argument(&mut self) -> Result<(), SelectorError> {
        let mut depth = 0_usize;
        loop {
            match self.peek() {
                None => return Err(SelectorError::UnbalancedParens),
                Some(',' | ')') if depth == 0 => return Ok(()),
                Some('(') => depth += 1,
                Some(')') => depth -= 1,
                Some(quote @ ('"' | '\'')) => {
                    self.position += 1;
                    while let Some(c) = self.bump() {
                        match c {
                            '\\' => self.position += 1,
                            c if c == quote => break,
                            _ => {}
                        }
                    }
                    continue;
                }
                Some(_) => {}
            }
            self.position += 1;
        }
    }

    /// The text up to the closing `)`, which is consumed.
    fn raw_argument(&mut self) -> Result<String, SelectorError> {
        let mut argument = String::new();
        loop {
            match self.bump() {
                Some(')') => return Ok(argument),
                Some('(') | None => return Err(SelectorError::UnbalancedParens),
                Some(c) => argument.push(c),
            }
        }
    }
}

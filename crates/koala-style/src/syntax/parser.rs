use crate::error::SyntaxError;
use crate::value::{Component, CssValue};

use super::token::Token;

/// Builds a [`CssValue`] from the tokens of one declaration value.
///
/// [§ 5.4.9 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
pub struct ValueParser {
    tokens: Vec<Token>,
    position: usize,
}

impl ValueParser {
    /// Create a parser over `tokens`.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole token stream as one value.
    ///
    /// Top-level commas produce a [`Separator::Comma`](crate::Separator::Comma)
    /// list whose items are whitespace lists (or single components).
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] for empty input, empty list items, unclosed
    /// functions, bad strings, and tokens that cannot appear in a value.
    pub fn parse(mut self) -> Result<CssValue, SyntaxError> {
        let items = self.consume_comma_separated(None)?;
        if items.is_empty() {
            return Err(SyntaxError::Empty);
        }
        Ok(CssValue::comma_list(items))
    }

    /// Consume comma-separated groups until `closing` (or EOF when `None`).
    ///
    /// Returns an empty vector only if there were no tokens at all besides
    /// whitespace, which is how `f()` gets zero arguments.
    fn consume_comma_separated(
        &mut self,
        closing: Option<&Token>,
    ) -> Result<Vec<CssValue>, SyntaxError> {
        let mut groups = Vec::new();
        let mut current = Vec::new();
        let mut saw_comma = false;

        loop {
            let Some(token) = self.next_token() else {
                if let Some(closing) = closing {
                    return Err(SyntaxError::Unclosed(closing.punctuation().unwrap_or(')')));
                }
                break;
            };

            if closing == Some(&token) {
                break;
            }

            match token {
                Token::Whitespace => {}
                Token::Comma => {
                    saw_comma = true;
                    groups.push(Self::finish_group(&mut current)?);
                }
                Token::Ident(name) => current.push(Component::Ident(name).into()),
                Token::Number(value) => current.push(CssValue::number(value)),
                Token::Percentage(value) => current.push(CssValue::percentage(value)),
                Token::Dimension { value, unit } => current.push(CssValue::dimension(value, unit)),
                Token::Hash(value) => current.push(CssValue::hash(value)),
                Token::String(value) => current.push(Component::String(value).into()),
                Token::Delim(c) => current.push(Component::Delim(c).into()),
                Token::Function(name) => {
                    let arguments = self.consume_comma_separated(Some(&Token::RightParen))?;
                    current.push(CssValue::function(name, arguments));
                }
                Token::BadString => return Err(SyntaxError::UnterminatedString),
                other => {
                    return Err(SyntaxError::Unexpected(other.punctuation().unwrap_or('?')));
                }
            }
        }

        if saw_comma || !current.is_empty() {
            groups.push(Self::finish_group(&mut current)?);
        }
        Ok(groups)
    }

    /// Turn the components collected since the last comma into one value.
    fn finish_group(current: &mut Vec<CssValue>) -> Result<CssValue, SyntaxError> {
        if current.is_empty() {
            return Err(SyntaxError::EmptyListItem);
        }
        Ok(CssValue::whitespace_list(std::mem::take(current)))
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned()?;
        self.position += 1;
        Some(token)
    }
}

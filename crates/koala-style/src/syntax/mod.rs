//! Declaration-value syntax.
//!
//! Stylesheet parsing happens upstream; this module turns the text of a
//! single declaration value (`1px 2px red, inset 0 0 0 black`) into a
//! [`CssValue`], and splits a `style` attribute into its declarations.

/// Value parser over declaration-value tokens.
pub mod parser;
/// Declaration-value tokens.
pub mod token;
/// Declaration-value tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

pub use parser::ValueParser;
pub use token::Token;
pub use tokenizer::Tokenizer;

use crate::error::SyntaxError;
use crate::value::CssValue;

/// Tokenize and parse one declaration value.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the text is empty, contains an empty
/// comma-separated item, an unclosed function, an unterminated string, or
/// block punctuation.
pub fn parse_value(input: &str) -> Result<CssValue, SyntaxError> {
    ValueParser::new(Tokenizer::new(input).run()).parse()
}

/// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
///
/// Split the text of a `style` attribute into `(name, value)` pairs.
/// Semicolons inside strings and parentheses do not split. Entries without
/// a colon or with an empty name are dropped, as the CSS error recovery
/// rules drop malformed declarations.
#[must_use]
pub fn split_declarations(input: &str) -> Vec<(&str, &str)> {
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[' | '{') => depth += 1,
            (None, ')' | ']' | '}') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                push_declaration(&mut declarations, &input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_declaration(&mut declarations, &input[start..]);
    declarations
}

fn push_declaration<'a>(declarations: &mut Vec<(&'a str, &'a str)>, text: &'a str) {
    let Some((name, value)) = text.split_once(':') else {
        return;
    };
    let name = name.trim();
    if !name.is_empty() {
        declarations.push((name, value.trim()));
    }
}

//! Tokens produced by the declaration-value tokenizer.
//!
//! This is the subset of [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization)
//! that can appear inside a declaration value. `url()` is tokenized as an
//! ordinary function and at-keywords, `<!--` and `-->` come through as delimiters.

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// "`<ident-token>`"
    Ident(String),

    /// "`<function-token>`", i.e. a name immediately followed by `(`.
    Function(String),

    /// "`<hash-token>`", value without the `#`.
    Hash(String),

    /// "`<string-token>`", value without the quotes.
    String(String),

    /// "`<bad-string-token>`": a string cut off by a newline or EOF.
    BadString,

    /// "`<delim-token>`"
    Delim(char),

    /// "`<number-token>`"
    Number(f64),

    /// "`<percentage-token>`"
    Percentage(f64),

    /// "`<dimension-token>`"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`"
    Whitespace,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,
}

impl Token {
    /// The character a punctuation token was made from, for error messages.
    #[must_use]
    pub const fn punctuation(&self) -> Option<char> {
        Some(match self {
            Self::Colon => ':',
            Self::Semicolon => ';',
            Self::Comma => ',',
            Self::LeftBracket => '[',
            Self::RightBracket => ']',
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::LeftBrace => '{',
            Self::RightBrace => '}',
            Self::Delim(c) => *c,
            _ => return None,
        })
    }
}

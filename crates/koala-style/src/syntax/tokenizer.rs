use super::token::Token;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Tokenizer for a single declaration value.
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
}

impl Tokenizer {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Consume tokens until the end of input. Comments are dropped.
    #[must_use]
    pub fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.consume_token() {
            tokens.push(token);
        }
        tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Returns `None` at EOF.
    fn consume_token(&mut self) -> Option<Token> {
        self.consume_comments();

        let c = self.consume()?;
        let token = match c {
            c if is_whitespace(c) => {
                while self.peek().is_some_and(is_whitespace) {
                    let _ = self.consume();
                }
                Token::Whitespace
            }
            '"' | '\'' => self.consume_string_token(c),
            '#' => {
                // "If the next input code point is an ident code point or the next
                // two input code points are a valid escape"
                if self.peek().is_some_and(is_ident_code_point)
                    || starts_valid_escape(self.peek(), self.peek_at(1))
                {
                    Token::Hash(self.consume_ident_sequence())
                } else {
                    Token::Delim('#')
                }
            }
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '+' | '.' if self.starts_number_with(c) => {
                self.reconsume();
                self.consume_numeric_token()
            }
            '-' if self.starts_number_with(c) => {
                self.reconsume();
                self.consume_numeric_token()
            }
            '-' if self.starts_ident_after_hyphen() => {
                self.reconsume();
                self.consume_ident_like_token()
            }
            '\\' if starts_valid_escape(Some(c), self.peek()) => {
                self.reconsume();
                self.consume_ident_like_token()
            }
            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }
            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }
            c => Token::Delim(c),
        };
        Some(token)
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.position += 2;
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    None => return,
                }
            }
        }
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// EOF inside a string is reported as a bad string; a value validator
    /// has no later input that could close it.
    fn consume_string_token(&mut self, ending: char) -> Token {
        let mut value = String::new();
        loop {
            match self.consume() {
                Some(c) if c == ending => return Token::String(value),
                None => return Token::BadString,
                Some('\n') => {
                    self.reconsume();
                    return Token::BadString;
                }
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> Token {
        let value = self.consume_number();
        if self.starts_ident() {
            Token::Dimension {
                value,
                unit: self.consume_ident_sequence(),
            }
        } else if self.peek() == Some('%') {
            self.position += 1;
            Token::Percentage(value)
        } else {
            Token::Number(value)
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> Token {
        let name = self.consume_ident_sequence();
        if self.peek() == Some('(') {
            self.position += 1;
            Token::Function(name)
        } else {
            Token::Ident(name)
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if is_ident_code_point(c) {
                result.push(c);
                self.position += 1;
            } else if starts_valid_escape(Some(c), self.peek_at(1)) {
                self.position += 1;
                result.push(self.consume_escaped_code_point());
            } else {
                break;
            }
        }
        result
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> f64 {
        let mut repr = String::new();

        if let Some(sign @ ('+' | '-')) = self.peek() {
            repr.push(sign);
            self.position += 1;
        }
        self.consume_digits_into(&mut repr);

        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            self.position += 1;
            self.consume_digits_into(&mut repr);
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digit_at {
                    if let Some(c) = self.consume() {
                        repr.push(c);
                    }
                }
                self.consume_digits_into(&mut repr);
            }
        }

        repr.parse().unwrap_or(0.0)
    }

    fn consume_digits_into(&mut self, repr: &mut String) {
        while let Some(digit) = self.peek().filter(char::is_ascii_digit) {
            repr.push(digit);
            self.position += 1;
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Assumes the `\` has already been consumed.
    fn consume_escaped_code_point(&mut self) -> char {
        let Some(first) = self.consume() else {
            return char::REPLACEMENT_CHARACTER;
        };
        if !first.is_ascii_hexdigit() {
            return first;
        }

        let mut hex = String::from(first);
        while hex.len() < 6 {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    hex.push(c);
                    self.position += 1;
                }
                _ => break,
            }
        }
        if self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }

        // "If this number is zero, or is for a surrogate, or is greater than
        // the maximum allowed code point, return U+FFFD REPLACEMENT CHARACTER"
        u32::from_str_radix(&hex, 16)
            .ok()
            .filter(|&code_point| code_point != 0)
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// [§ 4.3.9](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    /// for the next three code points.
    fn starts_ident(&self) -> bool {
        match self.peek() {
            Some('-') => {
                let second = self.peek_at(1);
                second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                    || starts_valid_escape(second, self.peek_at(2))
            }
            Some('\\') => starts_valid_escape(Some('\\'), self.peek_at(1)),
            Some(c) => is_ident_start_code_point(c),
            None => false,
        }
    }

    /// [§ 4.3.9](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    /// where a `-` has just been consumed.
    fn starts_ident_after_hyphen(&self) -> bool {
        let second = self.peek();
        second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
            || starts_valid_escape(second, self.peek_at(1))
    }

    /// [§ 4.3.10](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    /// where `first` has just been consumed.
    fn starts_number_with(&self, first: char) -> bool {
        let digit_at = |offset| self.peek_at(offset).is_some_and(|c: char| c.is_ascii_digit());
        match first {
            '+' | '-' => digit_at(0) || (self.peek() == Some('.') && digit_at(1)),
            '.' => digit_at(0),
            c => c.is_ascii_digit(),
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    const fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn starts_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second.is_some_and(|c| c != '\n')
}

/// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
pub(crate) const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
pub(crate) const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}

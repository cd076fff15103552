//! [CSS Syntax § 6 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)

use core::fmt::{self, Write};

use crate::value::ToCss;

/// "The An+B notation defines an integer step (A) and offset (B), and
/// represents the An+Bth elements in a list, for every positive integer or
/// zero value of n, with the first element in the list having index 1."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nth {
    /// The step.
    pub a: i32,
    /// The offset.
    pub b: i32,
}

impl Nth {
    /// Parse the argument of an `:nth-*()` pseudo-class.
    ///
    /// Accepts `odd`, `even`, a bare integer, and `An+B` forms such as
    /// `2n+1`, `-n + 3` and `n`. Whitespace is allowed around the sign that
    /// introduces B, nowhere else inside the notation.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_ascii_lowercase();
        match text.as_str() {
            // "odd: Equivalent to 2n+1."
            "odd" => return Some(Self { a: 2, b: 1 }),
            // "even: Equivalent to 2n."
            "even" => return Some(Self { a: 2, b: 0 }),
            _ => {}
        }

        let Some((step, offset)) = text.split_once('n') else {
            return Self::parse_integer(&text, true).map(|b| Self { a: 0, b });
        };

        let a = match step {
            "" | "+" => 1,
            "-" => -1,
            digits => Self::parse_integer(digits, true)?,
        };

        let offset = offset.trim_start();
        let b = if offset.is_empty() {
            0
        } else {
            let (negative, magnitude) = if let Some(rest) = offset.strip_prefix('+') {
                (false, rest)
            } else if let Some(rest) = offset.strip_prefix('-') {
                (true, rest)
            } else {
                return None;
            };
            let magnitude = Self::parse_integer(magnitude.trim_start(), false)?;
            if negative { -magnitude } else { magnitude }
        };

        Some(Self { a, b })
    }

    fn parse_integer(text: &str, allow_sign: bool) -> Option<i32> {
        let digits = if allow_sign {
            text.strip_prefix(['+', '-']).unwrap_or(text)
        } else {
            text
        };
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        text.parse().ok()
    }

    /// True if the 1-based `position` is An+B for some n >= 0.
    #[must_use]
    pub fn matches(self, position: usize) -> bool {
        let Ok(position) = i64::try_from(position) else {
            return false;
        };
        let (a, b) = (i64::from(self.a), i64::from(self.b));
        if a == 0 {
            return position == b;
        }
        let distance = position - b;
        distance % a == 0 && distance / a >= 0
    }
}

impl ToCss for Nth {
    /// [CSSOM § Serializing An+B](https://drafts.csswg.org/css-syntax/#serializing-anb)
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self.a {
            0 => return write!(dest, "{}", self.b),
            1 => dest.write_char('n')?,
            -1 => dest.write_str("-n")?,
            a => write!(dest, "{a}n")?,
        }
        match self.b {
            0 => Ok(()),
            b if b > 0 => write!(dest, "+{b}"),
            b => write!(dest, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nth(text: &str) -> Option<(i32, i32)> {
        Nth::parse(text).map(|nth| (nth.a, nth.b))
    }

    #[test]
    fn test_parse_keywords_and_integers() {
        assert_eq!(nth("odd"), Some((2, 1)));
        assert_eq!(nth(" EVEN "), Some((2, 0)));
        assert_eq!(nth("3"), Some((0, 3)));
        assert_eq!(nth("-2"), Some((0, -2)));
    }

    #[test]
    fn test_parse_an_plus_b() {
        assert_eq!(nth("2n+1"), Some((2, 1)));
        assert_eq!(nth("n"), Some((1, 0)));
        assert_eq!(nth("-n+3"), Some((-1, 3)));
        assert_eq!(nth("+n - 2"), Some((1, -2)));
        assert_eq!(nth("10n"), Some((10, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(nth(""), None);
        assert_eq!(nth("2 n"), None);
        assert_eq!(nth("n+"), None);
        assert_eq!(nth("n++1"), None);
        assert_eq!(nth("abc"), None);
        assert_eq!(nth("2n*1"), None);
    }

    #[test]
    fn test_matches_positions() {
        let odd = Nth { a: 2, b: 1 };
        assert!(odd.matches(1));
        assert!(!odd.matches(2));
        assert!(odd.matches(3));

        let first_three = Nth { a: -1, b: 3 };
        assert!(first_three.matches(1));
        assert!(first_three.matches(3));
        assert!(!first_three.matches(4));

        let exactly_two = Nth { a: 0, b: 2 };
        assert!(exactly_two.matches(2));
        assert!(!exactly_two.matches(4));
    }

    #[test]
    fn test_serialization() {
        assert_eq!(Nth { a: 2, b: 1 }.to_css_string(), "2n+1");
        assert_eq!(Nth { a: -1, b: -3 }.to_css_string(), "-n-3");
        assert_eq!(Nth { a: 0, b: 5 }.to_css_string(), "5");
        assert_eq!(Nth { a: 1, b: 0 }.to_css_string(), "n");
    }
}

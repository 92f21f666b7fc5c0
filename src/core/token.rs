//! Canonical token representation shared by the state machine and evaluator.
//!
//! Both the display reconstruction logic and the expression parser work from
//! the same token vocabulary, so the two can never drift apart. Operators
//! carry two renderings: the canonical ASCII symbol used internally and fed
//! to the evaluator, and the Unicode glyph shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four arithmetic operators.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::Operator;
///
/// assert_eq!(Operator::Multiply.symbol(), '*');
/// assert_eq!(Operator::Multiply.glyph(), '×');
/// assert_eq!(Operator::from_glyph('÷'), Some(Operator::Divide));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The canonical ASCII symbol used in pending expressions and
    /// evaluator input.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// The glyph shown in the display buffer.
    pub fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parse a canonical ASCII operator symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Parse either rendering of an operator. Accepts both the display
    /// glyphs and the canonical symbols.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '×' => Some(Self::Multiply),
            '÷' => Some(Self::Divide),
            _ => Self::from_symbol(c),
        }
    }
}

/// A single lexical token of an arithmetic expression.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    /// A numeric literal, kept as its source text until parsed.
    Number(String),
    Op(Operator),
    OpenParen,
    CloseParen,
}

/// A character the tokenizer does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized character '{0}'")]
pub struct UnknownCharacter(pub char);

/// Split expression text into tokens, skipping whitespace.
///
/// Accepts both display glyphs and canonical symbols for operators, so the
/// same tokenizer serves display reconstruction and evaluation.
pub fn tokenize(text: &str) -> Result<Vec<Token>, UnknownCharacter> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() || c == '.' {
            let mut literal = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    literal.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Number(literal));
        } else if let Some(op) = Operator::from_glyph(c) {
            chars.next();
            tokens.push(Token::Op(op));
        } else if c == '(' {
            chars.next();
            tokens.push(Token::OpenParen);
        } else if c == ')' {
            chars.next();
            tokens.push(Token::CloseParen);
        } else {
            return Err(UnknownCharacter(c));
        }
    }

    Ok(tokens)
}

/// Rewrite display glyphs to canonical symbols, leaving all other
/// characters untouched.
pub fn to_canonical(text: &str) -> String {
    text.chars()
        .map(|c| Operator::from_glyph(c).map_or(c, |op| op.symbol()))
        .collect()
}

/// Rewrite canonical operator symbols to display glyphs.
pub fn to_display(text: &str) -> String {
    text.chars()
        .map(|c| Operator::from_symbol(c).map_or(c, |op| op.glyph()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_renderings_are_consistent() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operator::from_glyph(op.glyph()), Some(op));
        }
    }

    #[test]
    fn from_glyph_accepts_canonical_symbols() {
        assert_eq!(Operator::from_glyph('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph('/'), Some(Operator::Divide));
    }

    #[test]
    fn tokenize_splits_expression() {
        let tokens = tokenize("12 + 3.5").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("12".into()),
                Token::Op(Operator::Add),
                Token::Number("3.5".into()),
            ]
        );
    }

    #[test]
    fn tokenize_accepts_glyphs_and_parens() {
        let tokens = tokenize("(4 × 2) ÷ 8").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::OpenParen,
                Token::Number("4".into()),
                Token::Op(Operator::Multiply),
                Token::Number("2".into()),
                Token::CloseParen,
                Token::Op(Operator::Divide),
                Token::Number("8".into()),
            ]
        );
    }

    #[test]
    fn tokenize_rejects_unknown_characters() {
        assert_eq!(tokenize("2 + x"), Err(UnknownCharacter('x')));
    }

    #[test]
    fn canonical_and_display_renderings_invert() {
        assert_eq!(to_canonical("4 × 5 ÷ 2"), "4 * 5 / 2");
        assert_eq!(to_display("4 * 5 / 2"), "4 × 5 ÷ 2");
        assert_eq!(to_display(&to_canonical("1 + 2 × 3")), "1 + 2 × 3");
    }

    #[test]
    fn operator_serializes_correctly() {
        let json = serde_json::to_string(&Operator::Divide).unwrap();
        let back: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Operator::Divide);
    }
}

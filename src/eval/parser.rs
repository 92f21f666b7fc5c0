//! Recursive-descent evaluation of arithmetic expressions.
//!
//! The grammar is deliberately closed: it can express nothing but the four
//! arithmetic operations over decimal literals and parentheses, so malformed
//! input is a typed error rather than an exception escape, and there is no
//! code-execution surface.
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := factor (("*" | "/") factor)*
//! factor     := "-" factor | number | "(" expression ")"
//! ```

use super::error::EvalError;
use crate::core::token::{tokenize, Token};
use crate::core::Operator;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Fractional digits kept in results, suppressing residual precision noise.
const RESULT_SCALE: u32 = 10;

/// Characters an expression may contain once whitespace is stripped.
const ALPHABET: &str = "+-*/().";

/// Validate and compute the value of an arithmetic expression.
///
/// Pure and stateless. Numeric literals are parsed as decimals, not binary
/// floats, so `0.1 + 0.2` is exactly `0.3`. The result is rounded to ten
/// fractional digits and stripped of trailing zeros.
///
/// # Example
///
/// ```rust
/// use deskcalc::eval::{evaluate, EvalError};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap().to_string(), "14");
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap().to_string(), "20");
/// assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(input: &str) -> Result<Decimal, EvalError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(EvalError::MalformedExpression);
    }
    if let Some(bad) = compact
        .chars()
        .find(|c| !c.is_ascii_digit() && !ALPHABET.contains(*c))
    {
        return Err(EvalError::InvalidCharacter(bad));
    }

    // Balance is checked before any parsing is attempted.
    let open = compact.chars().filter(|&c| c == '(').count();
    let close = compact.chars().filter(|&c| c == ')').count();
    if open != close {
        return Err(EvalError::UnbalancedParentheses);
    }

    let tokens = tokenize(&compact).map_err(|e| EvalError::InvalidCharacter(e.0))?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;
    if parser.pos != parser.tokens.len() {
        return Err(EvalError::MalformedExpression);
    }

    let rounded = value.round_dp(RESULT_SCALE).normalize();
    // a signed zero must not leak into the display
    Ok(if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    })
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn expression(&mut self) -> Result<Decimal, EvalError> {
        let mut value = self.term()?;
        while let Some(&Token::Op(op)) = self.peek() {
            if !matches!(op, Operator::Add | Operator::Subtract) {
                break;
            }
            self.pos += 1;
            let rhs = self.term()?;
            value = match op {
                Operator::Add => value.checked_add(rhs),
                _ => value.checked_sub(rhs),
            }
            .ok_or(EvalError::NonFiniteResult)?;
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<Decimal, EvalError> {
        let mut value = self.factor()?;
        while let Some(&Token::Op(op)) = self.peek() {
            if !matches!(op, Operator::Multiply | Operator::Divide) {
                break;
            }
            self.pos += 1;
            let rhs = self.factor()?;
            value = match op {
                Operator::Multiply => value.checked_mul(rhs).ok_or(EvalError::NonFiniteResult)?,
                _ => {
                    if rhs.is_zero() {
                        return Err(EvalError::DivisionByZero);
                    }
                    value.checked_div(rhs).ok_or(EvalError::NonFiniteResult)?
                }
            };
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<Decimal, EvalError> {
        if let Some(&Token::Op(Operator::Subtract)) = self.peek() {
            self.pos += 1;
            return Ok(-self.factor()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Decimal, EvalError> {
        match self.tokens.get(self.pos).cloned() {
            Some(Token::Number(text)) => {
                self.pos += 1;
                parse_literal(&text)
            }
            Some(Token::OpenParen) => {
                self.pos += 1;
                let value = self.expression()?;
                match self.peek() {
                    Some(Token::CloseParen) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    _ => Err(EvalError::MalformedExpression),
                }
            }
            _ => Err(EvalError::MalformedExpression),
        }
    }
}

/// Parse one numeric literal, tolerating a bare leading or trailing decimal
/// point the way the display buffer can produce them (`"5."`, `".5"`).
fn parse_literal(text: &str) -> Result<Decimal, EvalError> {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return Err(EvalError::MalformedExpression);
    }
    let mut literal = text.to_string();
    if literal.starts_with('.') {
        literal.insert(0, '0');
    }
    if literal.ends_with('.') {
        literal.push('0');
    }
    Decimal::from_str(&literal).map_err(|_| EvalError::MalformedExpression)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_str(input: &str) -> String {
        evaluate(input).unwrap().to_string()
    }

    #[test]
    fn evaluates_with_precedence() {
        assert_eq!(eval_str("2 + 3 * 4"), "14");
        assert_eq!(eval_str("10 - 4 / 2"), "8");
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(eval_str("(2 + 3) * 4"), "20");
        assert_eq!(eval_str("((1 + 2) * (3 + 4))"), "21");
    }

    #[test]
    fn decimal_addition_is_exact() {
        assert_eq!(eval_str("0.1 + 0.2"), "0.3");
    }

    #[test]
    fn division_rounds_to_ten_digits() {
        assert_eq!(eval_str("1 / 3"), "0.3333333333");
        assert_eq!(eval_str("2 / 3"), "0.6666666667");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        assert_eq!(eval_str("2.50 + 2.50"), "5");
        assert_eq!(eval_str("1.10 * 2"), "2.2");
    }

    #[test]
    fn unary_minus_is_supported() {
        assert_eq!(eval_str("-5 + 3"), "-2");
        assert_eq!(eval_str("4 + -5"), "-1");
        assert_eq!(eval_str("-(2 + 3)"), "-5");
    }

    #[test]
    fn division_by_zero_is_typed() {
        assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("(5) / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5 / (3 - 3)"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1 / 0.0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        assert_eq!(evaluate("2 + x"), Err(EvalError::InvalidCharacter('x')));
        // display glyphs must be converted to canonical symbols first
        assert_eq!(evaluate("4 × 5"), Err(EvalError::InvalidCharacter('×')));
    }

    #[test]
    fn unbalanced_parentheses_are_rejected_before_parsing() {
        assert_eq!(evaluate("(2 + 3"), Err(EvalError::UnbalancedParentheses));
        assert_eq!(evaluate("2 + 3)"), Err(EvalError::UnbalancedParentheses));
        assert_eq!(evaluate("(("), Err(EvalError::UnbalancedParentheses));
    }

    #[test]
    fn malformed_expressions_are_rejected() {
        assert_eq!(evaluate(""), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("   "), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("2 +"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("2 +* 3"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("()"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("2 3"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("1.2.3"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("."), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn bare_decimal_points_on_literals_are_tolerated() {
        assert_eq!(eval_str("5."), "5");
        assert_eq!(eval_str(".5 + .5"), "1");
    }

    #[test]
    fn overflow_is_a_non_finite_result() {
        let max = "79228162514264337593543950335";
        assert_eq!(
            evaluate(&format!("{max} * 10")),
            Err(EvalError::NonFiniteResult)
        );
    }

    #[test]
    fn signed_zero_normalizes() {
        assert_eq!(eval_str("0.0 - 0"), "0");
        assert_eq!(eval_str("-0"), "0");
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(eval_str("  2+2  "), "4");
    }
}

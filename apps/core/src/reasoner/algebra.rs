//! Linear symbolic expressions over the variables `x` and `y`.
//!
//! A small recursive-descent parser reduces `+ - * / ( )` expressions to the
//! linear normal form `a*x + b*y + c`, and `solve_equality` solves
//! `left = right` over that form. Anything nonlinear (variable times
//! variable, division by a variable) is rejected with a typed error so the
//! equation solver can fall back to its guidance message.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// Parse or evaluation failure for a symbolic expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("expected ')' to close a parenthesis")]
    UnbalancedParens,
    #[error("expression is not linear in x and y")]
    Nonlinear,
    #[error("division by zero")]
    DivisionByZero,
    #[error("division by an expression containing a variable")]
    NonConstantDivisor,
    #[error("invalid number literal '{0}'")]
    BadNumber(String),
    #[error("empty expression")]
    Empty,
}

const EPSILON: f64 = 1e-12;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Linear normal form `x_coef * x + y_coef * y + constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinExpr {
    pub x_coef: f64,
    pub y_coef: f64,
    pub constant: f64,
}

impl LinExpr {
    pub fn constant(value: f64) -> Self {
        Self {
            x_coef: 0.0,
            y_coef: 0.0,
            constant: value,
        }
    }

    pub fn var_x() -> Self {
        Self {
            x_coef: 1.0,
            y_coef: 0.0,
            constant: 0.0,
        }
    }

    pub fn var_y() -> Self {
        Self {
            x_coef: 0.0,
            y_coef: 1.0,
            constant: 0.0,
        }
    }

    pub fn is_constant(&self) -> bool {
        is_zero(self.x_coef) && is_zero(self.y_coef)
    }

    fn add(self, other: Self) -> Self {
        Self {
            x_coef: self.x_coef + other.x_coef,
            y_coef: self.y_coef + other.y_coef,
            constant: self.constant + other.constant,
        }
    }

    fn sub(self, other: Self) -> Self {
        Self {
            x_coef: self.x_coef - other.x_coef,
            y_coef: self.y_coef - other.y_coef,
            constant: self.constant - other.constant,
        }
    }

    fn neg(self) -> Self {
        Self {
            x_coef: -self.x_coef,
            y_coef: -self.y_coef,
            constant: -self.constant,
        }
    }

    fn scale(self, factor: f64) -> Self {
        Self {
            x_coef: self.x_coef * factor,
            y_coef: self.y_coef * factor,
            constant: self.constant * factor,
        }
    }

    /// Multiplication stays linear only when one side is constant.
    fn mul(self, other: Self) -> Result<Self, AlgebraError> {
        if other.is_constant() {
            Ok(self.scale(other.constant))
        } else if self.is_constant() {
            Ok(other.scale(self.constant))
        } else {
            Err(AlgebraError::Nonlinear)
        }
    }

    fn div(self, other: Self) -> Result<Self, AlgebraError> {
        if !other.is_constant() {
            return Err(AlgebraError::NonConstantDivisor);
        }
        if is_zero(other.constant) {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.scale(1.0 / other.constant))
    }
}

fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for LinExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Terms in (x, y, constant) order, sign-folded into separators.
        let mut terms: Vec<(f64, Option<&str>)> = Vec::new();
        if !is_zero(self.x_coef) {
            terms.push((self.x_coef, Some("x")));
        }
        if !is_zero(self.y_coef) {
            terms.push((self.y_coef, Some("y")));
        }
        if !is_zero(self.constant) || terms.is_empty() {
            terms.push((self.constant, None));
        }

        for (index, (coef, var)) in terms.iter().enumerate() {
            let magnitude = coef.abs();
            if index == 0 {
                if *coef < 0.0 {
                    write!(f, "-")?;
                }
            } else if *coef < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            match var {
                Some(name) => {
                    if is_zero(magnitude - 1.0) {
                        write!(f, "{}", name)?;
                    } else {
                        write!(f, "{}*{}", fmt_value(magnitude), name)?;
                    }
                }
                None => write!(f, "{}", fmt_value(magnitude))?,
            }
        }
        Ok(())
    }
}

/// Solution of a linear equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// A single numeric value for the (only) variable present.
    Unique(f64),
    /// Both variables present: the first variable expressed in terms of the
    /// second, rendered as an expression string.
    Parametric(String),
    /// No variable present: the solution set is empty.
    Empty,
}

/// Parse an expression into linear normal form.
pub fn parse(input: &str) -> Result<LinExpr, AlgebraError> {
    let mut parser = Parser {
        chars: input.chars().peekable(),
    };
    parser.skip_whitespace();
    if parser.chars.peek().is_none() {
        return Err(AlgebraError::Empty);
    }
    let expr = parser.expression()?;
    parser.skip_whitespace();
    match parser.chars.next() {
        None => Ok(expr),
        Some(')') => Err(AlgebraError::UnbalancedParens),
        Some(c) => Err(AlgebraError::UnexpectedChar(c)),
    }
}

/// Solve `left = right`, returning the first solution the way a symbolic
/// solver would: a unique value when one variable is present, a parametric
/// expression when both are, and the empty set when neither is.
pub fn solve_equality(left: LinExpr, right: LinExpr) -> Solution {
    // Normalize to a*x + b*y + c = 0.
    let diff = left.sub(right);

    if !is_zero(diff.x_coef) {
        if is_zero(diff.y_coef) {
            Solution::Unique(-diff.constant / diff.x_coef)
        } else {
            // x = (-b*y - c) / a
            let in_terms_of_y = LinExpr {
                x_coef: 0.0,
                y_coef: -diff.y_coef / diff.x_coef,
                constant: -diff.constant / diff.x_coef,
            };
            Solution::Parametric(in_terms_of_y.to_string())
        }
    } else if !is_zero(diff.y_coef) {
        Solution::Unique(-diff.constant / diff.y_coef)
    } else {
        // Constant equality: whether it holds or not, there is nothing to
        // solve for.
        Solution::Empty
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<LinExpr, AlgebraError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some('+') => {
                    self.chars.next();
                    value = value.add(self.term()?);
                }
                Some('-') => {
                    self.chars.next();
                    value = value.sub(self.term()?);
                }
                _ => return Ok(value),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<LinExpr, AlgebraError> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some('*') => {
                    self.chars.next();
                    value = value.mul(self.factor()?)?;
                }
                Some('/') => {
                    self.chars.next();
                    value = value.div(self.factor()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    // factor := ('+' | '-') factor | primary
    fn factor(&mut self) -> Result<LinExpr, AlgebraError> {
        self.skip_whitespace();
        match self.chars.peek() {
            Some('-') => {
                self.chars.next();
                Ok(self.factor()?.neg())
            }
            Some('+') => {
                self.chars.next();
                self.factor()
            }
            _ => self.primary(),
        }
    }

    // primary := number | 'x' | 'y' | '(' expression ')'
    fn primary(&mut self) -> Result<LinExpr, AlgebraError> {
        self.skip_whitespace();
        match self.chars.peek().copied() {
            None => Err(AlgebraError::UnexpectedEnd),
            Some('x') => {
                self.chars.next();
                Ok(LinExpr::var_x())
            }
            Some('y') => {
                self.chars.next();
                Ok(LinExpr::var_y())
            }
            Some('(') => {
                self.chars.next();
                let inner = self.expression()?;
                self.skip_whitespace();
                match self.chars.next() {
                    Some(')') => Ok(inner),
                    _ => Err(AlgebraError::UnbalancedParens),
                }
            }
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(c) => Err(AlgebraError::UnexpectedChar(c)),
        }
    }

    fn number(&mut self) -> Result<LinExpr, AlgebraError> {
        let mut literal = String::new();
        while matches!(self.chars.peek(), Some(c) if c.is_ascii_digit() || *c == '.') {
            // Peek guarantees the char exists.
            if let Some(c) = self.chars.next() {
                literal.push(c);
            }
        }
        literal
            .parse::<f64>()
            .map(LinExpr::constant)
            .map_err(|_| AlgebraError::BadNumber(literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(input: &str) -> LinExpr {
        parse(input).unwrap_or_else(|e| panic!("failed to parse '{}': {}", input, e))
    }

    #[test]
    fn test_parse_constant() {
        assert_eq!(parse_ok("42"), LinExpr::constant(42.0));
        assert_eq!(parse_ok("3.5"), LinExpr::constant(3.5));
    }

    #[test]
    fn test_parse_linear_terms() {
        let expr = parse_ok("2*x + 5");
        assert_eq!(expr.x_coef, 2.0);
        assert_eq!(expr.constant, 5.0);

        let expr = parse_ok("3*y - 4");
        assert_eq!(expr.y_coef, 3.0);
        assert_eq!(expr.constant, -4.0);
    }

    #[test]
    fn test_parse_parentheses() {
        let expr = parse_ok("2*(x + 3)");
        assert_eq!(expr.x_coef, 2.0);
        assert_eq!(expr.constant, 6.0);
    }

    #[test]
    fn test_parse_unary_minus() {
        let expr = parse_ok("-x + 10");
        assert_eq!(expr.x_coef, -1.0);
        assert_eq!(expr.constant, 10.0);
    }

    #[test]
    fn test_parse_division_by_constant() {
        let expr = parse_ok("x / 2");
        assert_eq!(expr.x_coef, 0.5);
    }

    #[test]
    fn test_nonlinear_rejected() {
        assert_eq!(parse("x * y"), Err(AlgebraError::Nonlinear));
        assert_eq!(parse("x * x"), Err(AlgebraError::Nonlinear));
    }

    #[test]
    fn test_division_errors() {
        assert_eq!(parse("x / 0"), Err(AlgebraError::DivisionByZero));
        assert_eq!(parse("5 / x"), Err(AlgebraError::NonConstantDivisor));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(parse(""), Err(AlgebraError::Empty));
        assert_eq!(parse("(x + 1"), Err(AlgebraError::UnbalancedParens));
        assert!(matches!(parse("2 + z"), Err(AlgebraError::UnexpectedChar('z'))));
    }

    #[test]
    fn test_solve_unique_x() {
        // 2x + 5 = 17 -> x = 6
        let left = parse_ok("2*x + 5");
        let right = parse_ok("17");
        assert_eq!(solve_equality(left, right), Solution::Unique(6.0));
    }

    #[test]
    fn test_solve_unique_y() {
        let left = parse_ok("3*y");
        let right = parse_ok("12");
        assert_eq!(solve_equality(left, right), Solution::Unique(4.0));
    }

    #[test]
    fn test_solve_parametric() {
        // x + y = 5 -> x = 5 - y
        let left = parse_ok("x + y");
        let right = parse_ok("5");
        match solve_equality(left, right) {
            Solution::Parametric(expr) => assert_eq!(expr, "-y + 5"),
            other => panic!("expected parametric solution, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_empty() {
        assert_eq!(
            solve_equality(LinExpr::constant(5.0), LinExpr::constant(5.0)),
            Solution::Empty
        );
        assert_eq!(
            solve_equality(LinExpr::constant(5.0), LinExpr::constant(3.0)),
            Solution::Empty
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_ok("2*x + 5").to_string(), "2*x + 5");
        assert_eq!(parse_ok("-x").to_string(), "-x");
        assert_eq!(parse_ok("x - y - 1").to_string(), "x - y - 1");
        assert_eq!(LinExpr::constant(0.0).to_string(), "0");
    }
}

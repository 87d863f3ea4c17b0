//! a module turns a String expression into a symbolic expression
//!# Example
//! ```
//! use RustedSymbolic::symbolic::symbolic_engine::Expr;
//! let parsed_expression = Expr::parse_expression("(x + 2) * y").unwrap();
//! assert_eq!(parsed_expression.to_string(), "x + 2 * y");
//! assert!(Expr::parse_expression("(x + 2").is_none());
//! ```
use crate::symbolic::symbolic_engine::{BinOp, Expr};
use crate::symbolic::symbolic_error::SymbolicError;
use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric0, char as ch, multispace0, one_of, satisfy},
    combinator::{all_consuming, cut, map, not, peek, recognize},
    error::{Error, ErrorKind},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
};
use std::f64::consts::{
    E, FRAC_1_SQRT_2, FRAC_PI_2, LN_2, LN_10, LOG2_E, LOG10_E, PI, SQRT_2, TAU,
};
//                  descent diagram for "2 + x * (y - 1)"
//                |_________________________________|
//                |  expr:   term  +  term          |
//                |_________________________________|
//                |          2     |  x * (y - 1)   |
//                |________________|________________|
//                |  term:   factor * factor        |
//                |_________________________________|
//                |          x     |  (y - 1)       |
//                |________________|_______|________|
//                |  factor: '(' expr ')'  |        |
//                |_______________________\|/_______|
//                |          y - 1                  |
//                |_________________________________|

/// Named constants recognised by the parser, matched case-sensitively.
pub const NAMED_CONSTANTS: [(&str, f64); 12] = [
    ("pi", PI),
    ("e", E),
    ("ln2", LN_2),
    ("ln10", LN_10),
    ("sqrt2", SQRT_2),
    ("sqrt1_2", FRAC_1_SQRT_2),
    ("deg2rad", PI / 180.0),
    ("rad2deg", 180.0 / PI),
    ("log2e", LOG2_E),
    ("log10e", LOG10_E),
    ("two_pi", TAU),
    ("half_pi", FRAC_PI_2),
];

/// Value of a named constant, if `name` is one.
pub fn named_constant_value(name: &str) -> Option<f64> {
    NAMED_CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Number literal: must start with a digit or '.', sign and "inf"/"nan" are not numbers here.
fn number(input: &str) -> IResult<&str, Expr> {
    let (input, _) = peek(satisfy(|c| c.is_ascii_digit() || c == '.')).parse(input)?;
    map(double, Expr::Const).parse(input)
}

/// Table name not followed by another name character ("pi" but not "pi2" or "pi_x").
fn named_constant(input: &str) -> IResult<&str, Expr> {
    for (name, value) in NAMED_CONSTANTS {
        let matched: IResult<&str, &str> =
            terminated(tag(name), not(satisfy(is_name_char))).parse(input);
        if let Ok((rest, _)) = matched {
            return Ok((rest, Expr::Const(value)));
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
}

/// Letter followed by letters and digits. Every character is consumed, the name keeps 31.
fn variable(input: &str) -> IResult<&str, Expr> {
    map(recognize(pair(alpha1, alphanumeric0)), Expr::var).parse(input)
}

fn parenthesized(input: &str) -> IResult<&str, Expr> {
    delimited(ch('('), expr, preceded(multispace0, ch(')'))).parse(input)
}

fn factor(input: &str) -> IResult<&str, Expr> {
    preceded(
        multispace0,
        alt((number, named_constant, variable, parenthesized)),
    )
    .parse(input)
}

/// Left-associative chain `operand { op operand }` for the operator characters in `ops`.
///
/// Once an operator is consumed the next operand is mandatory.
fn left_assoc_chain<'a>(
    input: &'a str,
    ops: &str,
    operand: fn(&'a str) -> IResult<&'a str, Expr>,
) -> IResult<&'a str, Expr> {
    let (mut input, mut acc) = operand(input)?;
    loop {
        let next: IResult<&str, char> = preceded(multispace0, one_of(ops)).parse(input);
        match next {
            Ok((rest, symbol)) => {
                let op = BinOp::try_from(symbol)
                    .map_err(|_| nom::Err::Failure(Error::new(input, ErrorKind::OneOf)))?;
                let (rest, rhs) = cut(operand).parse(rest)?;
                acc = Expr::op(op, acc, rhs);
                input = rest;
            }
            Err(nom::Err::Error(_)) => return Ok((input, acc)),
            Err(err) => return Err(err),
        }
    }
}

fn term(input: &str) -> IResult<&str, Expr> {
    left_assoc_chain(input, "*/", factor)
}

fn expr(input: &str) -> IResult<&str, Expr> {
    left_assoc_chain(input, "+-", term)
}

/// Parses the whole input as one expression.
///
/// Fails on an empty input, an unclosed bracket, an operator without its right operand
/// and on any non-blank text left after the expression.
pub fn parse_expression_func(input: &str) -> Result<Expr, SymbolicError> {
    let mut parser = all_consuming(terminated(expr, multispace0));
    match parser.parse(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
            Err(SymbolicError::MalformedInput(err.input.to_string()))
        }
        Err(nom::Err::Incomplete(_)) => Err(SymbolicError::MalformedInput(input.to_string())),
    }
}

impl Expr {
    /// Parses a string into a symbolic expression.
    ///
    /// Returns `None` for malformed input; what went wrong is only logged at debug level.
    pub fn parse_expression(input: &str) -> Option<Expr> {
        match parse_expression_func(input) {
            Ok(expr) => Some(expr),
            Err(err) => {
                debug!("failed to parse '{}': {}", input, err);
                None
            }
        }
    }

    /// Parses multiple expressions; `None` if any of them is malformed.
    pub fn parse_vector_expression(input: &[&str]) -> Option<Vec<Expr>> {
        input.iter().map(|s| Expr::parse_expression(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_engine::MAX_VAR_NAME_LEN;

    fn var(name: &str) -> Box<Expr> {
        Box::new(Expr::var(name))
    }

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_func("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
        assert_eq!(parse_expression_func(".5").unwrap(), Expr::Const(0.5));
        assert_eq!(parse_expression_func("1e-3").unwrap(), Expr::Const(1e-3));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_func("x").unwrap();
        assert_eq!(expr, Expr::var("x"));
        assert_eq!(parse_expression_func("x1y2").unwrap(), Expr::var("x1y2"));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_func("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Op(BinOp::Add, var("x"), Box::new(Expr::Const(2.0)))
        );
    }

    #[test]
    fn test_parse_subtraction_is_left_associative() {
        let expr = parse_expression_func("x - 2 - y").unwrap();
        let expected = Expr::Op(
            BinOp::Sub,
            Box::new(Expr::Op(BinOp::Sub, var("x"), Box::new(Expr::Const(2.0)))),
            var("y"),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_division_is_left_associative() {
        let expr = parse_expression_func("8 / 4 / 2").unwrap();
        let expected = Expr::Const(8.0) / Expr::Const(4.0) / Expr::Const(2.0);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_precedence() {
        let expr = parse_expression_func("2 + 3 * 4").unwrap();
        let expected = Expr::Const(2.0) + Expr::Const(3.0) * Expr::Const(4.0);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_expression_func_with_brackets() {
        let expr = parse_expression_func("(x + y) * z").unwrap();
        assert_eq!(
            expr,
            Expr::Op(
                BinOp::Mul,
                Box::new(Expr::Op(BinOp::Add, var("x"), var("y"))),
                var("z")
            )
        );
    }

    #[test]
    fn test_parse_whitespace_everywhere() {
        let tight = parse_expression_func("(x+y)*z").unwrap();
        let loose = parse_expression_func("  (  x +\ty )\n*  z  ").unwrap();
        assert_eq!(tight, loose);
    }

    #[test]
    fn test_parse_named_constants() {
        for (name, value) in NAMED_CONSTANTS {
            assert_eq!(parse_expression_func(name).unwrap(), Expr::Const(value));
        }
        assert_eq!(named_constant_value("two_pi"), Some(TAU));
        assert_eq!(named_constant_value("Pi"), None);
    }

    #[test]
    fn test_constant_prefix_is_a_variable() {
        // a constant name followed by a name character is an ordinary identifier
        assert_eq!(parse_expression_func("pi2").unwrap(), Expr::var("pi2"));
        assert_eq!(parse_expression_func("exp").unwrap(), Expr::var("exp"));
        assert_eq!(parse_expression_func("PI").unwrap(), Expr::var("PI"));
        assert_eq!(parse_expression_func("ln20").unwrap(), Expr::var("ln20"));
    }

    #[test]
    fn test_constant_inside_expression() {
        let expr = parse_expression_func("2*pi*r").unwrap();
        let expected = Expr::Const(2.0) * Expr::Const(PI) * Expr::var("r");
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_long_variable_name_is_truncated() {
        let long_name = "a".repeat(40);
        let expr = parse_expression_func(&format!("{} + 1", long_name)).unwrap();
        match expr {
            Expr::Op(BinOp::Add, lhs, _) => match *lhs {
                Expr::Var(name) => {
                    assert_eq!(name.as_str().len(), MAX_VAR_NAME_LEN);
                    assert_eq!(name.as_str(), &long_name[..MAX_VAR_NAME_LEN]);
                }
                other => panic!("expected variable, got {:?}", other),
            },
            other => panic!("expected addition, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_expression() {
        let result = parse_expression_func("(x +");
        assert_eq!(result.is_err(), true);
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(parse_expression_func("(x + y").is_err());
        assert!(parse_expression_func("x + y)").is_err());
    }

    #[test]
    fn test_missing_operand() {
        assert!(parse_expression_func("x +").is_err());
        assert!(parse_expression_func("* x").is_err());
        assert!(parse_expression_func("x * / y").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_expression_func("").is_err());
        assert!(parse_expression_func("   ").is_err());
        assert!(parse_expression_func("()").is_err());
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        assert!(parse_expression_func("x y").is_err());
        assert!(parse_expression_func("2x").is_err());
        assert!(parse_expression_func("x_1").is_err());
        assert!(parse_expression_func("x + 1 $").is_err());
    }

    #[test]
    fn test_unsupported_syntax_is_rejected() {
        // no unary minus, no exponent, no function calls
        assert!(parse_expression_func("-x").is_err());
        assert!(parse_expression_func("x^2").is_err());
        assert!(parse_expression_func("sin(x)").is_err());
    }

    #[test]
    fn test_parse_expression_returns_none_on_error() {
        assert!(Expr::parse_expression("x + (").is_none());
        assert!(Expr::parse_expression("x + 1").is_some());
    }

    #[test]
    fn test_parse_vector_expression() {
        let parsed = Expr::parse_vector_expression(&["x", "y * 2"]).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(Expr::parse_vector_expression(&["x", "y *"]).is_none());
    }
}

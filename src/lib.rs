//! # calcline
//!
//! calcline parses and evaluates single-line arithmetic expressions.
//! It understands integer, decimal and scientific literals (`42`, `3.5`,
//! `2.35e-3`), the operators `+ - * / **` with the usual precedence, and
//! produces an IEEE-754 double.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        lexer::{column_at, tokenize},
        parser::core::parse_tokens,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a binary tree. The AST is built by the parser
/// and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// Both kinds of failure are fatal to the current input and carry the column
/// they were detected at. They are kept apart so callers can tell a bad
/// character from a malformed expression.
pub mod error;
/// Lexer, parser and evaluator.
///
/// This module ties together the three phases that turn source text into a
/// number.
pub mod interpreter;

/// Parses `source` into an expression tree without evaluating it.
///
/// # Errors
/// Returns [`Error::Lex`] if the source contains a character that starts no
/// token, and [`Error::Parse`] if the tokens do not form one expression.
///
/// # Examples
/// ```
/// use calcline::parse;
///
/// let expr = parse("2 ** 3 ** 2").unwrap();
/// assert_eq!(expr.to_string(), "(2 ** (3 ** 2))");
///
/// assert!(parse("3 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source)?;
    let expr = parse_tokens(&tokens, column_at(source, source.len()))?;
    Ok(expr)
}

/// Parses and evaluates `source`, returning its value.
///
/// A successful result may be infinite or `NaN`; failures are always
/// reported through the `Err` variant.
///
/// # Errors
/// Returns an error if lexing or parsing fails.
///
/// # Examples
/// ```
/// use calcline::{error::Error, evaluate};
///
/// assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
/// assert_eq!(evaluate("1.5e2 / 2").unwrap(), 75.0);
/// assert!(evaluate("0 / 0").unwrap().is_nan());
///
/// assert!(matches!(evaluate("abc"), Err(Error::Lex(_))));
/// assert!(matches!(evaluate("3 4"), Err(Error::Parse(_))));
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let value = parse(source)?.eval();
    debug!(source, value, "evaluated expression");
    Ok(value)
}

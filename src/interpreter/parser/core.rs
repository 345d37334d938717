use std::iter::Peekable;

use logos::Span;
use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Spanned, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Gets the 1-based column a token starts at.
///
/// Span offsets are bytes. Any non-ASCII character is a lex error, so every
/// token stream that reaches the parser comes from ASCII source and byte
/// offsets equal character offsets here.
#[must_use]
pub const fn span_column(span: &Span) -> usize {
    span.start + 1
}

/// Parses a complete token stream into a single expression.
///
/// The stream must hold exactly one expression: an empty stream is
/// [`ParseError::EmptyInput`], and a token left over after the expression is
/// [`ParseError::ExpectedOperator`]. Since every operator is consumed by one
/// of the precedence tiers, the only thing that can be left over is a
/// number that follows another number.
///
/// # Parameters
/// - `tokens`: The full token stream produced by the lexer.
/// - `end_column`: Column reported when the stream ends too early.
///
/// # Returns
/// The root of the expression tree.
///
/// # Example
/// ```
/// use calcline::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("10 - 4 - 3").unwrap();
/// let expr = parse_tokens(&tokens, 11).unwrap();
///
/// assert_eq!(expr.to_string(), "((10 - 4) - 3)");
/// ```
pub fn parse_tokens(tokens: &[Spanned], end_column: usize) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, end_column)?;

    if let Some((token, span)) = iter.next() {
        return Err(ParseError::ExpectedOperator { found:  token.to_string(),
                                                  column: span_column(span), });
    }

    debug!(operators = expr.operator_count(), "parsed expression");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
/// - `end_column`: Column reported when the stream ends too early.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, end_column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    trace!("expecting expression");
    parse_additive(tokens, end_column)
}

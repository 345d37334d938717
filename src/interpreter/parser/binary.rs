use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, span_column},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
/// - `end_column`: Column reported when the stream ends too early.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, end_column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_multiplicative(tokens, end_column)?;
    loop {
        if let Some((token, span)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let column = span_column(span);
            tokens.next();
            trace!(%op, column, "expecting term");
            let right = parse_multiplicative(tokens, end_column)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
/// - `end_column`: Column reported when the stream ends too early.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   end_column: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_power(tokens, end_column)?;
    loop {
        if let Some((token, span)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let column = span_column(span);
            tokens.next();
            trace!(%op, column, "expecting factor");
            let right = parse_power(tokens, end_column)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Operands are collected left to right and folded from the right, so
/// `a ** b ** c` parses as `a ** (b ** c)` without recursing once per
/// operator.
///
/// The rule is: `power := number ("**" power)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `end_column`: Column reported when the stream ends too early.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, end_column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let base = parse_number(tokens, end_column)?;

    let mut exponents = Vec::new();
    while let Some((Token::DoubleStar, span)) = tokens.peek() {
        let column = span_column(span);
        tokens.next();
        trace!(column, "expecting power operand");
        exponents.push((column, parse_number(tokens, end_column)?));
    }

    let Some((mut column, mut right)) = exponents.pop() else {
        return Ok(base);
    };
    while let Some((prev_column, operand)) = exponents.pop() {
        right = power(operand, right, column);
        column = prev_column;
    }

    Ok(power(base, right, column))
}

fn power(base: Expr, exponent: Expr, column: usize) -> Expr {
    Expr::BinaryOp { left: Box::new(base),
                     op: BinaryOperator::Pow,
                     right: Box::new(exponent),
                     column }
}

/// Parses a numeric literal.
///
/// Signs are not part of a literal, so an operator here is always an error:
/// `- 5`, `+ 3` and `3 + + 4` all fail in this rule.
///
/// # Errors
/// - `ExpectedNumber` if the next token is an operator.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub fn parse_number<'a, I>(tokens: &mut Peekable<I>, end_column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(value), span)) => Ok(Expr::Literal { value:  *value,
                                                                 column: span_column(span), }),

        Some((tok, span)) => Err(ParseError::ExpectedNumber { found:  tok.to_string(),
                                                              column: span_column(span), }),

        None => Err(ParseError::UnexpectedEndOfInput { column: end_column }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for numbers.
///
/// # Example
/// ```
/// use calcline::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Number(1.0)), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Number(_) | Token::Ignored => None,
    }
}

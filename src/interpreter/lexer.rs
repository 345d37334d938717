use logos::{Logos, Span};
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The end of input is not a token of its own: the token stream simply runs
/// out, and the parser reports that as "end of input".
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.5`, `2.35e-3` or `10E3`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::DoubleStar => write!(f, "'**'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// A token together with the byte range it was read from.
pub type Spanned = (Token, Span);

/// Decodes a numeric literal from the current token slice.
///
/// The regex guarantees the slice is a well-formed decimal or scientific
/// literal, so `None` here only means the standard library refused it; the
/// lexer turns that into [`LexError::InvalidNumber`].
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts a byte offset into a 1-based character column.
#[must_use]
pub fn column_at(source: &str, offset: usize) -> usize {
    source.get(..offset).map_or(offset, |prefix| prefix.chars().count()) + 1
}

/// Splits `source` into tokens.
///
/// Whitespace never reaches the output. The returned vector is the complete
/// token stream; its end is the end of input.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for any character that cannot
/// start a token, and [`LexError::InvalidNumber`] if a literal fails to
/// decode.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("2**3 * 1.5e2").unwrap()
///                                                  .into_iter()
///                                                  .map(|(token, _)| token)
///                                                  .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::DoubleStar,
///                 Token::Number(3.0),
///                 Token::Star,
///                 Token::Number(150.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(tok) => tokens.push((tok, span)),
            Err(()) => return Err(lex_error(source, lexer.slice(), span.start)),
        }
    }

    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Classifies the text logos could not turn into a token.
///
/// Logos backtracks out of incomplete literals such as `1.` or `2e`, so the
/// error slice normally starts with the stray character. The digit branch is
/// a defensive path for a literal the regex accepted but `str::parse`
/// refused, which the literal grammar does not currently allow.
fn lex_error(source: &str, slice: &str, offset: usize) -> LexError {
    let column = column_at(source, offset);

    if slice.starts_with(|c: char| c.is_ascii_digit()) {
        return LexError::InvalidNumber { literal: slice.to_string(),
                                         column };
    }

    LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\0'),
                                    column }
}

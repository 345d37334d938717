/// Lexing errors.
///
/// Raised while splitting the source into tokens: characters that cannot
/// start any token and numeric literals that fail to decode.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token stream does not form a well-formed expression:
/// missing operands, missing operators, or an empty input.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure to turn a source string into a number.
///
/// Evaluation itself cannot fail, so a `NaN` result is always `Ok(NaN)` and
/// never one of these.
pub enum Error {
    /// The source contained text that is not a token.
    Lex(LexError),
    /// The tokens did not form an expression.
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The input held no tokens at all.
    EmptyInput,
    /// An operand was required but an operator was found.
    ExpectedNumber {
        /// The token encountered.
        found:  String,
        /// The 1-based column of the token.
        column: usize,
    },
    /// An operator was required but a number was found.
    ///
    /// This is also what tokens left over after a complete expression look
    /// like, since every operator is consumed by some precedence tier.
    ExpectedOperator {
        /// The token encountered.
        found:  String,
        /// The 1-based column of the token.
        column: usize,
    },
    /// An operand was required but the input ended.
    UnexpectedEndOfInput {
        /// The 1-based column just past the last character.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Expected an expression but the input is empty."),

            Self::ExpectedNumber { found, column } => {
                write!(f, "Error at column {column}: Expected a number, found {found}.")
            },

            Self::ExpectedOperator { found, column } => write!(f,
                                                               "Error at column {column}: Expected an operator, found {found}. Check your input for a missing operator."),

            Self::UnexpectedEndOfInput { column } => write!(f,
                                                            "Error at column {column}: Expected a number, found end of input."),
        }
    }
}

impl std::error::Error for ParseError {}

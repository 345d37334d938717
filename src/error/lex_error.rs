#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// Found a character that does not begin any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The 1-based column where the character was found.
        column:    usize,
    },
    /// A numeric literal matched the lexical rules but could not be decoded.
    ///
    /// Every literal the lexer accepts decodes today, overflow included
    /// (`1e400` is `inf`); this variant is the error path for decoding
    /// rather than a case current input can reach.
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The 1-based column where the literal starts.
        column:  usize,
    },
}

impl LexError {
    /// Gets the column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. } | Self::InvalidNumber { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, column } => {
                write!(f, "Error at column {column}: Unexpected character '{character}'.")
            },
            Self::InvalidNumber { literal, column } => {
                write!(f, "Error at column {column}: Invalid numeric literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}

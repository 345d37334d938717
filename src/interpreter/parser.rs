/// Core parsing logic.
///
/// Entry points that turn a complete token stream into one expression and
/// reject empty input and leftover tokens.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence tier, from addition down to exponentiation,
/// plus the numeric operand rule at the bottom.
pub mod binary;

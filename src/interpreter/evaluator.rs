/// Core evaluation logic.
///
/// Walks an expression tree bottom-up and produces its value.
pub mod core;

/// Binary operator evaluation.
///
/// Applies one arithmetic operator to two already-evaluated operands with
/// IEEE-754 double semantics.
pub mod binary;

use crate::ast::BinaryOperator;

/// Evaluates a binary operation between two values.
///
/// No operator is checked: `5 / 0` is `inf`, `0 / 0` is `NaN`, and `NaN`
/// operands propagate. Exponentiation is `f64::powf`, so `x ** 0` is `1`
/// for every `x`, including `0` and `NaN`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use calcline::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
/// assert_eq!(eval_binary(BinaryOperator::Div, 5.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => left / right,
        Pow => left.powf(right),
    }
}

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::binary::eval_binary,
};

/// One unit of pending work for the evaluator.
enum Step<'a> {
    /// Evaluate a subtree and push its value.
    Visit(&'a Expr),
    /// Pop two values, combine them and push the result.
    Apply(BinaryOperator),
}

impl Expr {
    /// Evaluates the expression and returns its value.
    ///
    /// Evaluation cannot fail. Division by zero and overflow follow IEEE-754
    /// and show up as infinities or `NaN` in the result. The tree is walked
    /// with an explicit work stack, so long operator chains do not grow the
    /// call stack.
    ///
    /// # Example
    /// ```
    /// use calcline::parse;
    ///
    /// let expr = parse("2 * 3 - 10").unwrap();
    /// assert_eq!(expr.eval(), -4.0);
    ///
    /// let expr = parse("0 / 0").unwrap();
    /// assert!(expr.eval().is_nan());
    /// ```
    #[must_use]
    pub fn eval(&self) -> f64 {
        let mut steps = vec![Step::Visit(self)];
        let mut values = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Self::Literal { value, .. }) => values.push(*value),
                Step::Visit(Self::BinaryOp { left, op, right, .. }) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                },
                Step::Apply(op) => {
                    // Both operands were pushed by the visits scheduled above this step.
                    let right = values.pop().unwrap_or(f64::NAN);
                    let left = values.pop().unwrap_or(f64::NAN);
                    values.push(eval_binary(op, left, right));
                },
            }
        }

        values.pop().unwrap_or(f64::NAN)
    }
}

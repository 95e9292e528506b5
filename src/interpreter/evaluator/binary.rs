use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Applies an infix operator to two evaluated operands.
    ///
    /// `%` is the truncated remainder: the result has the sign of the
    /// dividend. Dividing by zero gives a signed infinity (or NaN for `0/0`),
    /// and any remainder by zero is NaN.
    ///
    /// # Example
    /// ```
    /// use grapher::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
    /// assert!(Context::eval_binary(BinaryOperator::Mod, 1.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub const fn eval_binary(op: BinaryOperator, left: f32, right: f32) -> f32 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
        }
    }
}

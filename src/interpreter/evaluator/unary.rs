use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Applies a prefix operator to an evaluated operand.
    ///
    /// # Example
    /// ```
    /// use grapher::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Minus, 5.0), -5.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, 5.0), 5.0);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: f32) -> f32 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Minus => -value,
        }
    }
}

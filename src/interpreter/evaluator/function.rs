use crate::{ast::BuiltinFunction, interpreter::evaluator::core::Context};

impl Context {
    /// Applies a builtin function to an evaluated argument.
    ///
    /// Arguments outside a function's domain follow `f32` semantics, e.g.
    /// `sqrt(-1)` and `log(-1)` are NaN and `log(0)` is negative infinity.
    /// `sgn` maps NaN to `0`.
    ///
    /// # Example
    /// ```
    /// use grapher::{ast::BuiltinFunction, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_function(BuiltinFunction::Sqrt, 9.0), 3.0);
    /// assert_eq!(Context::eval_function(BuiltinFunction::Sgn, -0.5), -1.0);
    /// assert_eq!(Context::eval_function(BuiltinFunction::Round, 2.5), 3.0);
    /// ```
    #[must_use]
    pub fn eval_function(function: BuiltinFunction, value: f32) -> f32 {
        match function {
            BuiltinFunction::Sinh => value.sinh(),
            BuiltinFunction::Cosh => value.cosh(),
            BuiltinFunction::Tanh => value.tanh(),
            BuiltinFunction::Asin => value.asin(),
            BuiltinFunction::Acos => value.acos(),
            BuiltinFunction::Atan => value.atan(),
            BuiltinFunction::Sin => value.sin(),
            BuiltinFunction::Cos => value.cos(),
            BuiltinFunction::Tan => value.tan(),
            BuiltinFunction::Exp => value.exp(),
            BuiltinFunction::Log => value.ln(),
            BuiltinFunction::Sqrt => value.sqrt(),
            BuiltinFunction::Floor => value.floor(),
            BuiltinFunction::Ceil => value.ceil(),
            BuiltinFunction::Round => value.round(),
            BuiltinFunction::Abs => value.abs(),
            BuiltinFunction::Sgn => sign(value),
        }
    }
}

/// Returns `1`, `-1` or `0`; zero of either sign and NaN give `0`.
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

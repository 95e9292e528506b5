use crate::ast::{BuiltinConstant, Expr};

/// Stores the evaluation context.
///
/// The only free name of an expression is `x`, so the context is the value
/// bound to it. Evaluating never allocates and never fails: undefined
/// operations produce NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// The value bound to `x`.
    pub x: f32,
}

impl Context {
    /// Creates a context binding `x`.
    #[must_use]
    pub const fn new(x: f32) -> Self {
        Self { x }
    }

    /// Evaluates an expression tree, children before parents.
    ///
    /// # Example
    /// ```
    /// use grapher::{compile, interpreter::evaluator::core::Context};
    ///
    /// let expr = compile("2x + 1").unwrap();
    /// assert_eq!(Context::new(3.0).eval(&expr), 7.0);
    /// ```
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> f32 {
        match expr {
            Expr::Number(value) => *value,
            Expr::Constant(constant) => self.eval_constant(*constant),
            Expr::Variable => f32::NAN,
            Expr::Function { function, argument } => {
                Self::eval_function(*function, self.eval(argument))
            },
            Expr::Binary { op, left, right } => {
                Self::eval_binary(*op, self.eval(left), self.eval(right))
            },
            Expr::Unary { op, operand } => Self::eval_unary(*op, self.eval(operand)),
        }
    }

    /// Returns the value of a builtin constant.
    #[must_use]
    pub const fn eval_constant(&self, constant: BuiltinConstant) -> f32 {
        match constant {
            BuiltinConstant::Pi => std::f32::consts::PI,
            BuiltinConstant::E => std::f32::consts::E,
            BuiltinConstant::X => self.x,
        }
    }
}

/// Evaluates `expr` with `x` bound to the given value.
///
/// # Example
/// ```
/// use grapher::{compile, interpreter::evaluator::core::evaluate};
///
/// let expr = compile("1/x").unwrap();
/// assert_eq!(evaluate(&expr, 0.0), f32::INFINITY);
/// ```
#[must_use]
pub fn evaluate(expr: &Expr, x: f32) -> f32 {
    Context::new(x).eval(expr)
}

/// Core evaluation logic.
///
/// Holds the evaluation context (the bound value of `x`) and dispatches on
/// the node kind.
pub mod core;

/// Unary operator evaluation.
///
/// Identity and negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Arithmetic with IEEE-754 semantics; division and remainder by zero yield
/// infinity or NaN rather than an error.
pub mod binary;

/// Builtin function evaluation.
///
/// Transcendental, rounding and sign functions in single precision.
pub mod function;

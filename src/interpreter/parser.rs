/// Parser entry point, shared result types and the nesting limit.
///
/// Validates that a token range is non-empty and runs linearization followed
/// by reduction over it.
pub mod core;

/// Function application.
///
/// Decides how far a builtin function's argument extends: a parenthesized
/// group, a chained function, or a run of adjacent numbers and constants.
pub mod function;

/// Linearization.
///
/// Turns a token range into a flat list of operands and operators, inserting
/// implicit multiplication between adjacent operands and collapsing function
/// applications into single operands.
pub mod linear;

/// Precedence reduction.
///
/// Folds the linearized list into a single tree with an operand stack and an
/// operator stack.
pub mod reduce;

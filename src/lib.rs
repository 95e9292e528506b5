//! # grapher
//!
//! grapher is the expression engine of a function plotter written in Rust.
//! It turns user-typed text such as `2sin(x)+3` into a validated expression
//! tree and evaluates that tree for any value of `x`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the closed tables of builtin
/// functions, constants and operators. The tree is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per construct, with its children owned in place.
/// - Fixes each operator's binding rank.
/// - Renders trees as an outline for diagnostics.
pub mod ast;
/// Provides the error types for lexing, parsing and sampling.
///
/// Lexing and parsing errors never escape as failures of an equation; they
/// become its `Invalid` state and are kept for display. The evaluator has no
/// error type at all.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns text into a tree and a tree into a value.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Tokenizes committed text.
/// - Parses tokens with implicit multiplication and function application.
/// - Evaluates trees with IEEE-754 semantics.
pub mod interpreter;
/// Samples valid equations across a viewport.
pub mod plot;
/// Editable equations and the list that holds them.
///
/// # Responsibilities
/// - Keeps the editable buffer and its cursor within bounds.
/// - Re-parses only on commit, keeping the tree stable in between.
/// - Tracks which equation is selected and commits on focus changes.
pub mod session;
/// General numeric helpers.
pub mod util;

/// Tokenizes and parses `source` into an expression tree.
///
/// # Errors
/// Returns `SyntaxError::Lex` if the text contains unrecognized input and
/// `SyntaxError::Parse` if the tokens do not form exactly one expression.
///
/// # Examples
/// ```
/// use grapher::{compile, interpreter::evaluator::core::evaluate};
///
/// let expr = compile("2+3*4").unwrap();
/// assert_eq!(evaluate(&expr, 0.0), 14.0);
///
/// // Function applied to a run of operands: sqrt(4 * x).
/// let expr = compile("sqrt4x").unwrap();
/// assert_eq!(evaluate(&expr, 4.0), 4.0);
///
/// assert!(compile("(1+2").is_err());
/// assert!(compile("").is_err());
/// ```
pub fn compile(source: &str) -> Result<Expr, SyntaxError> {
    let tokens = tokenize(source)?;
    log::trace!("Tokenizer output: {tokens:?}");
    Ok(parse(&tokens)?)
}

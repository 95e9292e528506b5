/// The evaluator module computes the value of a tree.
///
/// The evaluator walks the tree children-first for a given value of `x`. It
/// has no error channel: undefined operations such as `log(-1)` or `1/0`
/// produce NaN or infinity.
///
/// # Responsibilities
/// - Evaluates every node kind, including builtin functions and constants.
/// - Stays allocation-free, since plotting calls it once per sampled column.
pub mod evaluator;
/// The lexer module tokenizes committed text for further parsing.
///
/// The lexer reads the raw text and produces a sequence of tokens: numbers,
/// builtin function and constant names, operators and parentheses. This is
/// the first stage of compilation.
///
/// # Responsibilities
/// - Recognizes decimal literals, including exponents.
/// - Classifies `+` and `-` as prefix or infix by the preceding token.
/// - Reports lexical errors for unrecognized or misplaced input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser linearizes the tokens, inserting implicit multiplication and
/// resolving function applications, then reduces the result by operator
/// precedence into exactly one tree.
///
/// # Responsibilities
/// - Enforces which tokens may follow which.
/// - Implements the three forms of function application.
/// - Reports structural errors; never returns a partial tree.
pub mod parser;

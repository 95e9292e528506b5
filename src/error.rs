/// Lexing errors.
///
/// Raised while splitting committed text into tokens: unrecognized
/// characters and operators that cannot appear where they were written.
pub mod lex_error;
/// Parsing errors.
///
/// Defines every structural violation the parser can detect: empty input,
/// misplaced tokens, unmatched parentheses, starved operators and excessive
/// nesting or tree depth.
pub mod parse_error;
/// Sampling errors.
///
/// Reported when a plot range or column count cannot be sampled.
pub mod plot_error;
/// The union of lexing and parsing errors.
///
/// This is what a failed commit records on its equation.
pub mod syntax_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use plot_error::PlotError;
pub use syntax_error::SyntaxError;

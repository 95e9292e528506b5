use crate::error::{LexError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Either stage of turning text into a tree failed.
pub enum SyntaxError {
    /// The text could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a single expression.
    Parse(ParseError),
}

impl From<LexError> for SyntaxError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// No token matches the input at this position.
    UnrecognizedInput {
        /// The text that could not be matched.
        text:     String,
        /// Byte offset of the text in the source.
        position: usize,
    },
    /// An operator that is only valid between two operands appeared where an
    /// operand was expected, such as `*2` or `(/2)`.
    MisplacedOperator {
        /// The operator symbol.
        operator: char,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl LexError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedInput { position, .. } | Self::MisplacedOperator { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { text, position } => {
                write!(f, "Error at byte {position}: Unrecognized input '{text}'.")
            },
            Self::MisplacedOperator { operator, position } => write!(f,
                                                                     "Error at byte {position}: Operator '{operator}' needs an operand on its left."),
        }
    }
}

impl std::error::Error for LexError {}

use crate::ast::BuiltinFunction;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all structural errors that can occur while parsing tokens.
pub enum ParseError {
    /// The expression, or a parenthesized or function argument inside it, has
    /// no tokens.
    EmptyExpression,
    /// A token appeared in a position where it cannot follow the previous
    /// one, e.g. `)` right after `(`.
    UnexpectedToken {
        /// The offending token.
        token: String,
    },
    /// A function is not followed by anything it could be applied to.
    MissingArgument {
        /// The function lacking an argument.
        function: BuiltinFunction,
    },
    /// A `(` without its `)`, or a `)` without its `(`.
    UnmatchedParen,
    /// An operator did not find enough operands on the operand stack.
    MissingOperand {
        /// The starved operator.
        operator: char,
    },
    /// More than one operand was left once all operators were reduced.
    LeftoverOperands {
        /// The number of operands left over.
        count: usize,
    },
    /// Function applications, prefix operators or parentheses nest deeper
    /// than the parser allows.
    NestingTooDeep {
        /// The maximum allowed nesting.
        limit: usize,
    },
    /// The tree would be deeper than it can safely be walked, even though
    /// the input may not nest at all.
    TreeTooDeep {
        /// The maximum allowed tree depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Parse error: Expression is empty."),
            Self::UnexpectedToken { token } => {
                write!(f, "Parse error: Unexpected token: {token}.")
            },
            Self::MissingArgument { function } => write!(f,
                                                         "Parse error: Function '{}' has no argument.",
                                                         function.name()),
            Self::UnmatchedParen => write!(f, "Parse error: Unmatched parenthesis."),
            Self::MissingOperand { operator } => {
                write!(f, "Parse error: Operator '{operator}' is missing an operand.")
            },
            Self::LeftoverOperands { count } => write!(f,
                                                       "Parse error: {count} operands are not joined by an operator."),
            Self::NestingTooDeep { limit } => write!(f,
                                                     "Parse error: Expression nests deeper than {limit} levels."),
            Self::TreeTooDeep { limit } => {
                write!(f, "Parse error: Expression is deeper than {limit} nodes.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

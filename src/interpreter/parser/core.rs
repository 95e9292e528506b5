use crate::{
    ast::{BinaryOperator, BuiltinFunction, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{linear::linearize, reduce::reduce},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of the input: function applications, prefix operators
/// and parenthesized groups, each counted one level inside the other.
pub const MAX_DEPTH: usize = 256;

/// Maximum depth of a parsed tree.
///
/// Long flat chains such as `1+1+...+1` nest nothing but still build a
/// left-deep spine. Evaluating and dropping a tree both recurse once per
/// level, so this bounds the call stack on adversarial input.
pub const MAX_TREE_DEPTH: usize = 4096;

/// A subtree together with its measurements, as carried on the parser's
/// stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// The subtree.
    pub expr:    Expr,
    /// Number of nodes on the longest root-to-leaf path.
    pub depth:   usize,
    /// Levels of nesting written in the source for this subtree.
    pub nesting: usize,
}

impl Operand {
    /// Wraps a childless node.
    #[must_use]
    pub const fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1, nesting: 0 }
    }

    /// Applies a builtin function to an argument.
    pub fn call(function: BuiltinFunction, argument: Self) -> ParseResult<Self> {
        Ok(Self { depth:   checked_depth(argument.depth)?,
                  nesting: checked_nesting(argument.nesting)?,
                  expr:    Expr::call(function, argument.expr), })
    }

    /// Joins two operands with an infix operator. Infix operators add tree
    /// depth but no nesting.
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> ParseResult<Self> {
        Ok(Self { depth:   checked_depth(left.depth.max(right.depth))?,
                  nesting: left.nesting.max(right.nesting),
                  expr:    Expr::binary(op, left.expr, right.expr), })
    }

    /// Applies a prefix operator.
    pub fn unary(op: UnaryOperator, operand: Self) -> ParseResult<Self> {
        Ok(Self { depth:   checked_depth(operand.depth)?,
                  nesting: checked_nesting(operand.nesting)?,
                  expr:    Expr::unary(op, operand.expr), })
    }

    /// Marks the operand as enclosed in parentheses. The tree is unchanged.
    pub fn group(self) -> ParseResult<Self> {
        Ok(Self { nesting: checked_nesting(self.nesting)?,
                  ..self })
    }
}

/// Returns the depth of a node whose deepest child has depth `child`.
fn checked_depth(child: usize) -> ParseResult<usize> {
    let depth = child + 1;
    if depth > MAX_TREE_DEPTH {
        return Err(ParseError::TreeTooDeep { limit: MAX_TREE_DEPTH });
    }
    Ok(depth)
}

/// Returns the nesting of a construct enclosing one at `inner` levels.
fn checked_nesting(inner: usize) -> ParseResult<usize> {
    let nesting = inner + 1;
    if nesting > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
    }
    Ok(nesting)
}

/// Parses a full token sequence into a single expression tree.
///
/// Every token must be consumed into exactly one root. Nothing is returned
/// on failure; there is no partial tree.
///
/// # Errors
/// Returns a [`ParseError`] for empty input, a token that cannot follow its
/// predecessor, unmatched parentheses, an operator without enough operands,
/// operands left unjoined, nesting beyond [`MAX_DEPTH`], or a tree deeper
/// than [`MAX_TREE_DEPTH`].
///
/// # Example
/// ```
/// use grapher::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.arity(), 2);
///
/// assert!(parse(&[]).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    parse_range(tokens, 0).map(|operand| operand.expr)
}

/// Parses a token range as a complete sub-expression.
///
/// `nesting` counts the function applications enclosing this range.
pub(in crate::interpreter::parser) fn parse_range(tokens: &[Token],
                                                  nesting: usize)
                                                  -> ParseResult<Operand> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let elements = linearize(tokens, nesting)?;
    reduce(elements)
}

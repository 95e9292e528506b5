use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::ParseError,
    interpreter::parser::{
        core::{Operand, ParseResult},
        linear::Element,
    },
};

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
    OpenParen,
}

impl Pending {
    /// Binding rank; lower binds tighter. `(` ranks loosest and is never
    /// reduced by an incoming operator.
    const fn rank(self) -> u8 {
        match self {
            Self::Unary(_) => UnaryOperator::RANK,
            Self::Binary(op) => op.rank(),
            Self::OpenParen => 3,
        }
    }
}

/// Folds linearized elements into a single tree.
///
/// Uses an operand stack and an operator stack:
///
/// - Operands are pushed.
/// - An infix operator first reduces every stacked operator, down to the
///   nearest `(`, whose rank is lower than or equal to its own, then is
///   pushed. Equal ranks reduce, which makes `1-2-3` group as `(1-2)-3`.
/// - A prefix operator is pushed as is; nothing to its left can be complete
///   yet. `--2` is therefore `-(-2)`.
/// - `(` is pushed; `)` reduces down to the matching `(`, drops it, and
///   counts the operand it leaves on top as one level more deeply nested.
///
/// Reducing a binary operator takes the second-to-top operand as its left
/// side and the top as its right side.
///
/// # Errors
/// - `UnmatchedParen` for a `)` with no `(` on the stack, or a `(` left at the
///   end.
/// - `MissingOperand` when an operator is reduced with too few operands.
/// - `LeftoverOperands` when more than one operand remains at the end.
/// - `EmptyExpression` when no operand remains.
/// - `NestingTooDeep` or `TreeTooDeep` when a node would exceed a limit of
///   [`core`](crate::interpreter::parser::core).
pub fn reduce(elements: Vec<Element>) -> ParseResult<Operand> {
    let mut operands: Vec<Operand> = Vec::new();
    let mut operators: Vec<Pending> = Vec::new();

    for element in elements {
        match element {
            Element::Operand(operand) => operands.push(operand),
            Element::Binary(op) => {
                let rank = op.rank();
                while let Some(&top) = operators.last()
                      && top != Pending::OpenParen
                      && rank >= top.rank()
                {
                    operators.pop();
                    apply(&mut operands, top)?;
                }
                operators.push(Pending::Binary(op));
            },
            Element::Unary(op) => operators.push(Pending::Unary(op)),
            Element::OpenParen => operators.push(Pending::OpenParen),
            Element::CloseParen => {
                loop {
                    match operators.pop() {
                        Some(Pending::OpenParen) => break,
                        Some(top) => apply(&mut operands, top)?,
                        None => return Err(ParseError::UnmatchedParen),
                    }
                }
                if let Some(group) = operands.pop() {
                    operands.push(group.group()?);
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        apply(&mut operands, top)?;
    }

    match operands.len() {
        0 => Err(ParseError::EmptyExpression),
        1 => operands.pop().ok_or(ParseError::EmptyExpression),
        count => Err(ParseError::LeftoverOperands { count }),
    }
}

/// Reduces one stacked operator into a node over the top operand(s).
fn apply(operands: &mut Vec<Operand>, pending: Pending) -> ParseResult<()> {
    let node = match pending {
        Pending::Binary(op) => {
            let missing = ParseError::MissingOperand { operator: op.symbol() };
            let right = operands.pop().ok_or_else(|| missing.clone())?;
            let left = operands.pop().ok_or(missing)?;
            Operand::binary(op, left, right)?
        },
        Pending::Unary(op) => {
            let operand = operands.pop()
                                  .ok_or(ParseError::MissingOperand { operator: op.symbol() })?;
            Operand::unary(op, operand)?
        },
        Pending::OpenParen => return Err(ParseError::UnmatchedParen),
    };
    operands.push(node);
    Ok(())
}

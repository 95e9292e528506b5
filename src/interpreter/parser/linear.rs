use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Operand, ParseResult},
            function::parse_application,
        },
    },
};

/// One item of a linearized expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A complete operand: a literal, a constant, or an applied function.
    Operand(Operand),
    /// An infix operator, written or implicit.
    Binary(BinaryOperator),
    /// A prefix operator.
    Unary(UnaryOperator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl Element {
    /// Returns `true` if the element completes an operand, so that the next
    /// element must be an infix operator or `)`.
    const fn ends_operand(&self) -> bool {
        matches!(self, Self::Operand(_) | Self::CloseParen)
    }
}

/// Flattens a token range into operands and operators.
///
/// Scanning left to right, each token is checked against the previous
/// element:
///
/// - Where an operand is expected (start, after an operator, after `(`): a
///   function is applied to its argument, numbers, constants, prefix
///   operators and `(` are taken as they are.
/// - Where an operator is expected (after an operand or `)`): a function,
///   number, constant or `(` gets an implicit `*` before it; infix operators
///   and `)` are taken as they are.
///
/// Anything else is a [`ParseError::UnexpectedToken`].
///
/// # Parameters
/// - `tokens`: The token range, which is consumed entirely.
/// - `nesting`: Function applications enclosing this range.
///
/// # Returns
/// The elements, ready for [`reduce`](crate::interpreter::parser::reduce::reduce).
pub fn linearize(tokens: &[Token], nesting: usize) -> ParseResult<Vec<Element>> {
    let mut elements: Vec<Element> = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        let after_operand = elements.last().is_some_and(Element::ends_operand);

        if after_operand {
            match token {
                Token::Binary(op) => elements.push(Element::Binary(op)),
                Token::CloseParen => elements.push(Element::CloseParen),
                Token::Function(_)
                | Token::Number(_)
                | Token::Variable
                | Token::Constant(_)
                | Token::OpenParen => {
                    elements.push(Element::Binary(BinaryOperator::Mul));
                    index += push_operand_start(&mut elements, &tokens[index..], nesting)?;
                    continue;
                },
                Token::Unary(_) => {
                    return Err(ParseError::UnexpectedToken { token: token.to_string() });
                },
            }
        } else {
            match token {
                Token::Function(_)
                | Token::Number(_)
                | Token::Variable
                | Token::Constant(_)
                | Token::OpenParen => {
                    index += push_operand_start(&mut elements, &tokens[index..], nesting)?;
                    continue;
                },
                Token::Unary(op) => elements.push(Element::Unary(op)),
                Token::Binary(_) | Token::CloseParen => {
                    return Err(ParseError::UnexpectedToken { token: token.to_string() });
                },
            }
        }
        index += 1;
    }

    Ok(elements)
}

/// Pushes the element that starts at `rest[0]`, which must begin an operand.
///
/// Returns the number of tokens consumed: one for a leaf or `(`, the whole
/// application for a function.
fn push_operand_start(elements: &mut Vec<Element>,
                      rest: &[Token],
                      nesting: usize)
                      -> ParseResult<usize> {
    match rest[0] {
        Token::Function(function) => {
            let (operand, consumed) = parse_application(function, &rest[1..], nesting)?;
            elements.push(Element::Operand(operand));
            Ok(1 + consumed)
        },
        Token::Number(value) => {
            elements.push(Element::Operand(Operand::leaf(Expr::Number(value))));
            Ok(1)
        },
        Token::Variable => {
            elements.push(Element::Operand(Operand::leaf(Expr::Variable)));
            Ok(1)
        },
        Token::Constant(constant) => {
            elements.push(Element::Operand(Operand::leaf(Expr::Constant(constant))));
            Ok(1)
        },
        Token::OpenParen => {
            elements.push(Element::OpenParen);
            Ok(1)
        },
        token @ (Token::Binary(_) | Token::Unary(_) | Token::CloseParen) => {
            Err(ParseError::UnexpectedToken { token: token.to_string() })
        },
    }
}

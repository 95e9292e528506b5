use crate::{
    ast::BuiltinFunction,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_DEPTH, Operand, ParseResult, parse_range},
    },
};

/// Applies a builtin function to the argument that follows it.
///
/// Three forms are tried in order:
///
/// 1. `f(expr)`: the parenthesized group up to the matching `)` is parsed as
///    a full expression.
/// 2. `f g ...`: the following function is applied first, by this same rule,
///    so `sin cos x` is `sin(cos(x))`.
/// 3. `f <run>`: the run of numbers and constants directly after `f` is
///    parsed with implicit multiplication, so `sin2x` is `sin(2*x)` while
///    `sin2(x)` is `sin(2)*x`.
///
/// # Parameters
/// - `function`: The function being applied.
/// - `rest`: The tokens after the function name, up to the end of the
///   enclosing range.
/// - `nesting`: Function applications enclosing this one.
///
/// # Returns
/// The applied function as an operand, and the number of tokens of `rest`
/// it consumed.
///
/// # Errors
/// - `MissingArgument` if nothing follows `f`.
/// - `UnmatchedParen` if `f(` has no matching `)`.
/// - `NestingTooDeep` past [`MAX_DEPTH`] levels of nesting.
/// - Any error from parsing the argument itself, including
///   `EmptyExpression` when `f` is directly followed by an operator.
pub fn parse_application(function: BuiltinFunction,
                         rest: &[Token],
                         nesting: usize)
                         -> ParseResult<(Operand, usize)> {
    if nesting >= MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
    }

    match rest.first() {
        None => Err(ParseError::MissingArgument { function }),
        Some(Token::OpenParen) => {
            let close = find_closing_paren(&rest[1..])?;
            let argument = parse_range(&rest[1..=close], nesting + 1)?;
            Ok((Operand::call(function, argument)?, close + 2))
        },
        Some(Token::Function(inner)) => {
            let (argument, consumed) = parse_application(*inner, &rest[1..], nesting + 1)?;
            Ok((Operand::call(function, argument)?, consumed + 1))
        },
        Some(_) => {
            let run = rest.iter()
                          .take_while(|token| {
                              matches!(token, Token::Number(_) | Token::Variable | Token::Constant(_))
                          })
                          .count();
            let argument = parse_range(&rest[..run], nesting + 1)?;
            Ok((Operand::call(function, argument)?, run))
        },
    }
}

/// Finds the `)` closing a group whose `(` precedes `tokens`.
///
/// # Returns
/// The index of the closing parenthesis within `tokens`.
///
/// # Errors
/// `UnmatchedParen` if the range ends while the group is still open.
fn find_closing_paren(tokens: &[Token]) -> ParseResult<usize> {
    let mut depth = 1usize;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            },
            _ => {},
        }
    }
    Err(ParseError::UnmatchedParen)
}

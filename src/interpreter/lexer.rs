use std::fmt;

use logos::Logos;

use crate::{
    ast::{BinaryOperator, BuiltinConstant, BuiltinFunction, UnaryOperator},
    error::LexError,
};

/// Raw lexical units as recognized by the logos DFA.
///
/// Operator characters are not yet classified as unary or binary here; that
/// depends on the previously emitted token and is decided by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// Decimal literals such as `3`, `2.5`, `1.` or `.5`. A complete exponent
    /// suffix is picked up by [`parse_number`].
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f32),
    /// Builtin function names.
    #[token("sinh", |_| BuiltinFunction::Sinh)]
    #[token("cosh", |_| BuiltinFunction::Cosh)]
    #[token("tanh", |_| BuiltinFunction::Tanh)]
    #[token("asin", |_| BuiltinFunction::Asin)]
    #[token("acos", |_| BuiltinFunction::Acos)]
    #[token("atan", |_| BuiltinFunction::Atan)]
    #[token("sin", |_| BuiltinFunction::Sin)]
    #[token("cos", |_| BuiltinFunction::Cos)]
    #[token("tan", |_| BuiltinFunction::Tan)]
    #[token("exp", |_| BuiltinFunction::Exp)]
    #[token("log", |_| BuiltinFunction::Log)]
    #[token("sqrt", |_| BuiltinFunction::Sqrt)]
    #[token("floor", |_| BuiltinFunction::Floor)]
    #[token("ceil", |_| BuiltinFunction::Ceil)]
    #[token("round", |_| BuiltinFunction::Round)]
    #[token("abs", |_| BuiltinFunction::Abs)]
    #[token("sgn", |_| BuiltinFunction::Sgn)]
    Function(BuiltinFunction),
    /// Builtin constant names.
    #[token("pi", |_| BuiltinConstant::Pi)]
    #[token("e", |_| BuiltinConstant::E)]
    #[token("x", |_| BuiltinConstant::X)]
    Constant(BuiltinConstant),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a decimal literal from the current token slice, first extending the
/// slice over an exponent suffix when one follows.
///
/// The exponent is only taken when it is complete (`e`, optional sign, at
/// least one digit), so `2e3` is one literal while `2e` and `2ex` leave the
/// `e` to be read as the constant.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Option<f32> {
    let exponent = exponent_len(lex.remainder());
    lex.bump(exponent);
    lex.slice().parse().ok()
}

/// Returns the byte length of a complete exponent suffix at the start of
/// `rest`, or `0` if there is none.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..].iter()
                                  .take_while(|b| b.is_ascii_digit())
                                  .count();
    if digits == 0 { 0 } else { 1 + sign + digits }
}

/// A classified token.
///
/// Tokens are produced left to right by [`tokenize`] and hold no reference to
/// the source text.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// A numeric literal.
    Number(f32),
    /// A free variable. Reserved: never produced by [`tokenize`].
    Variable,
    /// `pi`, `e` or `x`.
    Constant(BuiltinConstant),
    /// A builtin function name.
    Function(BuiltinFunction),
    /// An operator written between two operands.
    Binary(BinaryOperator),
    /// An operator written before its operand.
    Unary(UnaryOperator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl Token {
    /// Returns `true` if an infix operator may follow this token.
    ///
    /// Operands, function names and `)` end an operand; everything else
    /// leaves the lexer waiting for one.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_)
                 | Self::Variable
                 | Self::Constant(_)
                 | Self::Function(_)
                 | Self::CloseParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable => write!(f, "<variable>"),
            Self::Constant(constant) => write!(f, "{}", constant.name()),
            Self::Function(function) => write!(f, "{}", function.name()),
            Self::Binary(op) => write!(f, "{}", op.symbol()),
            Self::Unary(op) => write!(f, "{}", op.symbol()),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// Classifies an operator lexeme by what precedes it.
///
/// After an operand the lexeme is a binary operator. Otherwise only `+` and
/// `-` are accepted, as prefix operators; `None` means the operator is
/// misplaced.
const fn classify_operator(op: BinaryOperator, after_operand: bool) -> Option<Token> {
    if after_operand {
        return Some(Token::Binary(op));
    }
    match op {
        BinaryOperator::Add => Some(Token::Unary(UnaryOperator::Plus)),
        BinaryOperator::Sub => Some(Token::Unary(UnaryOperator::Minus)),
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => None,
    }
}

/// Splits source text into tokens.
///
/// Whitespace is skipped. `+` and `-` are binary after an operand, function
/// name or `)`, and unary anywhere else, so `1-2` subtracts while `(-2)`
/// negates.
///
/// # Errors
/// Returns a [`LexError`] at the first position no token matches, or where
/// `*`, `/` or `%` appear without a left operand. No tokens are returned in
/// that case.
///
/// # Example
/// ```
/// use grapher::{
///     ast::{BinaryOperator, BuiltinConstant, BuiltinFunction, UnaryOperator},
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("-2sin x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Unary(UnaryOperator::Minus),
///                 Token::Number(2.0),
///                 Token::Function(BuiltinFunction::Sin),
///                 Token::Constant(BuiltinConstant::X)]);
///
/// let tokens = tokenize("1-2").unwrap();
/// assert_eq!(tokens[1], Token::Binary(BinaryOperator::Sub));
///
/// assert!(tokenize("2 ? 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        let Ok(lexeme) = lexeme else {
            return Err(LexError::UnrecognizedInput { text: lexer.slice().to_string(),
                                                     position });
        };
        let after_operand = tokens.last().is_some_and(Token::ends_operand);

        let operator = match lexeme {
            Lexeme::Plus => BinaryOperator::Add,
            Lexeme::Minus => BinaryOperator::Sub,
            Lexeme::Star => BinaryOperator::Mul,
            Lexeme::Slash => BinaryOperator::Div,
            Lexeme::Percent => BinaryOperator::Mod,
            Lexeme::Number(value) => {
                tokens.push(Token::Number(value));
                continue;
            },
            Lexeme::Function(function) => {
                tokens.push(Token::Function(function));
                continue;
            },
            Lexeme::Constant(constant) => {
                tokens.push(Token::Constant(constant));
                continue;
            },
            Lexeme::LParen => {
                tokens.push(Token::OpenParen);
                continue;
            },
            Lexeme::RParen => {
                tokens.push(Token::CloseParen);
                continue;
            },
            Lexeme::Ignored => continue,
        };

        let token = classify_operator(operator, after_operand).ok_or(LexError::MisplacedOperator { operator: operator.symbol(),
                                                                                                  position })?;
        tokens.push(token);
    }

    Ok(tokens)
}

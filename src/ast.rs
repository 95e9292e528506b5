use std::fmt;

/// Builtin single-argument functions recognized by the lexer.
///
/// The order of [`BuiltinFunction::ALL`] is the lookup order of the name
/// table. No name in the table is a prefix of a later one that could shadow
/// it, so lookup order and longest match agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    /// `sinh`
    Sinh,
    /// `cosh`
    Cosh,
    /// `tanh`
    Tanh,
    /// `asin`
    Asin,
    /// `acos`
    Acos,
    /// `atan`
    Atan,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `exp`
    Exp,
    /// `log`, the natural logarithm.
    Log,
    /// `sqrt`
    Sqrt,
    /// `floor`
    Floor,
    /// `ceil`
    Ceil,
    /// `round`, half away from zero.
    Round,
    /// `abs`
    Abs,
    /// `sgn`, returns `-1`, `0` or `1`.
    Sgn,
}

impl BuiltinFunction {
    /// Every builtin function, in name-table order.
    pub const ALL: [Self; 17] = [Self::Sinh,
                                 Self::Cosh,
                                 Self::Tanh,
                                 Self::Asin,
                                 Self::Acos,
                                 Self::Atan,
                                 Self::Sin,
                                 Self::Cos,
                                 Self::Tan,
                                 Self::Exp,
                                 Self::Log,
                                 Self::Sqrt,
                                 Self::Floor,
                                 Self::Ceil,
                                 Self::Round,
                                 Self::Abs,
                                 Self::Sgn];

    /// Returns the name the function is written with.
    ///
    /// # Example
    /// ```
    /// use grapher::ast::BuiltinFunction;
    ///
    /// assert_eq!(BuiltinFunction::Sqrt.name(), "sqrt");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Abs => "abs",
            Self::Sgn => "sgn",
        }
    }
}

/// Builtin named values: `pi`, `e` and the plotted variable `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinConstant {
    /// `pi`
    Pi,
    /// `e`, Euler's number.
    E,
    /// `x`, bound at evaluation time.
    X,
}

impl BuiltinConstant {
    /// Every builtin constant, in name-table order.
    pub const ALL: [Self; 3] = [Self::Pi, Self::E, Self::X];

    /// Returns the name the constant is written with.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::X => "x",
        }
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`, also inserted for implicit multiplication.
    Mul,
    /// `/`
    Div,
    /// `%`, truncated floating-point remainder.
    Mod,
}

impl BinaryOperator {
    /// Returns the binding rank of the operator. A lower rank binds tighter.
    ///
    /// # Example
    /// ```
    /// use grapher::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.rank() < BinaryOperator::Add.rank());
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 1,
            Self::Add | Self::Sub => 2,
        }
    }

    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+`, identity.
    Plus,
    /// `-`, negation.
    Minus,
}

impl UnaryOperator {
    /// Binding rank shared by all prefix operators; tighter than any infix
    /// operator.
    pub const RANK: u8 = 0;

    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// A node of the expression tree.
///
/// The number of children is fixed by the variant: leaves have none,
/// function calls and unary operations own exactly one, binary operations
/// own a left and a right operand. Each node owns its children, so dropping
/// the root releases the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f32),
    /// `pi`, `e` or `x`.
    Constant(BuiltinConstant),
    /// A free variable other than `x`. Reserved: the lexer never produces
    /// one and it evaluates to NaN.
    Variable,
    /// A builtin function applied to its single argument.
    Function {
        /// The applied function.
        function: BuiltinFunction,
        /// The argument expression.
        argument: Box<Self>,
    },
    /// An infix operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
}

impl Expr {
    /// Builds a function call node.
    #[must_use]
    pub fn call(function: BuiltinFunction, argument: Self) -> Self {
        Self::Function { function,
                         argument: Box::new(argument) }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Returns the number of children this kind of node owns.
    ///
    /// # Example
    /// ```
    /// use grapher::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::Number(1.0), Expr::Number(2.0));
    /// assert_eq!(sum.arity(), 2);
    /// assert_eq!(Expr::Number(1.0).arity(), 0);
    /// ```
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Number(_) | Self::Constant(_) | Self::Variable => 0,
            Self::Function { .. } | Self::Unary { .. } => 1,
            Self::Binary { .. } => 2,
        }
    }

    /// Returns the children of the node, left to right.
    ///
    /// # Example
    /// ```
    /// use grapher::compile;
    ///
    /// let expr = compile("2+sin x").unwrap();
    /// assert_eq!(expr.children().count(), expr.arity());
    /// ```
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        let (first, second) = match self {
            Self::Number(_) | Self::Constant(_) | Self::Variable => (None, None),
            Self::Function { argument: child, .. } | Self::Unary { operand: child, .. } => {
                (Some(child.as_ref()), None)
            },
            Self::Binary { left, right, .. } => (Some(left.as_ref()), Some(right.as_ref())),
        };
        first.into_iter().chain(second)
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:width$}", "", width = indent * 2)?;
        match self {
            Self::Number(value) => writeln!(f, "Number ({value})"),
            Self::Constant(constant) => writeln!(f, "Constant ({})", constant.name()),
            Self::Variable => writeln!(f, "Variable"),
            Self::Function { function, argument } => {
                writeln!(f, "Function ({})", function.name())?;
                argument.write_outline(f, indent + 1)
            },
            Self::Binary { op, left, right } => {
                writeln!(f, "Binary ({})", op.symbol())?;
                left.write_outline(f, indent + 1)?;
                right.write_outline(f, indent + 1)
            },
            Self::Unary { op, operand } => {
                writeln!(f, "Unary ({})", op.symbol())?;
                operand.write_outline(f, indent + 1)
            },
        }
    }
}

/// Renders the tree as an indented outline, one node per line.
///
/// # Example
/// ```
/// use grapher::compile;
///
/// let expr = compile("2x").unwrap();
/// assert_eq!(expr.to_string(), "Binary (*)\n  Number (2)\n  Constant (x)\n");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

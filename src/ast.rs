/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed tagged union: a node is exactly one of a literal, a
/// unary operation, or a binary operation. Child expressions are exclusively
/// owned through `Box`, so a tree is finite and acyclic by construction and
/// is dropped recursively with its root. No operations live on the node
/// types themselves; operations are written as exhaustive matches over this
/// enum (see the `interpreter` module), which is what keeps the operation
/// set extensible while the node set stays closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A constant integer value. Leaf node.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A unary operation applied to one subexpression.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation combining two subexpressions.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    ///
    /// ## Example
    /// ```
    /// use arith_eval::ast::Expr;
    ///
    /// let expr = Expr::literal(42);
    /// assert_eq!(expr, Expr::Literal { value: 42 });
    /// ```
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value }
    }

    /// Builds a unary operation node from an operator and its operand.
    ///
    /// The operand must be fully constructed first; trees are always built
    /// bottom-up.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a binary operation node from two operands and an operator.
    ///
    /// ## Example
    /// ```
    /// use arith_eval::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::literal(2), BinaryOperator::Add, Expr::literal(3));
    /// assert_eq!(arith_eval::evaluate(&expr).unwrap(), 5);
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Literal { value }
    }
}

/// Represents a binary operator.
///
/// The set is closed; every operation over expressions matches on all of
/// these without a wildcard arm, so extending it is a compile-time event at
/// each dispatch site.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

use crate::ast::Expr;

/// Renders an expression tree as a fully parenthesized string.
///
/// Literals are printed bare; every compound node is wrapped in parentheses,
/// so the rendering reflects the tree shape exactly and never depends on
/// operator precedence.
///
/// # Example
/// ```
/// use arith_eval::{
///     ast::{BinaryOperator, Expr},
///     render,
/// };
///
/// let expr = Expr::binary(Expr::binary(Expr::literal(2), BinaryOperator::Add, Expr::literal(3)),
///                         BinaryOperator::Mul,
///                         Expr::literal(4));
///
/// assert_eq!(render(&expr), "((2 + 3) * 4)");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value } => value.to_string(),
        Expr::UnaryOp { op, expr } => format!("({op}{})", render(expr)),
        Expr::BinaryOp { left, op, right } => {
            format!("({} {op} {})", render(left), render(right))
        },
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}

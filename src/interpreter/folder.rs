use crate::{
    ast::Expr,
    interpreter::evaluator::{eval_binary, eval_unary},
};

/// Rewrites every constant subtree into a literal node.
///
/// Folding reuses `eval_unary` and `eval_binary`, so a folded tree always
/// evaluates to the same value as the original. A division whose right
/// operand folds to zero is left in place unfolded; evaluating the folded
/// tree then fails exactly where the original would.
///
/// # Example
/// ```
/// use arith_eval::{
///     ast::{BinaryOperator, Expr},
///     fold,
/// };
///
/// let expr = Expr::binary(Expr::literal(2), BinaryOperator::Add, Expr::literal(3));
/// assert_eq!(fold(&expr), Expr::literal(5));
/// ```
#[must_use]
pub fn fold(expr: &Expr) -> Expr {
    match expr {
        Expr::Literal { value } => Expr::literal(*value),
        Expr::UnaryOp { op, expr } => {
            let operand = fold(expr);
            match operand {
                Expr::Literal { value } => Expr::literal(eval_unary(*op, value)),
                _ => Expr::unary(*op, operand),
            }
        },
        Expr::BinaryOp { left, op, right } => {
            let left = fold(left);
            let right = fold(right);

            if let (Expr::Literal { value: a }, Expr::Literal { value: b }) = (&left, &right) {
                // A failing operation stays in the tree; folding never
                // changes error behavior.
                if let Ok(value) = eval_binary(*op, *a, *b) {
                    return Expr::literal(value);
                }
            }

            Expr::binary(left, *op, right)
        },
    }
}

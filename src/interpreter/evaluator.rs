use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for evaluation. The walk is post-order:
/// children are evaluated before their parent combines them, and for binary
/// operations the left operand is evaluated before the right one,
/// unconditionally. Evaluation is pure; it reads the tree and produces a
/// value or an error, nothing else.
///
/// Recursion depth is bounded by the depth of the input tree.
///
/// # Errors
/// Returns `RuntimeError::DivisionByZero` if any division in the tree has a
/// right operand that evaluates to zero. The error propagates immediately to
/// the caller; nothing is caught internally.
///
/// # Example
/// ```
/// use arith_eval::{
///     ast::{BinaryOperator, Expr},
///     evaluate,
/// };
///
/// let expr = Expr::binary(Expr::binary(Expr::literal(2), BinaryOperator::Add, Expr::literal(3)),
///                         BinaryOperator::Mul,
///                         Expr::literal(4));
///
/// assert_eq!(evaluate(&expr).unwrap(), 20);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value } => Ok(*value),
        Expr::UnaryOp { op, expr } => Ok(eval_unary(*op, evaluate(expr)?)),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right)
        },
    }
}

/// Applies a unary operator to an already evaluated operand.
///
/// # Example
/// ```
/// use arith_eval::{ast::UnaryOperator, interpreter::evaluator::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5), -5);
/// ```
#[must_use]
pub const fn eval_unary(op: UnaryOperator, value: i64) -> i64 {
    match op {
        UnaryOperator::Negate => -value,
    }
}

/// Applies a binary operator to two already evaluated operands.
///
/// Division uses native `i64` semantics and therefore truncates toward zero:
/// `-6 / 4` is `-1`, not `-2`. Division by zero is checked explicitly and
/// reported as an error rather than a panic.
///
/// # Example
/// ```
/// use arith_eval::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::evaluator::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Mul, 6, 7).unwrap(), 42);
/// assert_eq!(eval_binary(BinaryOperator::Div, -6, 4).unwrap(), -1);
/// assert_eq!(eval_binary(BinaryOperator::Div, 1, 0).unwrap_err(),
///            RuntimeError::DivisionByZero);
/// ```
pub const fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        },
    }
}

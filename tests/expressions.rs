use arith_eval::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    evaluate, fold, render,
};
use pretty_assertions::assert_eq;

fn bin(left: i64, op: BinaryOperator, right: i64) -> Expr {
    Expr::binary(Expr::literal(left), op, Expr::literal(right))
}

fn assert_evaluates(expr: &Expr, expected: i64) {
    match evaluate(expr) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {expr}"),
        Err(e) => panic!("Evaluating {expr} failed: {e}"),
    }
}

fn assert_division_by_zero(expr: &Expr) {
    match evaluate(expr) {
        Ok(value) => panic!("Evaluating {expr} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e, RuntimeError::DivisionByZero),
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    for value in [0, 1, -1, 42, i64::MAX, i64::MIN] {
        assert_evaluates(&Expr::literal(value), value);
    }

    assert_evaluates(&Expr::from(9), 9);
}

#[test]
fn negation_flips_the_sign() {
    assert_evaluates(&Expr::unary(UnaryOperator::Negate, Expr::literal(7)), -7);
    assert_evaluates(&Expr::unary(UnaryOperator::Negate, Expr::literal(-7)), 7);
    assert_evaluates(&Expr::unary(UnaryOperator::Negate, Expr::literal(0)), 0);
    assert_evaluates(&Expr::unary(UnaryOperator::Negate,
                                  bin(2, BinaryOperator::Add, 3)),
                     -5);
}

#[test]
fn basic_arithmetic() {
    assert_evaluates(&bin(2, BinaryOperator::Add, 3), 5);
    assert_evaluates(&bin(-2, BinaryOperator::Add, 3), 1);
    assert_evaluates(&bin(8, BinaryOperator::Sub, 5), 3);
    assert_evaluates(&bin(5, BinaryOperator::Sub, 8), -3);
    assert_evaluates(&bin(7, BinaryOperator::Mul, 9), 63);
    assert_evaluates(&bin(-7, BinaryOperator::Mul, 9), -63);
    assert_evaluates(&bin(10, BinaryOperator::Div, 2), 5);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates(&bin(-6, BinaryOperator::Div, 4), -1);
    assert_evaluates(&bin(6, BinaryOperator::Div, -4), -1);
    assert_evaluates(&bin(7, BinaryOperator::Div, 2), 3);
    assert_evaluates(&bin(-7, BinaryOperator::Div, 2), -3);
    assert_evaluates(&bin(-7, BinaryOperator::Div, -2), 3);
}

#[test]
fn division_by_zero_fails() {
    for dividend in [10, 0, -3, i64::MAX] {
        assert_division_by_zero(&bin(dividend, BinaryOperator::Div, 0));
    }
}

#[test]
fn division_by_zero_propagates_from_nested_subtrees() {
    // The failing node sits below two healthy ancestors.
    let expr = Expr::binary(Expr::literal(1),
                            BinaryOperator::Add,
                            Expr::unary(UnaryOperator::Negate,
                                        bin(10, BinaryOperator::Div, 0)));
    assert_division_by_zero(&expr);

    // A zero that only appears after evaluating the right subtree.
    let expr = Expr::binary(Expr::literal(5),
                            BinaryOperator::Div,
                            bin(2, BinaryOperator::Sub, 2));
    assert_division_by_zero(&expr);
}

#[test]
fn evaluation_is_deterministic_and_effect_free() {
    let expr = Expr::binary(bin(2, BinaryOperator::Add, 3),
                            BinaryOperator::Mul,
                            Expr::literal(4));

    let first = evaluate(&expr);
    let second = evaluate(&expr);
    assert_eq!(first, second);
    assert_eq!(first.unwrap(), 20);

    // The tree itself is untouched by evaluation.
    let copy = expr.clone();
    let _ = evaluate(&expr);
    assert_eq!(expr, copy);
}

#[test]
fn end_to_end_scenarios() {
    assert_evaluates(&bin(2, BinaryOperator::Add, 3), 5);
    assert_evaluates(&Expr::binary(bin(2, BinaryOperator::Add, 3),
                                   BinaryOperator::Mul,
                                   Expr::literal(4)),
                     20);
    assert_evaluates(&Expr::unary(UnaryOperator::Negate, Expr::literal(7)), -7);
    assert_division_by_zero(&bin(10, BinaryOperator::Div, 0));
    assert_evaluates(&bin(-6, BinaryOperator::Div, 4), -1);
}

#[test]
fn rendering_is_fully_parenthesized() {
    assert_eq!(render(&Expr::literal(42)), "42");
    assert_eq!(render(&Expr::literal(-6)), "-6");
    assert_eq!(render(&Expr::unary(UnaryOperator::Negate, Expr::literal(7))), "(-7)");
    assert_eq!(render(&bin(2, BinaryOperator::Add, 3)), "(2 + 3)");
    assert_eq!(render(&Expr::binary(bin(2, BinaryOperator::Add, 3),
                                    BinaryOperator::Mul,
                                    Expr::literal(4))),
               "((2 + 3) * 4)");
    assert_eq!(render(&Expr::unary(UnaryOperator::Negate,
                                   bin(10, BinaryOperator::Div, 0))),
               "(-(10 / 0))");
}

#[test]
fn folding_collapses_constant_trees() {
    let expr = Expr::binary(bin(2, BinaryOperator::Add, 3),
                            BinaryOperator::Mul,
                            Expr::literal(4));
    assert_eq!(fold(&expr), Expr::literal(20));

    let expr = Expr::unary(UnaryOperator::Negate, bin(8, BinaryOperator::Sub, 5));
    assert_eq!(fold(&expr), Expr::literal(-3));

    assert_eq!(fold(&Expr::literal(11)), Expr::literal(11));
}

#[test]
fn folding_preserves_division_by_zero() {
    let failing = bin(10, BinaryOperator::Div, 0);
    assert_eq!(fold(&failing), failing);

    // Healthy siblings fold, the failing node stays put.
    let expr = Expr::binary(bin(2, BinaryOperator::Add, 3),
                            BinaryOperator::Add,
                            bin(10, BinaryOperator::Div, 0));
    let folded = fold(&expr);
    assert_eq!(folded,
               Expr::binary(Expr::literal(5),
                            BinaryOperator::Add,
                            bin(10, BinaryOperator::Div, 0)));
    assert_division_by_zero(&folded);
}

#[test]
fn folding_agrees_with_evaluation() {
    let samples = [bin(2, BinaryOperator::Add, 3),
                   Expr::binary(bin(2, BinaryOperator::Add, 3),
                                BinaryOperator::Mul,
                                Expr::literal(4)),
                   Expr::unary(UnaryOperator::Negate, Expr::literal(7)),
                   bin(-6, BinaryOperator::Div, 4),
                   bin(10, BinaryOperator::Div, 0)];

    for expr in &samples {
        assert_eq!(evaluate(&fold(expr)), evaluate(expr), "disagreement on {expr}");
    }
}

use arith_eval::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    evaluate, fold,
};
use clap::Parser;

/// arith-eval evaluates a few built-in arithmetic expression trees and
/// prints their rendered form alongside the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Also print each expression after constant folding.
    #[arg(short, long)]
    fold: bool,
}

fn main() {
    let args = Args::parse();

    let samples = [Expr::binary(Expr::literal(2), BinaryOperator::Add, Expr::literal(3)),
                   Expr::binary(Expr::binary(Expr::literal(2),
                                             BinaryOperator::Add,
                                             Expr::literal(3)),
                                BinaryOperator::Mul,
                                Expr::literal(4)),
                   Expr::unary(UnaryOperator::Negate, Expr::literal(7)),
                   Expr::binary(Expr::literal(10), BinaryOperator::Div, Expr::literal(0)),
                   Expr::binary(Expr::literal(-6), BinaryOperator::Div, Expr::literal(4))];

    for (i, expr) in samples.iter().enumerate() {
        println!("{}. Evaluating {expr}.", i + 1);

        match evaluate(expr) {
            Ok(value) => println!("   Result: {value}"),
            Err(e) => println!("   {e}"),
        }

        if args.fold {
            println!("   Folded: {}", fold(expr));
        }
    }
}

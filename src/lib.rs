//! # arith-eval
//!
//! arith-eval is a minimal arithmetic expression tree evaluator. Expressions
//! are a closed set of node shapes (integer literals, unary negation, binary
//! arithmetic), and every operation over them (evaluation, rendering,
//! constant folding) is a self-contained unit that pattern-matches over that
//! closed set. New operations can be added without touching the node
//! definitions; adding a node shape deliberately breaks every operation at
//! compile time until it is handled.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of expression trees.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an arithmetic expression as a tree. Trees are built bottom-up through the
/// constructors on `Expr` and are immutable afterwards.
///
/// # Responsibilities
/// - Defines the closed set of expression node shapes.
/// - Provides the construction surface used by callers (and by a future
///   parser) to build trees.
/// - Keeps operations off the node types so they stay extensible.
pub mod ast;
/// Provides the error type raised during evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression tree. Malformed trees are unrepresentable by construction, so
/// the only runtime failure is division by zero.
///
/// # Responsibilities
/// - Defines the error enum for all evaluation failure modes.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the operations over expression trees.
///
/// This module gathers every operation that walks an expression tree:
/// evaluation, rendering, and constant folding. Each operation is one
/// exhaustive match over the closed node set, and none of them touches the
/// node definitions.
///
/// # Responsibilities
/// - Evaluates trees to their integer value.
/// - Renders trees to a fully parenthesized string form.
/// - Rewrites constant subtrees into literals.
pub mod interpreter;

pub use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{evaluator::evaluate, folder::fold, printer::render},
};

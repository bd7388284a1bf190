/// Evaluates expression trees to their integer value.
///
/// This module contains the core evaluator: a post-order recursive walk that
/// dispatches on the expression variant and signals division by zero as a
/// `RuntimeError`.
pub mod evaluator;
/// Rewrites constant subtrees into literal nodes.
///
/// Constant folding is the second operation over the closed node set and
/// exists on the same terms as the evaluator: one exhaustive match, no
/// changes to the node definitions.
pub mod folder;
/// Renders expression trees as fully parenthesized strings.
pub mod printer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Malformed trees are unrepresentable by construction, and an unhandled
/// node or operator variant is a compile error at the dispatch site, so the
/// only runtime failure left is division by zero.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}

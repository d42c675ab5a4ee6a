/// Graph construction errors.
///
/// Defines all error types that can occur while tokenizing an expression and
/// building its graph: empty input, unknown tokens, broken alternation between
/// numbers and operators, and literals that do not fit into an `i64`.
pub mod build_error;
/// Contraction errors.
///
/// Contains all error types that can be raised while contracting edges, such
/// as division by zero or arithmetic overflow.
pub mod eval_error;

pub use build_error::{BuildError, Expected};
pub use eval_error::EvalError;

/// Either phase of a calculation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The expression could not be turned into a graph.
    Build(BuildError),
    /// The graph could not be contracted to a value.
    Eval(EvalError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<BuildError> for CalcError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

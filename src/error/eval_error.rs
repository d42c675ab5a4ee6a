#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while contracting the graph.
pub enum EvalError {
    /// A `/` edge was contracted while its right operand was zero.
    DivisionByZero {
        /// Original position of the contracted edge.
        position: usize,
    },
    /// The result of a contraction did not fit into `i64`.
    Overflow {
        /// Original position of the contracted edge.
        position: usize,
    },
}

impl EvalError {
    /// Returns the position of the edge whose contraction failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::Overflow { position } => write!(f,
                                                  "Integer overflow while contracting operator {position}."),
        }
    }
}

impl std::error::Error for EvalError {}

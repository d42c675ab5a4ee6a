#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the expression graph.
pub enum BuildError {
    /// The expression contained no tokens after trimming.
    EmptyExpression,
    /// A token was neither an integer literal nor one of `+ - * /`.
    UnexpectedToken {
        /// The offending token.
        token:    String,
        /// Zero-based index of the token in the expression.
        position: usize,
    },
    /// Numbers and operators did not strictly alternate.
    MalformedExpression {
        /// The token found where something else was expected.
        token:    String,
        /// Zero-based index of the token in the expression.
        position: usize,
        /// What the builder expected at this position.
        expected: Expected,
    },
    /// An integer literal did not fit into `i64`.
    LiteralTooLarge {
        /// The literal as written.
        token:    String,
        /// Zero-based index of the token in the expression.
        position: usize,
    },
    /// The expression ended with an operator.
    UnexpectedEndOfInput {
        /// Index at which the missing number was expected.
        position: usize,
    },
}

/// The kind of token the builder was waiting for when alternation broke.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expected {
    /// An integer literal.
    Number,
    /// One of `+ - * /`.
    Operator,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "a number"),
            Self::Operator => write!(f, "an operator"),
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },

            Self::MalformedExpression { token,
                                        position,
                                        expected, } => write!(f,
                                                              "Malformed expression: expected {expected} at position {position} but found '{token}'."),

            Self::LiteralTooLarge { token, position } => {
                write!(f, "Literal '{token}' at position {position} is too large.")
            },

            Self::UnexpectedEndOfInput { position } => write!(f,
                                                              "Unexpected end of input: expected a number at position {position}."),
        }
    }
}

impl std::error::Error for BuildError {}

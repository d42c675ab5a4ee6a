use tracing::trace;

use crate::{
    calculator::{
        graph::Graph,
        lexer::classify,
    },
    error::{BuildError, Expected},
};

/// Result type used by the builder.
pub type BuildResult<T> = Result<T, BuildError>;

/// Builds the expression graph.
///
/// Splits `expression` on runs of whitespace and walks the words left to
/// right. Every integer becomes a node, every operator an edge whose position
/// is its index among the operators. Numbers and operators must alternate,
/// starting and ending with a number, so a built graph always has exactly one
/// more node than it has edges.
///
/// # Parameters
/// - `expression`: The raw expression, e.g. `"2 + 2 * 2"`.
///
/// # Returns
/// The initial graph, with every edge pending.
///
/// # Errors
/// - `EmptyExpression` if the expression has no tokens.
/// - `UnexpectedToken` for a word that is neither an integer nor an operator.
/// - `LiteralTooLarge` for an integer that does not fit into `i64`.
/// - `MalformedExpression` when numbers and operators do not alternate.
/// - `UnexpectedEndOfInput` when the expression ends with an operator.
///
/// # Example
/// ```
/// use graph_calculator::calculator::builder::build_graph;
///
/// let graph = build_graph("2 + 2 * 2").unwrap();
/// assert_eq!(graph.nodes.len(), 3);
/// assert_eq!(graph.edges.len(), 2);
/// assert_eq!(graph.edges[1].weight(), 2);
/// ```
pub fn build_graph(expression: &str) -> BuildResult<Graph> {
    let words: Vec<&str> = expression.split_whitespace().collect();
    if words.is_empty() {
        return Err(BuildError::EmptyExpression);
    }

    let last = words.len() - 1;
    let mut graph = Graph::default();
    let mut expected = Expected::Number;

    for (position, &word) in words.iter().enumerate() {
        let token = classify(word).ok_or_else(|| BuildError::UnexpectedToken { token:
                                                                                   word.to_string(),
                                                                               position })?;
        trace!(?token, word, position, "classified token");

        match (token.operator(), expected) {
            (None, Expected::Number) => {
                graph.push_literal(parse_literal(word, position)?, position == last);
                expected = Expected::Operator;
            },
            (Some(operator), Expected::Operator) => {
                graph.push_operator(operator);
                expected = Expected::Number;
            },
            _ => {
                return Err(BuildError::MalformedExpression { token: word.to_string(),
                                                             position,
                                                             expected });
            },
        }
    }

    if expected == Expected::Number {
        return Err(BuildError::UnexpectedEndOfInput { position: words.len() });
    }

    Ok(graph)
}

/// Parses an integer literal that the lexer already recognized as
/// [`Token::Integer`](crate::calculator::lexer::Token::Integer).
fn parse_literal(word: &str, position: usize) -> BuildResult<i64> {
    word.parse().map_err(|_| BuildError::LiteralTooLarge { token: word.to_string(),
                                                            position })
}

/// The builder module turns an expression string into a graph.
///
/// The builder splits the expression on whitespace, classifies every word with
/// the lexer, and lays the result out as alternating value nodes and operator
/// edges with their neighbour indices filled in.
///
/// # Responsibilities
/// - Rejects empty input and unknown tokens.
/// - Enforces strict alternation of numbers and operators.
/// - Wires every node to its neighbouring edges and vice versa.
pub mod builder;
/// The evaluator module contracts a graph down to a single value.
///
/// The evaluator repeatedly selects the strongest pending edge, applies its
/// operator to the two live endpoint values, and splices the result back into
/// the chain until no edge is left.
///
/// # Responsibilities
/// - Selects edges by weight, breaking ties by original position.
/// - Keeps node and edge cross references consistent after each contraction.
/// - Reports division by zero and overflow at the step where they happen.
pub mod evaluator;
/// The graph module defines nodes, edges and operators.
///
/// Nodes and edges are stored in two append-only vectors and refer to each
/// other by index.
pub mod graph;
/// The lexer module classifies a single whitespace-delimited word.
pub mod lexer;

use tracing::debug;

use crate::error::EvalError;

/// Result type used by the contraction steps.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents one of the four binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero
    Div,
}

impl Operator {
    /// Returns the precedence weight of the operator.
    ///
    /// Edges with a larger weight are contracted first.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator to two values.
    ///
    /// Division truncates toward zero. All operations are checked, so the
    /// contraction fails instead of wrapping.
    ///
    /// # Parameters
    /// - `left`: Value of the left endpoint.
    /// - `right`: Value of the right endpoint.
    /// - `position`: Position of the edge being contracted, for error
    ///   reporting.
    ///
    /// # Example
    /// ```
    /// use graph_calculator::calculator::graph::Operator;
    ///
    /// assert_eq!(Operator::Div.apply(-7, 2, 0), Ok(-3));
    /// assert!(Operator::Div.apply(5, 0, 0).is_err());
    /// ```
    pub const fn apply(self, left: i64, right: i64, position: usize) -> EvalResult<i64> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        match result {
            Some(value) => Ok(value),
            None => Err(EvalError::Overflow { position }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// A value at some point of the left-to-right chain.
///
/// Once a node has been consumed by a contraction its edge indices are stale
/// and no live edge refers to it anymore.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Node {
    /// The literal or the result of an earlier contraction.
    pub value:      i64,
    /// Edge directly to the left, `None` for the leftmost live node.
    pub left_edge:  Option<usize>,
    /// Edge directly to the right, `None` for the rightmost live node.
    pub right_edge: Option<usize>,
}

/// An operator connecting two adjacent live nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    /// The operator applied when the edge is contracted.
    pub operator:   Operator,
    /// Original left-to-right index of the edge. Never changes.
    pub position:   usize,
    /// Current left endpoint.
    pub left_node:  usize,
    /// Current right endpoint.
    pub right_node: usize,
    /// Whether the edge has been contracted.
    pub visited:    bool,
}

impl Edge {
    /// Precedence weight of the edge's operator.
    #[must_use]
    pub const fn weight(&self) -> u8 {
        self.operator.weight()
    }
}

/// Record of a single contraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    /// Position of the contracted edge.
    pub position: usize,
    /// The operator that was applied.
    pub operator: Operator,
    /// Value of the left endpoint.
    pub left:     i64,
    /// Value of the right endpoint.
    pub right:    i64,
    /// Value of the node created by the contraction.
    pub result:   i64,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "#{}: {} {} {} = {}",
               self.position, self.left, self.operator, self.right, self.result)
    }
}

/// The linear expression graph.
///
/// Nodes and edges live in two vectors and reference each other by index.
/// Contracted nodes and edges stay in place, so positions remain stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// All nodes, including those created by contractions.
    pub nodes: Vec<Node>,
    /// All edges, indexed by their position.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Appends a literal node.
    ///
    /// The node is wired to the most recently pushed edge on its left and, if
    /// it is not the last token, to the edge that will be pushed next.
    pub fn push_literal(&mut self, value: i64, is_last: bool) {
        let count = self.edges.len();
        self.nodes.push(Node { value,
                               left_edge: count.checked_sub(1),
                               right_edge: if is_last { None } else { Some(count) } });
    }

    /// Appends an operator edge between the node pushed last and the one
    /// pushed next.
    pub fn push_operator(&mut self, operator: Operator) {
        let position = self.edges.len();
        self.edges.push(Edge { operator,
                               position,
                               left_node: position,
                               right_node: position + 1,
                               visited: false });
    }

    /// Returns `true` while at least one edge is still pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.edges.iter().any(|edge| !edge.visited)
    }

    /// The value of the graph before any contraction, i.e. the first literal.
    #[must_use]
    pub fn initial_value(&self) -> i64 {
        self.nodes.first().map_or(0, |node| node.value)
    }

    /// Contracts the edge at `position`.
    ///
    /// Marks the edge visited, appends a node holding the result and points
    /// the neighbouring edges at it.
    ///
    /// # Errors
    /// Returns `DivisionByZero` or `Overflow` when the operator cannot be
    /// applied to the current endpoint values.
    pub fn contract(&mut self, position: usize) -> EvalResult<Step> {
        let edge = &mut self.edges[position];
        edge.visited = true;
        let Edge { operator,
                   left_node,
                   right_node,
                   .. } = *edge;

        let left = self.nodes[left_node];
        let right = self.nodes[right_node];
        let result = operator.apply(left.value, right.value, position)?;

        let index = self.nodes.len();
        self.nodes.push(Node { value:      result,
                               left_edge:  left.left_edge,
                               right_edge: right.right_edge, });

        if let Some(neighbour) = left.left_edge {
            self.edges[neighbour].right_node = index;
        }
        if let Some(neighbour) = right.right_edge {
            self.edges[neighbour].left_node = index;
        }

        let step = Step { position,
                          operator,
                          left: left.value,
                          right: right.value,
                          result };
        debug!(%step, node = index, "contracted edge");

        Ok(step)
    }
}

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::debug;

use crate::calculator::{
    builder::{BuildResult, build_graph},
    graph::{EvalResult, Graph, Step},
};

/// How the next edge to contract is chosen.
///
/// Both strategies select the pending edge with the largest weight and, among
/// those, the smallest position. They differ only in cost.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Rescan every edge before each contraction.
    #[default]
    Scan,
    /// Pop edges from a priority queue filled once per calculation.
    Queue,
}

/// Evaluates one expression by graph contraction.
///
/// The graph is built eagerly in [`GraphCalculator::new`]. Every call to
/// [`GraphCalculator::calculate`] contracts its own copy, so the same
/// calculator can be evaluated any number of times.
///
/// # Example
/// ```
/// use graph_calculator::GraphCalculator;
///
/// let calculator = GraphCalculator::new("2 * 3 + 4 * 5").unwrap();
/// assert_eq!(calculator.calculate(), Ok(26));
/// ```
#[derive(Debug, Clone)]
pub struct GraphCalculator {
    graph:    Graph,
    strategy: Strategy,
}

impl GraphCalculator {
    /// Builds the graph for `expression` using the default strategy.
    ///
    /// # Errors
    /// Returns a `BuildError` if the expression is empty, contains an unknown
    /// token, or does not alternate numbers and operators.
    pub fn new(expression: &str) -> BuildResult<Self> {
        Self::with_strategy(expression, Strategy::default())
    }

    /// Builds the graph for `expression` using the given selection strategy.
    ///
    /// # Errors
    /// Same as [`GraphCalculator::new`].
    pub fn with_strategy(expression: &str, strategy: Strategy) -> BuildResult<Self> {
        let graph = build_graph(expression)?;
        debug!(nodes = graph.nodes.len(),
               edges = graph.edges.len(),
               ?strategy,
               "built expression graph");
        Ok(Self { graph, strategy })
    }

    /// The graph as built, before any contraction.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The selection strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Contracts the graph down to a single value.
    ///
    /// An expression consisting of a single literal evaluates to that literal.
    ///
    /// # Errors
    /// - `DivisionByZero` when a `/` edge is contracted with a zero right
    ///   operand.
    /// - `Overflow` when a contraction result does not fit into `i64`.
    pub fn calculate(&self) -> EvalResult<i64> {
        let mut total = self.graph.initial_value();
        for step in self.contractions() {
            total = step?.result;
        }
        Ok(total)
    }

    /// Contracts the graph and records every step.
    ///
    /// # Errors
    /// Same as [`GraphCalculator::calculate`].
    pub fn steps(&self) -> EvalResult<Vec<Step>> {
        self.contractions().collect()
    }

    /// Edge positions in the order they are contracted.
    ///
    /// Weights and positions never change, so the order is known without
    /// evaluating anything.
    ///
    /// # Example
    /// ```
    /// use graph_calculator::GraphCalculator;
    ///
    /// let calculator = GraphCalculator::new("1 + 2 * 3 - 4 / 2").unwrap();
    /// assert_eq!(calculator.contraction_order(), vec![1, 3, 0, 2]);
    /// ```
    #[must_use]
    pub fn contraction_order(&self) -> Vec<usize> {
        let mut order: Vec<_> = self.graph.edges.iter().map(|edge| edge.position).collect();
        order.sort_by_key(|&position| (Reverse(self.graph.edges[position].weight()), position));
        order
    }

    /// Returns an iterator performing one contraction per item on a fresh
    /// copy of the graph.
    #[must_use]
    pub fn contractions(&self) -> Contractions {
        Contractions::new(self.graph.clone(), self.strategy)
    }
}

/// Iterator over the contractions of one evaluation.
///
/// Yields one [`Step`] per contracted edge and stops after the first error.
#[derive(Debug)]
pub struct Contractions {
    graph:    Graph,
    selector: Selector,
    failed:   bool,
}

impl Contractions {
    fn new(graph: Graph, strategy: Strategy) -> Self {
        let selector = match strategy {
            Strategy::Scan => Selector::Scan,
            Strategy::Queue => Selector::Queue(graph.edges
                                                    .iter()
                                                    .filter(|edge| !edge.visited)
                                                    .map(|edge| {
                                                        (edge.weight(), Reverse(edge.position))
                                                    })
                                                    .collect()),
        };
        Self { graph,
               selector,
               failed: false }
    }

    /// The graph in its current, partially contracted state.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl Iterator for Contractions {
    type Item = EvalResult<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let position = self.selector.select(&self.graph)?;
        let step = self.graph.contract(position);
        if step.is_err() {
            self.failed = true;
        }
        Some(step)
    }
}

#[derive(Debug)]
enum Selector {
    Scan,
    Queue(BinaryHeap<(u8, Reverse<usize>)>),
}

impl Selector {
    /// Picks the pending edge with the largest weight, smallest position
    /// first.
    fn select(&mut self, graph: &Graph) -> Option<usize> {
        match self {
            Self::Scan => graph.edges
                               .iter()
                               .filter(|edge| !edge.visited)
                               .min_by_key(|edge| (Reverse(edge.weight()), edge.position))
                               .map(|edge| edge.position),
            Self::Queue(heap) => heap.pop().map(|(_, Reverse(position))| position),
        }
    }
}

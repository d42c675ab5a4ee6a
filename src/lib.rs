//! # graph-calculator
//!
//! graph-calculator evaluates space-separated integer expressions such as
//! `2 + 2 * 2` without a parse tree. The expression is laid out as a chain of
//! value nodes joined by operator edges, and the strongest edge is contracted
//! again and again until a single value remains.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::cargo_common_metadata)]

/// Builds and contracts expression graphs.
///
/// This module ties together the lexer, the graph builder and the
/// contraction evaluator. It exposes [`GraphCalculator`], the entry point for
/// evaluating a single expression.
///
/// # Responsibilities
/// - Classifies tokens and lays them out as nodes and edges.
/// - Contracts edges in precedence order, left to right within a precedence.
/// - Reports build and evaluation errors with the offending position.
pub mod calculator;
/// Provides the error types for building and evaluating expressions.
///
/// Build errors are raised while the graph is constructed, evaluation errors
/// while it is contracted. [`CalcError`] wraps both for callers that do not
/// care about the phase.
pub mod error;
/// The interactive read-evaluate-print loop.
///
/// Reads one expression per line, handles exit commands and blank lines, and
/// prints either the result or a formatted error.
pub mod repl;

pub use calculator::{
    evaluator::{GraphCalculator, Strategy},
    graph::Step,
};
pub use error::{BuildError, CalcError, EvalError};

/// Evaluates an expression with the default strategy.
///
/// # Errors
/// Returns a [`CalcError`] if the expression cannot be built or contracted.
///
/// # Examples
/// ```
/// use graph_calculator::evaluate;
///
/// assert_eq!(evaluate("8 - 4 - 2"), Ok(2));
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, CalcError> {
    evaluate_with(expression, Strategy::default())
}

/// Evaluates an expression with the given edge selection strategy.
///
/// # Errors
/// Returns a [`CalcError`] if the expression cannot be built or contracted.
pub fn evaluate_with(expression: &str, strategy: Strategy) -> Result<i64, CalcError> {
    let calculator = GraphCalculator::with_strategy(expression, strategy)?;
    Ok(calculator.calculate()?)
}

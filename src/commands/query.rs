//! Path query command
//!
//! Finds the shortest ladder (or all of them) between two words.

use crate::core::{Result, Word};
use crate::graph::{AnyGraph, Graph, Mode};
use crate::search::{AllPathsResult, PathResult, all_shortest_paths, shortest_path};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default cap on enumerated ladders for `--all`
pub const DEFAULT_PATH_LIMIT: usize = 100;

/// Configuration for a path query
pub struct QueryConfig {
    pub source: String,
    pub target: String,
    /// Enumerate every shortest ladder instead of one
    pub all: bool,
    pub limit: Option<usize>,
}

impl QueryConfig {
    #[must_use]
    pub const fn new(source: String, target: String) -> Self {
        Self {
            source,
            target,
            all: false,
            limit: Some(DEFAULT_PATH_LIMIT),
        }
    }
}

/// What the query found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Single(PathResult),
    All(AllPathsResult),
}

impl QueryOutcome {
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        match self {
            Self::Single(result) => result.distance(),
            Self::All(result) => result.distance(),
        }
    }
}

/// Result of a path query
pub struct QueryResult {
    pub source: Word,
    pub target: Word,
    pub outcome: QueryOutcome,
    pub duration: Duration,
}

/// Turn user input into a query word
///
/// Surrounding whitespace is trimmed and letters are lowercased, so `Cat`
/// queries the same node as `cat`.
///
/// # Errors
/// Returns `InvalidWord` if anything other than letters remains.
pub fn parse_query_word(text: &str) -> Result<Word> {
    Ok(Word::new(text.trim().to_lowercase())?)
}

/// Run a query against a graph of either mode
///
/// # Errors
///
/// Returns an error if:
/// - Either word is malformed (`InvalidWord`)
/// - Either word's length differs from the graph's (`LengthMismatch`)
/// - Either word is not in the graph (`UnknownWord`)
/// - The path limit is zero (`InvalidInput`)
pub fn query_path(graph: &AnyGraph, config: &QueryConfig) -> Result<QueryResult> {
    match graph {
        AnyGraph::Candidate(g) => query_graph(g, config),
        AnyGraph::Valid(g) => query_graph(g, config),
    }
}

fn query_graph<M: Mode>(graph: &Graph<M>, config: &QueryConfig) -> Result<QueryResult> {
    let source = parse_query_word(&config.source)?;
    let target = parse_query_word(&config.target)?;

    let start = Instant::now();
    let outcome = if config.all {
        QueryOutcome::All(all_shortest_paths(graph, &source, &target, config.limit)?)
    } else {
        QueryOutcome::Single(shortest_path(graph, &source, &target)?)
    };
    let duration = start.elapsed();

    debug!(%source, %target, distance = ?outcome.distance(), ?duration, "query finished");

    Ok(QueryResult {
        source,
        target,
        outcome,
        duration,
    })
}

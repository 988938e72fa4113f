//! Benchmark command
//!
//! Times shortest-path queries between randomly chosen valid words.

use crate::core::{LadderError, Result, Word};
use crate::graph::{AnyGraph, Graph, Mode};
use crate::search::shortest_path;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub reachable: usize,
    pub unreachable: usize,
    /// Ladder length -> number of queries
    pub distribution: BTreeMap<usize, usize>,
    pub min_distance: Option<usize>,
    pub max_distance: Option<usize>,
    pub average_distance: f64,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Run `config.count` random queries against a graph of either mode
///
/// Endpoints are drawn only from valid words, so candidate graphs are
/// benchmarked on real-word queries too. The same seed always draws the same
/// pairs.
///
/// # Errors
/// Returns `InvalidInput` if the graph has no valid word to draw from.
pub fn run_benchmark(graph: &AnyGraph, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    match graph {
        AnyGraph::Candidate(g) => benchmark(g, config),
        AnyGraph::Valid(g) => benchmark(g, config),
    }
}

fn benchmark<M: Mode>(graph: &Graph<M>, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let words: Vec<&Word> = graph
        .nodes()
        .iter()
        .filter(|node| node.is_valid())
        .map(|node| node.word())
        .collect();
    if words.is_empty() {
        return Err(LadderError::InvalidInput(
            "graph has no valid words to benchmark".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let pairs: Vec<(&Word, &Word)> = (0..config.count)
        .map(|_| {
            let source = words[rng.random_range(0..words.len())];
            let target = words[rng.random_range(0..words.len())];
            (source, target)
        })
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut unreachable = 0;

    for (idx, (source, target)) in pairs.iter().enumerate() {
        match shortest_path(graph, source, target)?.distance() {
            Some(distance) => *distribution.entry(distance).or_insert(0) += 1,
            None => unreachable += 1,
        }
        if idx % 100 == 0 {
            pb.set_message(format!("{source} → {target}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let reachable: usize = distribution.values().sum();
    let total_distance: usize = distribution.iter().map(|(d, n)| d * n).sum();

    Ok(BenchmarkResult {
        total_queries: pairs.len(),
        reachable,
        unreachable,
        min_distance: distribution.keys().next().copied(),
        max_distance: distribution.keys().next_back().copied(),
        average_distance: if reachable == 0 {
            0.0
        } else {
            total_distance as f64 / reachable as f64
        },
        distribution,
        duration,
        queries_per_second: pairs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::graph::{GraphMode, build};

    fn quiet(count: usize) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(count);
        config.show_progress = false;
        config
    }

    fn graph(mode: GraphMode) -> AnyGraph {
        build(
            &Corpus::load(["cat", "cot", "cog", "dog", "dot", "zzz"], 3).unwrap(),
            mode,
        )
    }

    #[test]
    fn benchmark_counts_add_up() {
        let result = run_benchmark(&graph(GraphMode::Valid), &quiet(200)).unwrap();
        assert_eq!(result.total_queries, 200);
        assert_eq!(result.reachable + result.unreachable, 200);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.reachable);
    }

    #[test]
    fn benchmark_distances_are_bounded() {
        let result = run_benchmark(&graph(GraphMode::Valid), &quiet(200)).unwrap();
        assert!(result.max_distance.unwrap_or(0) <= 3);
        assert!(result.average_distance >= result.min_distance.unwrap_or(0) as f64);
        assert!(result.average_distance <= result.max_distance.unwrap_or(0) as f64);
    }

    #[test]
    fn same_seed_same_distribution() {
        let a = run_benchmark(&graph(GraphMode::Valid), &quiet(50)).unwrap();
        let b = run_benchmark(&graph(GraphMode::Valid), &quiet(50)).unwrap();
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.unreachable, b.unreachable);
    }

    #[test]
    fn candidate_graph_samples_only_valid_words() {
        let result = run_benchmark(&graph(GraphMode::Candidate), &quiet(50)).unwrap();
        assert_eq!(result.total_queries, 50);
    }

    #[test]
    fn empty_graph_is_rejected() {
        let empty = build(&Corpus::load(Vec::<&str>::new(), 3).unwrap(), GraphMode::Valid);
        assert!(matches!(
            run_benchmark(&empty, &quiet(10)),
            Err(LadderError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_queries() {
        let result = run_benchmark(&graph(GraphMode::Valid), &quiet(0)).unwrap();
        assert_eq!(result.total_queries, 0);
        assert_eq!(result.min_distance, None);
        assert!(result.average_distance.abs() < f64::EPSILON);
    }
}

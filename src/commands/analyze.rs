//! Graph analysis command
//!
//! Summarizes a graph and optionally computes its diameter, most central words,
//! largest components and communities.

use crate::analysis::{
    Diameter, GraphStats, betweenness_centrality, communities, connected_components, diameter,
    top_degree,
};
use crate::core::Word;
use crate::graph::{AnyGraph, Graph, Mode};
use std::time::{Duration, Instant};

/// Configuration for analyzing a graph
pub struct AnalyzeConfig {
    /// Keep degree-0 ("aloof") words in the analysis
    pub include_isolated: bool,
    pub diameter: bool,
    /// How many of the most central words to report, if any
    pub betweenness: Option<usize>,
    /// How many of the largest components to list, if any
    pub components: Option<usize>,
    /// How many of the largest communities to list, if any
    pub communities: Option<usize>,
    /// Seed for the community search's visiting order
    pub seed: u64,
    /// How many of the highest-degree words to report
    pub top_degree: usize,
}

impl AnalyzeConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_isolated: false,
            diameter: false,
            betweenness: None,
            components: None,
            communities: None,
            seed: 42,
            top_degree: 5,
        }
    }
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of analyzing a graph
pub struct AnalysisResult {
    pub stats: GraphStats,
    /// Aloof words dropped before analysis (0 when they were kept)
    pub excluded_isolated: usize,
    pub hubs: Vec<(Word, usize)>,
    pub diameter: Option<Diameter>,
    pub central: Vec<(Word, f64)>,
    pub components: Vec<Vec<Word>>,
    /// Total number of communities found (0 when not requested)
    pub community_count: usize,
    pub communities: Vec<Vec<Word>>,
    pub duration: Duration,
}

/// Analyze a graph of either mode
#[must_use]
pub fn analyze_graph(graph: &AnyGraph, config: &AnalyzeConfig) -> AnalysisResult {
    match graph {
        AnyGraph::Candidate(g) => analyze(g, config),
        AnyGraph::Valid(g) => analyze(g, config),
    }
}

fn analyze<M: Mode>(graph: &Graph<M>, config: &AnalyzeConfig) -> AnalysisResult {
    let start = Instant::now();

    let filtered;
    let (graph, excluded_isolated) = if config.include_isolated {
        (graph, 0)
    } else {
        filtered = graph.without_isolated();
        let excluded = graph.node_count() - filtered.node_count();
        (&filtered, excluded)
    };

    let stats = GraphStats::compute(graph);
    let hubs = top_degree(graph, config.top_degree)
        .into_iter()
        .map(|(word, degree)| (word.clone(), degree))
        .collect();
    let diameter = if config.diameter {
        diameter(graph)
    } else {
        None
    };
    let central = config
        .betweenness
        .map(|top| betweenness_centrality(graph, top))
        .unwrap_or_default();
    let components = config
        .components
        .map(|top| {
            let mut components = connected_components(graph);
            components.truncate(top);
            components
        })
        .unwrap_or_default();
    let (community_count, communities) = config
        .communities
        .map(|top| {
            let mut found = communities(graph, config.seed);
            let count = found.len();
            found.truncate(top);
            (count, found)
        })
        .unwrap_or_default();

    AnalysisResult {
        stats,
        excluded_isolated,
        hubs,
        diameter,
        central,
        components,
        community_count,
        communities,
        duration: start.elapsed(),
    }
}

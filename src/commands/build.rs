//! Graph building command
//!
//! Loads a word list, builds a graph and saves it for later queries.

use super::save_graph;
use crate::core::{LadderError, Result};
use crate::corpus::loader::load_from_file;
use crate::graph::{AnyGraph, GraphBuilder, GraphMode};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for building a graph
pub struct BuildConfig {
    pub input: PathBuf,
    pub word_length: usize,
    pub mode: GraphMode,
    /// Where to save the graph; `None` builds without saving
    pub output: Option<PathBuf>,
    pub parallel: bool,
}

impl BuildConfig {
    #[must_use]
    pub const fn new(input: PathBuf, word_length: usize) -> Self {
        Self {
            input,
            word_length,
            mode: GraphMode::Valid,
            output: None,
            parallel: false,
        }
    }
}

/// Result of building a graph
pub struct BuildResult {
    pub graph: AnyGraph,
    pub corpus_words: usize,
    pub output: Option<PathBuf>,
    pub duration: Duration,
}

/// Load the word list, build the graph, and save it if an output path is set
///
/// # Errors
///
/// Returns an error if:
/// - The word length is zero or the word list cannot be read
/// - No word of the requested length survives loading (`EmptyCorpus`)
/// - The graph cannot be written
pub fn build_graph(config: &BuildConfig) -> Result<BuildResult> {
    let start = Instant::now();

    let corpus = load_from_file(&config.input, config.word_length)?;
    if corpus.is_empty() {
        return Err(LadderError::EmptyCorpus {
            word_length: config.word_length,
        });
    }

    let graph = GraphBuilder::new(&corpus)
        .parallel(config.parallel)
        .build(config.mode);

    if let Some(path) = &config.output {
        save_graph(&graph, path)?;
    }

    Ok(BuildResult {
        graph,
        corpus_words: corpus.len(),
        output: config.output.clone(),
        duration: start.elapsed(),
    })
}

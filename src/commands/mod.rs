//! Command implementations
//!
//! Each command takes a config struct, does its work and returns a result
//! struct for the `output` module to print. Graph files are read and written
//! here; the graph types themselves only see readers and writers.

pub mod analyze;
pub mod benchmark;
pub mod build;
pub mod query;

pub use analyze::{AnalysisResult, AnalyzeConfig, analyze_graph};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use build::{BuildConfig, BuildResult, build_graph};
pub use query::{QueryConfig, QueryOutcome, QueryResult, parse_query_word, query_path};

use crate::core::{PersistError, Result};
use crate::graph::AnyGraph;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write a graph to `path` as JSON
///
/// # Errors
/// Returns `LadderError::Persist` if the file cannot be created or written.
pub fn save_graph(graph: &AnyGraph, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(PersistError::Io)?;
    let mut writer = BufWriter::new(file);
    graph.to_writer(&mut writer)?;
    writer.flush().map_err(PersistError::Io)?;
    info!(path = %path.display(), mode = %graph.mode(), "saved graph");
    Ok(())
}

/// Read a graph of either mode from `path`
///
/// # Errors
/// Returns `LadderError::Persist` if the file is missing or malformed.
pub fn load_graph(path: &Path) -> Result<AnyGraph> {
    let file = File::open(path).map_err(PersistError::Io)?;
    let graph = AnyGraph::from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        mode = %graph.mode(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::graph::{GraphMode, build};

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let corpus = Corpus::load(["cat", "cot", "dot"], 3).unwrap();
        let graph = build(&corpus, GraphMode::Candidate);

        save_graph(&graph, &path).unwrap();
        assert_eq!(load_graph(&path).unwrap(), graph);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_graph(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }
}

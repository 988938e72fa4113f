//! Shortest-path queries over ladder graphs
//!
//! Queries only read the graph, so one graph can serve many concurrent queries.

mod bfs;

pub(crate) use bfs::{distances_from, ladder_between};
pub use bfs::{AllPathsResult, PathResult, all_shortest_paths, shortest_path};

//! Graph analysis
//!
//! Summary statistics, connected components, diameter, betweenness
//! centrality and communities for a built ladder graph.

mod betweenness;
mod community;
mod diameter;

pub use betweenness::betweenness_centrality;
pub use community::communities;
pub use diameter::{Diameter, diameter};

use crate::core::Word;
use crate::graph::{Graph, GraphMode, Mode};
use std::collections::VecDeque;

/// Summary of a graph's shape
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub mode: GraphMode,
    pub word_length: usize,
    pub nodes: usize,
    pub edges: usize,
    pub valid_nodes: usize,
    /// Degree-0 ("aloof") nodes
    pub isolated: usize,
    /// Connected components, isolated nodes counting as singletons
    pub components: usize,
    pub largest_component: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

impl GraphStats {
    #[must_use]
    pub fn compute<M: Mode>(graph: &Graph<M>) -> Self {
        let degrees: Vec<usize> = (0..graph.node_count())
            .map(|i| graph.neighbor_indices(i).len())
            .collect();
        let components = component_indices(graph);

        let nodes = graph.node_count();
        let edges = graph.edge_count();

        Self {
            mode: graph.mode(),
            word_length: graph.word_length(),
            nodes,
            edges,
            valid_nodes: graph.nodes().iter().filter(|n| n.is_valid()).count(),
            isolated: degrees.iter().filter(|&&d| d == 0).count(),
            components: components.len(),
            largest_component: components.first().map_or(0, Vec::len),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            mean_degree: if nodes == 0 {
                0.0
            } else {
                2.0 * edges as f64 / nodes as f64
            },
        }
    }
}

/// Connected components as sorted word lists
///
/// Ordered by size, largest first, then by first word.
#[must_use]
pub fn connected_components<M: Mode>(graph: &Graph<M>) -> Vec<Vec<Word>> {
    component_indices(graph)
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|i| graph.word_at(i).clone())
                .collect()
        })
        .collect()
}

/// Components as ascending node-index lists, largest first
pub(crate) fn component_indices<M: Mode>(graph: &Graph<M>) -> Vec<Vec<usize>> {
    let n = graph.node_count();
    let mut seen = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &next in graph.neighbor_indices(current) {
                if !seen[next] {
                    seen[next] = true;
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    // Stable sort keeps discovery order (by first index) among equal sizes
    components.sort_by_key(|c| std::cmp::Reverse(c.len()));
    components
}

/// Words with no neighbors
#[must_use]
pub fn isolated_words<M: Mode>(graph: &Graph<M>) -> Vec<&Word> {
    graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|(i, _)| graph.neighbor_indices(*i).is_empty())
        .map(|(_, node)| node.word())
        .collect()
}

/// Highest-degree words, ties broken lexicographically
#[must_use]
pub fn top_degree<M: Mode>(graph: &Graph<M>, top: usize) -> Vec<(&Word, usize)> {
    let mut ranked: Vec<(&Word, usize)> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| (node.word(), graph.neighbor_indices(i).len()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(top);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::graph::build_valid;

    fn graph() -> crate::graph::ValidGraph {
        build_valid(
            &Corpus::load(["cat", "cot", "cog", "dog", "dot", "aal", "aam", "zzz"], 3).unwrap(),
        )
    }

    #[test]
    fn stats_summarize_graph() {
        let stats = GraphStats::compute(&graph());
        assert_eq!(stats.mode, GraphMode::Valid);
        assert_eq!(stats.nodes, 8);
        assert_eq!(stats.edges, 6);
        assert_eq!(stats.valid_nodes, 8);
        assert_eq!(stats.isolated, 1);
        assert_eq!(stats.components, 3);
        assert_eq!(stats.largest_component, 5);
        assert_eq!(stats.max_degree, 3);
        assert!((stats.mean_degree - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn components_ordered_by_size() {
        let components = connected_components(&graph());
        let sizes: Vec<usize> = components.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![5, 2, 1]);
        assert_eq!(components[1], vec![Word::new("aal").unwrap(), Word::new("aam").unwrap()]);
        assert_eq!(components[2], vec![Word::new("zzz").unwrap()]);
    }

    #[test]
    fn isolated_words_listed() {
        let g = graph();
        let aloof: Vec<&str> = isolated_words(&g).into_iter().map(Word::text).collect();
        assert_eq!(aloof, vec!["zzz"]);
    }

    #[test]
    fn top_degree_ranks_cot_first() {
        let g = graph();
        let top = top_degree(&g, 2);
        assert_eq!(top[0].0.text(), "cot");
        assert_eq!(top[0].1, 3);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn empty_graph_stats() {
        let g = build_valid(&Corpus::load(Vec::<&str>::new(), 3).unwrap());
        let stats = GraphStats::compute(&g);
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.components, 0);
        assert!(stats.mean_degree.abs() < f64::EPSILON);
    }
}

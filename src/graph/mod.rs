//! Ladder graphs
//!
//! A graph's nodes are words of one length; an edge joins two words that
//! differ in exactly one position. The graph's mode is part of its type:
//!
//! - [`CandidateGraph`]: every one-letter variant of every corpus word, with
//!   `is_valid` recording corpus membership.
//! - [`ValidGraph`]: corpus words only, edges only between corpus words.
//!
//! Graphs are immutable once built. Nodes are stored in lexicographic order and
//! adjacency lists are sorted, so iteration order is reproducible.

pub mod annotate;
pub mod builder;
pub mod persist;

pub use annotate::annotate;
pub use builder::{GraphBuilder, build, build_candidate, build_valid};

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Runtime tag for a graph's mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    /// All single-letter variants, any validity
    Candidate,
    /// Only corpus words and the edges between them
    Valid,
}

impl GraphMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Valid => "valid",
        }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate" => Ok(Self::Candidate),
            "valid" | "validity-restricted" => Ok(Self::Valid),
            other => Err(format!(
                "unknown graph mode '{other}' (expected 'candidate' or 'valid')"
            )),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Candidate {}
    impl Sealed for super::ValidityRestricted {}
}

/// Type-level graph mode
pub trait Mode: sealed::Sealed + fmt::Debug + Send + Sync + 'static {
    const KIND: GraphMode;
}

/// Marker for candidate graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Candidate;

/// Marker for validity-restricted graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityRestricted;

impl Mode for Candidate {
    const KIND: GraphMode = GraphMode::Candidate;
}

impl Mode for ValidityRestricted {
    const KIND: GraphMode = GraphMode::Valid;
}

/// A graph vertex: a word and whether it belongs to the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    word: Word,
    is_valid: bool,
}

impl Node {
    #[must_use]
    pub const fn new(word: Word, is_valid: bool) -> Self {
        Self { word, is_valid }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// An undirected, unweighted word graph of mode `M`
pub struct Graph<M: Mode> {
    word_length: usize,
    nodes: Vec<Node>,
    index: FxHashMap<Word, usize>,
    adjacency: Vec<Vec<usize>>,
    mode: PhantomData<M>,
}

pub type CandidateGraph = Graph<Candidate>;
pub type ValidGraph = Graph<ValidityRestricted>;

impl<M: Mode> Graph<M> {
    /// Assemble a graph from nodes and index-pair edges
    ///
    /// Nodes are sorted and edges remapped; adjacency lists are sorted and
    /// deduplicated, so callers may pass edges in any order or orientation.
    /// Callers guarantee node words are unique and edges are not self-loops.
    pub(crate) fn assemble(
        word_length: usize,
        nodes: Vec<Node>,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_unstable_by(|&a, &b| nodes[a].word.cmp(&nodes[b].word));

        let mut remap = vec![0; nodes.len()];
        for (new_idx, &old_idx) in order.iter().enumerate() {
            remap[old_idx] = new_idx;
        }

        let mut slots: Vec<Option<Node>> = nodes.into_iter().map(Some).collect();
        let nodes: Vec<Node> = order
            .iter()
            .filter_map(|&old_idx| slots[old_idx].take())
            .collect();

        let index: FxHashMap<Word, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.word.clone(), i))
            .collect();

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        for (a, b) in edges {
            let (a, b) = (remap[a], remap[b]);
            debug_assert_ne!(a, b, "self-loop in ladder graph");
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        Self {
            word_length,
            nodes,
            index,
            adjacency,
            mode: PhantomData,
        }
    }

    /// Build a new graph keeping only nodes where `keep[i]`, relabelled with `validity[i]`
    ///
    /// Edges survive when both endpoints are kept.
    pub(crate) fn induced<N: Mode>(&self, keep: &[bool], validity: &[bool]) -> Graph<N> {
        let mut remap: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut nodes = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if keep[i] {
                remap[i] = Some(nodes.len());
                nodes.push(Node::new(node.word.clone(), validity[i]));
            }
        }

        let edges: Vec<(usize, usize)> = self
            .edge_indices()
            .filter_map(|(a, b)| Some((remap[a]?, remap[b]?)))
            .collect();

        Graph::assemble(self.word_length, nodes, edges)
    }

    /// Mode tag of this graph
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GraphMode {
        M::KIND
    }

    /// Length of every word in the graph
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in lexicographic order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, word: &Word) -> Option<&Node> {
        self.index_of(word).map(|i| &self.nodes[i])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    /// Validity flag of a node, or `None` if the word is not in the graph
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> Option<bool> {
        self.node(word).map(Node::is_valid)
    }

    /// Neighbors of a word in lexicographic order
    pub fn neighbors<'a>(&'a self, word: &Word) -> Option<impl Iterator<Item = &'a Word> + use<'a, M>> {
        self.index_of(word).map(|i| {
            self.adjacency[i]
                .iter()
                .map(move |&j| &self.nodes[j].word)
        })
    }

    #[must_use]
    pub fn degree(&self, word: &Word) -> Option<usize> {
        self.index_of(word).map(|i| self.adjacency[i].len())
    }

    /// Every edge once, as (smaller, larger) in lexicographic order
    pub fn edges(&self) -> impl Iterator<Item = (&Word, &Word)> + '_ {
        self.edge_indices()
            .map(|(a, b)| (&self.nodes[a].word, &self.nodes[b].word))
    }

    /// A copy of this graph without degree-0 ("aloof") nodes
    #[must_use]
    pub fn without_isolated(&self) -> Self {
        let keep: Vec<bool> = self.adjacency.iter().map(|n| !n.is_empty()).collect();
        let validity: Vec<bool> = self.nodes.iter().map(Node::is_valid).collect();
        self.induced(&keep, &validity)
    }

    #[inline]
    pub(crate) fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    #[inline]
    pub(crate) fn word_at(&self, idx: usize) -> &Word {
        &self.nodes[idx].word
    }

    #[inline]
    pub(crate) fn neighbor_indices(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    pub(crate) fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }
}

impl<M: Mode> Clone for Graph<M> {
    fn clone(&self) -> Self {
        Self {
            word_length: self.word_length,
            nodes: self.nodes.clone(),
            index: self.index.clone(),
            adjacency: self.adjacency.clone(),
            mode: PhantomData,
        }
    }
}

impl<M: Mode> PartialEq for Graph<M> {
    fn eq(&self, other: &Self) -> bool {
        self.word_length == other.word_length
            && self.nodes == other.nodes
            && self.adjacency == other.adjacency
    }
}

impl<M: Mode> Eq for Graph<M> {}

impl<M: Mode> fmt::Debug for Graph<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("mode", &M::KIND)
            .field("word_length", &self.word_length)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edge_count())
            .finish()
    }
}

/// Either kind of graph, for callers that pick the mode at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGraph {
    Candidate(CandidateGraph),
    Valid(ValidGraph),
}

impl AnyGraph {
    #[must_use]
    pub const fn mode(&self) -> GraphMode {
        match self {
            Self::Candidate(_) => GraphMode::Candidate,
            Self::Valid(_) => GraphMode::Valid,
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        match self {
            Self::Candidate(g) => g.word_length(),
            Self::Valid(g) => g.word_length(),
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Candidate(g) => g.node_count(),
            Self::Valid(g) => g.node_count(),
        }
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Candidate(g) => g.edge_count(),
            Self::Valid(g) => g.edge_count(),
        }
    }
}

impl From<CandidateGraph> for AnyGraph {
    fn from(graph: CandidateGraph) -> Self {
        Self::Candidate(graph)
    }
}

impl From<ValidGraph> for AnyGraph {
    fn from(graph: ValidGraph) -> Self {
        Self::Valid(graph)
    }
}

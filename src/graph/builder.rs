//! Ladder graph construction
//!
//! Enumerates every one-letter substitution of every corpus word (`L * 25`
//! candidates per word) and connects each word to its candidates. Membership
//! checks go through the corpus hash set, so construction is O(N * L * A).
//!
//! An empty corpus yields an empty graph rather than an error, so builds
//! compose without special cases. Callers that need a non-trivial graph check
//! [`Corpus::is_empty`] themselves.

use super::{AnyGraph, CandidateGraph, Graph, GraphMode, Mode, Node, ValidGraph};
use crate::core::Word;
use crate::corpus::Corpus;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{info, instrument, warn};

/// Builds candidate or validity-restricted graphs from a corpus
///
/// With `parallel(true)` the corpus is split across rayon workers; each emits
/// its local edge list and the lists are merged by sort + dedup, so the result
/// is identical to a sequential build.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder<'a> {
    corpus: &'a Corpus,
    parallel: bool,
}

impl<'a> GraphBuilder<'a> {
    #[must_use]
    pub const fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            parallel: false,
        }
    }

    /// Enable or disable parallel edge enumeration
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build a graph of the requested runtime mode
    #[must_use]
    pub fn build(&self, mode: GraphMode) -> AnyGraph {
        match mode {
            GraphMode::Candidate => AnyGraph::Candidate(self.candidate()),
            GraphMode::Valid => AnyGraph::Valid(self.valid()),
        }
    }

    /// Build the candidate graph: every word and every one-letter variant
    ///
    /// Variants outside the corpus are added as nodes with `is_valid = false`.
    #[instrument(skip(self), fields(words = self.corpus.len(), word_length = self.corpus.word_length(), parallel = self.parallel))]
    #[must_use]
    pub fn candidate(&self) -> CandidateGraph {
        warn_if_empty(self.corpus);

        let pairs = self.collect_pairs(|word| {
            word.substitutions()
                .map(|variant| ordered_pair(word, variant))
                .collect()
        });

        let mut words: Vec<Word> = pairs
            .iter()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .chain(self.corpus.words().iter().cloned())
            .collect();
        words.sort_unstable();
        words.dedup();

        let graph = self.connect(words, &pairs);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built candidate graph"
        );
        graph
    }

    /// Build the validity-restricted graph: corpus words only
    ///
    /// An edge is added only when the substituted word is itself a corpus
    /// member. Corpus words with no valid neighbor stay as isolated nodes.
    #[instrument(skip(self), fields(words = self.corpus.len(), word_length = self.corpus.word_length(), parallel = self.parallel))]
    #[must_use]
    pub fn valid(&self) -> ValidGraph {
        warn_if_empty(self.corpus);

        let corpus = self.corpus;
        // Each unordered pair is emitted once, from its smaller word.
        let pairs = self.collect_pairs(|word| {
            word.substitutions()
                .filter(|variant| word < variant && corpus.contains(variant))
                .map(|variant| (word.clone(), variant))
                .collect()
        });

        let graph = self.connect(corpus.words().to_vec(), &pairs);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built validity-restricted graph"
        );
        graph
    }

    /// Run `pairs_for` over every corpus word and merge into a sorted, deduplicated edge list
    fn collect_pairs<F>(&self, pairs_for: F) -> Vec<(Word, Word)>
    where
        F: Fn(&Word) -> Vec<(Word, Word)> + Sync,
    {
        let words = self.corpus.words();
        let mut pairs: Vec<(Word, Word)> = if self.parallel {
            let mut pairs: Vec<(Word, Word)> =
                words.par_iter().flat_map_iter(&pairs_for).collect();
            pairs.par_sort_unstable();
            pairs
        } else {
            let mut pairs: Vec<(Word, Word)> = words.iter().flat_map(&pairs_for).collect();
            pairs.sort_unstable();
            pairs
        };
        pairs.dedup();
        pairs
    }

    /// Turn a sorted word list and word-pair edges into a graph
    fn connect<M: Mode>(&self, words: Vec<Word>, pairs: &[(Word, Word)]) -> Graph<M> {
        let index: FxHashMap<&Word, usize> =
            words.iter().enumerate().map(|(i, w)| (w, i)).collect();

        let edges: Vec<(usize, usize)> = pairs
            .iter()
            .filter_map(|(a, b)| Some((*index.get(a)?, *index.get(b)?)))
            .collect();

        let nodes: Vec<Node> = words
            .iter()
            .map(|word| Node::new(word.clone(), self.corpus.contains(word)))
            .collect();

        Graph::assemble(self.corpus.word_length(), nodes, edges)
    }
}

/// Build the candidate graph for `corpus`
#[must_use]
pub fn build_candidate(corpus: &Corpus) -> CandidateGraph {
    GraphBuilder::new(corpus).candidate()
}

/// Build the validity-restricted graph for `corpus`
#[must_use]
pub fn build_valid(corpus: &Corpus) -> ValidGraph {
    GraphBuilder::new(corpus).valid()
}

/// Build a graph of either mode for `corpus`
#[must_use]
pub fn build(corpus: &Corpus, mode: GraphMode) -> AnyGraph {
    GraphBuilder::new(corpus).build(mode)
}

fn ordered_pair(word: &Word, other: Word) -> (Word, Word) {
    if *word < other {
        (word.clone(), other)
    } else {
        (other, word.clone())
    }
}

fn warn_if_empty(corpus: &Corpus) {
    if corpus.is_empty() {
        warn!(
            word_length = corpus.word_length(),
            "corpus is empty, graph will be empty"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn scenario_corpus() -> Corpus {
        Corpus::load(["cat", "cot", "cog", "dog", "dot"], 3).unwrap()
    }

    fn edge_set<M: Mode>(graph: &Graph<M>) -> Vec<(String, String)> {
        graph
            .edges()
            .map(|(a, b)| (a.text().to_string(), b.text().to_string()))
            .collect()
    }

    #[test]
    fn valid_graph_scenario_edges() {
        let graph = build_valid(&scenario_corpus());
        let edges = edge_set(&graph);

        assert_eq!(
            edges,
            vec![
                ("cat".to_string(), "cot".to_string()),
                ("cog".to_string(), "cot".to_string()),
                ("cog".to_string(), "dog".to_string()),
                ("cot".to_string(), "dot".to_string()),
                ("dog".to_string(), "dot".to_string()),
            ]
        );
        assert_eq!(graph.node_count(), 5);
        assert!(graph.nodes().iter().all(Node::is_valid));
    }

    #[test]
    fn valid_graph_keeps_isolated_corpus_words() {
        let corpus = Corpus::load(["aal", "zzz"], 3).unwrap();
        let graph = build_valid(&corpus);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn candidate_graph_counts() {
        // Single word: 3 positions * 25 letters of variants, one edge each
        let corpus = Corpus::load(["cat"], 3).unwrap();
        let graph = build_candidate(&corpus);
        assert_eq!(graph.node_count(), 1 + 75);
        assert_eq!(graph.edge_count(), 75);
        assert_eq!(graph.is_valid(&word("cat")), Some(true));
        assert_eq!(graph.is_valid(&word("cot")), Some(false));
    }

    #[test]
    fn candidate_graph_deduplicates_shared_edges() {
        // aal and aam generate each other: the pair must appear once
        let corpus = Corpus::load(["aal", "aam"], 3).unwrap();
        let graph = build_candidate(&corpus);
        let pair_count = graph
            .edges()
            .filter(|(a, b)| a.text() == "aal" && b.text() == "aam")
            .count();
        assert_eq!(pair_count, 1);
        assert_eq!(graph.edge_count(), 75 + 75 - 1);
    }

    #[test]
    fn candidate_edges_differ_in_one_position() {
        let graph = build_candidate(&scenario_corpus());
        assert!(graph.edges().all(|(a, b)| a.is_adjacent(b)));
    }

    #[test]
    fn candidate_graph_does_not_connect_variants_to_each_other() {
        // "bat" and "bot" are both variants but neither is a corpus word
        let corpus = Corpus::load(["cat", "cot"], 3).unwrap();
        let graph = build_candidate(&corpus);
        let bat: Vec<&Word> = graph.neighbors(&word("bat")).unwrap().collect();
        assert_eq!(bat, vec![&word("cat")]);
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let corpus = scenario_corpus();
        let sequential = GraphBuilder::new(&corpus).candidate();
        let parallel = GraphBuilder::new(&corpus).parallel(true).candidate();
        assert_eq!(sequential, parallel);

        let sequential = GraphBuilder::new(&corpus).valid();
        let parallel = GraphBuilder::new(&corpus).parallel(true).valid();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn rebuild_is_identical() {
        let corpus = scenario_corpus();
        assert_eq!(build_valid(&corpus), build_valid(&corpus));
        assert_eq!(build_candidate(&corpus), build_candidate(&corpus));
    }

    #[test]
    fn empty_corpus_builds_empty_graph() {
        let corpus = Corpus::load(Vec::<String>::new(), 4).unwrap();
        let graph = build_candidate(&corpus);
        assert!(graph.is_empty());
        assert_eq!(graph.word_length(), 4);
        assert!(build_valid(&corpus).is_empty());
    }

    #[test]
    fn build_dispatches_on_mode() {
        let corpus = scenario_corpus();
        assert_eq!(build(&corpus, GraphMode::Candidate).mode(), GraphMode::Candidate);
        assert_eq!(build(&corpus, GraphMode::Valid).mode(), GraphMode::Valid);
    }
}

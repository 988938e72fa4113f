//! Validity annotation
//!
//! Derives a validity-restricted graph from a candidate graph. The input graph
//! is untouched; the result is a separate [`ValidGraph`].

use super::{CandidateGraph, Node, ValidGraph};
use crate::corpus::Corpus;
use tracing::{info, instrument, warn};

/// Label every node by corpus membership, then drop invalid structure
///
/// 1. `is_valid` is set from `corpus` membership.
/// 2. Edges with an invalid endpoint are removed.
/// 3. Nodes left without edges are pruned unless they are valid; isolated
///    valid words stay since they are real words with no valid neighbor.
///
/// Corpus words that never appeared in the candidate graph are not added. A
/// corpus of a different word length matches nothing and yields an empty graph.
#[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count(), corpus = corpus.len()))]
#[must_use]
pub fn annotate(graph: &CandidateGraph, corpus: &Corpus) -> ValidGraph {
    if corpus.word_length() != graph.word_length() {
        warn!(
            graph_length = graph.word_length(),
            corpus_length = corpus.word_length(),
            "corpus word length differs from graph, no node will be valid"
        );
    }

    let validity: Vec<bool> = graph
        .nodes()
        .iter()
        .map(|node| corpus.contains(node.word()))
        .collect();

    // Every invalid node loses all of its edges in step 2, so after filtering
    // the surviving nodes are exactly the valid ones, and the induced subgraph
    // on them holds exactly the edges with two valid endpoints.
    let restricted: ValidGraph = graph.induced(&validity, &validity);
    debug_assert!(restricted.nodes().iter().all(Node::is_valid));

    info!(
        nodes = restricted.node_count(),
        edges = restricted.edge_count(),
        pruned = graph.node_count() - restricted.node_count(),
        "annotated graph"
    );
    restricted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::graph::{build_candidate, build_valid};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn annotate_matches_direct_valid_build() {
        let corpus = Corpus::load(["cat", "cot", "cog", "dog", "dot"], 3).unwrap();
        let candidate = build_candidate(&corpus);
        assert_eq!(annotate(&candidate, &corpus), build_valid(&corpus));
    }

    #[test]
    fn annotate_keeps_isolated_valid_words() {
        let corpus = Corpus::load(["aal", "zzz"], 3).unwrap();
        let restricted = annotate(&build_candidate(&corpus), &corpus);
        assert_eq!(restricted.node_count(), 2);
        assert_eq!(restricted.edge_count(), 0);
        assert!(restricted.contains(&word("aal")));
        assert!(restricted.contains(&word("zzz")));
    }

    #[test]
    fn annotate_with_stricter_dictionary() {
        let broad = Corpus::load(["cat", "cot", "dot"], 3).unwrap();
        let strict = Corpus::load(["cat", "dot"], 3).unwrap();
        let restricted = annotate(&build_candidate(&broad), &strict);

        assert_eq!(restricted.node_count(), 2);
        assert_eq!(restricted.edge_count(), 0);
        assert!(!restricted.contains(&word("cot")));
    }

    #[test]
    fn annotate_ignores_words_missing_from_candidate_graph() {
        let corpus = Corpus::load(["cat"], 3).unwrap();
        let wider = Corpus::load(["cat", "zzz"], 3).unwrap();
        let restricted = annotate(&build_candidate(&corpus), &wider);
        assert_eq!(restricted.node_count(), 1);
        assert!(!restricted.contains(&word("zzz")));
    }

    #[test]
    fn annotate_does_not_mutate_input() {
        let corpus = Corpus::load(["cat", "cot"], 3).unwrap();
        let candidate = build_candidate(&corpus);
        let before = candidate.clone();
        let _ = annotate(&candidate, &corpus);
        assert_eq!(candidate, before);
    }

    #[test]
    fn annotate_with_other_length_corpus_is_empty() {
        let corpus = Corpus::load(["cat"], 3).unwrap();
        let four = Corpus::load(["cats"], 4).unwrap();
        assert!(annotate(&build_candidate(&corpus), &four).is_empty());
    }
}

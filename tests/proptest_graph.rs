use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeSet;
use word_ladder::graph::{
    CandidateGraph, GraphBuilder, Mode, ValidGraph, annotate, build_candidate, build_valid,
};
use word_ladder::search::{AllPathsResult, all_shortest_paths, shortest_path};

use generators::*;

fn edge_set<M: Mode>(graph: &word_ladder::graph::Graph<M>) -> BTreeSet<(String, String)> {
    graph
        .edges()
        .map(|(a, b)| (a.text().to_string(), b.text().to_string()))
        .collect()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(128))]

    // Neighbor relation
    #[test]
    fn neighbors_differ_in_one_position(corpus in arb_corpus()) {
        let candidate = build_candidate(&corpus);
        for node in candidate.nodes() {
            for neighbor in candidate.neighbors(node.word()).unwrap() {
                prop_assert_eq!(node.word().hamming_distance(neighbor), Some(1));
            }
        }
        let valid = build_valid(&corpus);
        for (a, b) in valid.edges() {
            prop_assert!(a.is_adjacent(b));
            prop_assert!(a < b);
        }
    }

    // Validity flags
    #[test]
    fn validity_matches_corpus(corpus in arb_corpus()) {
        let candidate = build_candidate(&corpus);
        for node in candidate.nodes() {
            prop_assert_eq!(node.is_valid(), corpus.contains(node.word()));
        }
        for word in corpus.words() {
            prop_assert_eq!(candidate.is_valid(word), Some(true));
        }

        let valid = build_valid(&corpus);
        prop_assert_eq!(valid.node_count(), corpus.len());
        prop_assert!(valid.nodes().iter().all(|node| node.is_valid()));
    }

    #[test]
    fn candidate_edges_touch_the_corpus(corpus in arb_corpus()) {
        let candidate: CandidateGraph = build_candidate(&corpus);
        for (a, b) in candidate.edges() {
            prop_assert!(corpus.contains(a) || corpus.contains(b));
        }
        for word in corpus.words() {
            prop_assert_eq!(candidate.degree(word), Some(word.len() * 25));
        }
    }

    #[test]
    fn valid_graph_is_induced_by_candidate(corpus in arb_corpus()) {
        let candidate = edge_set(&build_candidate(&corpus));
        let valid = edge_set(&build_valid(&corpus));
        prop_assert!(valid.is_subset(&candidate));

        let expected: BTreeSet<(String, String)> = candidate
            .into_iter()
            .filter(|(a, b)| corpus.contains_str(a) && corpus.contains_str(b))
            .collect();
        prop_assert_eq!(valid, expected);
    }

    // Construction is deterministic
    #[test]
    fn rebuild_is_identical(corpus in arb_corpus()) {
        prop_assert_eq!(build_valid(&corpus), build_valid(&corpus));
        prop_assert_eq!(build_candidate(&corpus), build_candidate(&corpus));
    }

    #[test]
    fn parallel_matches_sequential(corpus in arb_corpus()) {
        let builder = GraphBuilder::new(&corpus);
        let parallel = GraphBuilder::new(&corpus).parallel(true);
        prop_assert_eq!(builder.candidate(), parallel.candidate());
        prop_assert_eq!(builder.valid(), parallel.valid());
    }

    #[test]
    fn annotate_equals_direct_build(corpus in arb_corpus()) {
        let annotated: ValidGraph = annotate(&build_candidate(&corpus), &corpus);
        prop_assert_eq!(annotated, build_valid(&corpus));
    }

    // Persistence
    #[test]
    fn json_round_trip(corpus in arb_corpus()) {
        let valid = build_valid(&corpus);
        prop_assert_eq!(ValidGraph::from_json(&valid.to_json().unwrap()).unwrap(), valid);

        let candidate = build_candidate(&corpus);
        prop_assert_eq!(
            CandidateGraph::from_json(&candidate.to_json().unwrap()).unwrap(),
            candidate
        );
    }

    // Search
    #[test]
    fn shortest_path_is_a_ladder(corpus in arb_nonempty_corpus(), s in any::<Index>(), t in any::<Index>()) {
        let graph = build_valid(&corpus);
        let source = s.get(corpus.words());
        let target = t.get(corpus.words());

        let result = shortest_path(&graph, source, target).unwrap();
        let reverse = shortest_path(&graph, target, source).unwrap();
        prop_assert_eq!(result.distance(), reverse.distance());

        if let Some(path) = result.words() {
            prop_assert_eq!(path.first(), Some(source));
            prop_assert_eq!(path.last(), Some(target));
            prop_assert_eq!(result.distance(), Some(path.len() - 1));
            for step in path.windows(2) {
                prop_assert!(graph.neighbors(&step[0]).unwrap().any(|w| *w == step[1]));
            }
        }
    }

    #[test]
    fn candidate_ladders_are_never_longer(corpus in arb_nonempty_corpus(), s in any::<Index>(), t in any::<Index>()) {
        let source = s.get(corpus.words());
        let target = t.get(corpus.words());

        let valid = shortest_path(&build_valid(&corpus), source, target).unwrap();
        let candidate = shortest_path(&build_candidate(&corpus), source, target).unwrap();
        if let Some(distance) = valid.distance() {
            prop_assert!(candidate.distance().is_some_and(|d| d <= distance));
        }
    }

    #[test]
    fn all_shortest_paths_agree_with_bfs(corpus in arb_nonempty_corpus(), s in any::<Index>(), t in any::<Index>()) {
        let graph = build_valid(&corpus);
        let source = s.get(corpus.words());
        let target = t.get(corpus.words());

        let single = shortest_path(&graph, source, target).unwrap();
        let all = all_shortest_paths(&graph, source, target, None).unwrap();
        prop_assert_eq!(single.distance(), all.distance());

        if let AllPathsResult::Found { distance, paths, truncated } = all {
            prop_assert!(!truncated);
            prop_assert!(paths.windows(2).all(|pair| pair[0] < pair[1]));
            for path in &paths {
                prop_assert_eq!(path.len(), distance + 1);
                prop_assert!(path.windows(2).all(|step| step[0].is_adjacent(&step[1])));
            }
            let found = single.words().map(<[_]>::to_vec).unwrap_or_default();
            prop_assert!(paths.contains(&found));
        }
    }
}

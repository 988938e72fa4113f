//! Betweenness centrality (Brandes)
//!
//! Scores are normalized by `(n-1)(n-2)`: each unordered pair is counted from
//! both ends, which matches normalizing over ordered pairs.

use crate::core::Word;
use crate::graph::{Graph, Mode};
use rayon::prelude::*;
use std::collections::VecDeque;
use tracing::instrument;

/// Sources per rayon task. Fixed so the floating-point summation order, and
/// therefore the scores, do not depend on the thread count.
const SOURCE_CHUNK: usize = 64;

/// The `top` most central words, highest score first, ties broken lexicographically
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
#[must_use]
pub fn betweenness_centrality<M: Mode>(graph: &Graph<M>, top: usize) -> Vec<(Word, f64)> {
    let n = graph.node_count();
    let sources: Vec<usize> = (0..n).collect();

    // One batch holds a chunk per worker, so at most that many partial score
    // vectors are alive at once. Partials are added in chunk order.
    let batch = SOURCE_CHUNK * rayon::current_num_threads().max(1);
    let mut scores = vec![0.0; n];
    for sources in sources.chunks(batch) {
        let partials: Vec<Vec<f64>> = sources
            .par_chunks(SOURCE_CHUNK)
            .map(|chunk| {
                let mut scores = vec![0.0; n];
                for &source in chunk {
                    accumulate(graph, source, &mut scores);
                }
                scores
            })
            .collect();

        for partial in partials {
            for (total, value) in scores.iter_mut().zip(partial) {
                *total += value;
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for score in &mut scores {
            *score *= scale;
        }
    }

    let mut ranked: Vec<(Word, f64)> = scores
        .into_iter()
        .enumerate()
        .map(|(i, score)| (graph.word_at(i).clone(), score))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top);
    ranked
}

/// Add the pair dependencies of one BFS source into `scores`
fn accumulate<M: Mode>(graph: &Graph<M>, source: usize, scores: &mut [f64]) {
    let n = graph.node_count();
    let mut order = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0_f64; n];
    let mut distance: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    sigma[source] = 1.0;
    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let Some(dv) = distance[v] else { continue };
        for &w in graph.neighbor_indices(v) {
            if distance[w].is_none() {
                distance[w] = Some(dv + 1);
                queue.push_back(w);
            }
            if distance[w] == Some(dv + 1) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0_f64; n];
    while let Some(w) = order.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != source {
            scores[w] += delta[w];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::graph::build_valid;

    #[test]
    fn path_graph_center_is_most_central() {
        // aaa - aab - abb: a path of three, the middle carries the only pair
        let graph = build_valid(&Corpus::load(["aaa", "aab", "abb"], 3).unwrap());
        let ranked = betweenness_centrality(&graph, 3);

        assert_eq!(ranked[0].0.text(), "aab");
        assert!((ranked[0].1 - 1.0).abs() < 1e-12);
        assert!(ranked[1].1.abs() < 1e-12);
        assert!(ranked[2].1.abs() < 1e-12);
    }

    #[test]
    fn scenario_scores() {
        // cat-cot, cot-cog, cot-dot, cog-dog, dot-dog
        let graph = build_valid(&Corpus::load(["cat", "cot", "cog", "dog", "dot"], 3).unwrap());
        let ranked = betweenness_centrality(&graph, 5);
        let score = |w: &str| {
            ranked
                .iter()
                .find(|(word, _)| word.text() == w)
                .map(|(_, s)| *s)
                .unwrap()
        };

        // cot lies on every shortest path from cat (3 pairs) plus half of cog-dot
        assert!((score("cot") - 7.0 / 12.0).abs() < 1e-12);
        // cog carries half of cat-dog and half of cot-dog
        assert!((score("cog") - 1.0 / 6.0).abs() < 1e-12);
        assert!(score("cat").abs() < 1e-12);
        assert_eq!(ranked[0].0.text(), "cot");
    }

    #[test]
    fn top_truncates() {
        let graph = build_valid(&Corpus::load(["cat", "cot", "cog", "dog", "dot"], 3).unwrap());
        assert_eq!(betweenness_centrality(&graph, 2).len(), 2);
    }

    #[test]
    fn scores_do_not_depend_on_thread_count() {
        // 76-node star: more than one source chunk
        let graph = crate::graph::build_candidate(&Corpus::load(["cat"], 3).unwrap());
        let run = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| betweenness_centrality(&graph, graph.node_count()))
        };

        let single = run(1);
        assert_eq!(single, run(3));
        assert_eq!(single[0].0.text(), "cat");
        assert!((single[0].1 - 1.0).abs() < 1e-12);
        assert!(single[1].1.abs() < 1e-12);
    }
}

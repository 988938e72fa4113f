//! Diameter of the largest connected component

use super::component_indices;
use crate::core::Word;
use crate::graph::{Graph, Mode};
use crate::search::{distances_from, ladder_between};
use rayon::prelude::*;
use tracing::instrument;

/// The longest shortest ladder in a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diameter {
    /// Steps in the longest shortest ladder
    pub length: usize,
    /// One ladder of exactly `length` steps between two peripheral words
    pub path: Vec<Word>,
    /// Words whose eccentricity equals the diameter
    pub periphery: Vec<Word>,
}

/// Compute the diameter of the largest connected component
///
/// Isolated words never contribute, and smaller components are ignored, so
/// the result is defined for disconnected graphs. Returns `None` when the
/// graph has no edges. One BFS runs per node of the component, fanned out
/// over rayon.
#[instrument(skip_all, fields(nodes = graph.node_count()))]
#[must_use]
pub fn diameter<M: Mode>(graph: &Graph<M>) -> Option<Diameter> {
    let component = component_indices(graph).into_iter().next()?;
    if component.len() < 2 {
        return None;
    }

    // (eccentricity, farthest node) per source; farthest ties go to the lowest index
    let eccentricities: Vec<(usize, usize, usize)> = component
        .par_iter()
        .map(|&source| {
            let distances = distances_from(graph, source);
            let (far, ecc) = component
                .iter()
                .filter_map(|&i| distances[i].map(|d| (i, d)))
                .fold((source, 0), |best, (i, d)| if d > best.1 { (i, d) } else { best });
            (source, ecc, far)
        })
        .collect();

    let length = eccentricities.iter().map(|&(_, ecc, _)| ecc).max()?;
    let &(source, _, far) = eccentricities.iter().find(|&&(_, ecc, _)| ecc == length)?;

    let path = ladder_between(graph, source, far)?;

    let periphery = eccentricities
        .iter()
        .filter(|&&(_, ecc, _)| ecc == length)
        .map(|&(i, _, _)| graph.word_at(i).clone())
        .collect();

    Some(Diameter {
        length,
        path,
        periphery,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::graph::{build_candidate, build_valid};

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn scenario_diameter() {
        let graph = build_valid(&Corpus::load(["cat", "cot", "cog", "dog", "dot"], 3).unwrap());
        let result = diameter(&graph).unwrap();

        assert_eq!(result.length, 3);
        assert_eq!(texts(&result.path), vec!["cat", "cot", "cog", "dog"]);
        assert_eq!(texts(&result.periphery), vec!["cat", "dog"]);
    }

    #[test]
    fn path_length_matches_diameter() {
        let graph = build_valid(
            &Corpus::load(["aaa", "aab", "abb", "bbb", "bbc", "zzz", "zzy"], 3).unwrap(),
        );
        let result = diameter(&graph).unwrap();
        assert_eq!(result.length, 4);
        assert_eq!(result.path.len(), 5);
        assert!(result.path.windows(2).all(|p| p[0].is_adjacent(&p[1])));
    }

    #[test]
    fn no_edges_means_no_diameter() {
        let graph = build_valid(&Corpus::load(["aal", "zzz"], 3).unwrap());
        assert_eq!(diameter(&graph), None);
        let empty = build_valid(&Corpus::load(Vec::<&str>::new(), 3).unwrap());
        assert_eq!(diameter(&empty), None);
    }

    #[test]
    fn candidate_diameter_runs_between_non_words() {
        // A star: "cat" in the middle, its 75 variants around it
        let graph = build_candidate(&Corpus::load(["cat"], 3).unwrap());
        let result = diameter(&graph).unwrap();

        assert_eq!(result.length, 2);
        assert_eq!(texts(&result.path), vec!["aat", "cat", "bat"]);
        assert_eq!(result.periphery.len(), 75);
    }
}

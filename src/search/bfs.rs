//! Breadth-first shortest ladders
//!
//! Every edge costs one step, so the first time BFS dequeues the target it has
//! found a shortest ladder. Neighbors are expanded in lexicographic order,
//! which makes the single returned ladder deterministic.

use crate::core::{LadderError, Result, Word};
use crate::graph::{Graph, Mode};
use std::collections::VecDeque;

/// Outcome of a single shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// A shortest ladder from source to target, both inclusive
    Found(Vec<Word>),
    /// Target lies in a different connected component
    Unreachable,
}

impl PathResult {
    /// Number of steps in the ladder, or `None` when unreachable
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        match self {
            Self::Found(words) => Some(words.len() - 1),
            Self::Unreachable => None,
        }
    }

    #[must_use]
    pub fn words(&self) -> Option<&[Word]> {
        match self {
            Self::Found(words) => Some(words),
            Self::Unreachable => None,
        }
    }

    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Outcome of an all-shortest-paths query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllPathsResult {
    Found {
        distance: usize,
        /// Ladders in lexicographic order
        paths: Vec<Vec<Word>>,
        /// True when enumeration stopped at the caller's limit
        truncated: bool,
    },
    Unreachable,
}

impl AllPathsResult {
    #[must_use]
    pub const fn distance(&self) -> Option<usize> {
        match self {
            Self::Found { distance, .. } => Some(*distance),
            Self::Unreachable => None,
        }
    }

    #[must_use]
    pub fn paths(&self) -> &[Vec<Word>] {
        match self {
            Self::Found { paths, .. } => paths,
            Self::Unreachable => &[],
        }
    }
}

/// Find one shortest ladder from `source` to `target`
///
/// # Errors
/// - `LengthMismatch` if either word's length differs from the graph's.
/// - `UnknownWord` if either word is not a node of the graph, or is a
///   non-word node of a candidate graph.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::corpus::Corpus;
/// use word_ladder::graph::build_valid;
/// use word_ladder::search::{PathResult, shortest_path};
///
/// let corpus = Corpus::load(["aal", "aam"], 3).unwrap();
/// let graph = build_valid(&corpus);
/// let aal = Word::new("aal").unwrap();
/// let aam = Word::new("aam").unwrap();
///
/// let result = shortest_path(&graph, &aal, &aam).unwrap();
/// assert_eq!(result, PathResult::Found(vec![aal, aam]));
/// ```
pub fn shortest_path<M: Mode>(
    graph: &Graph<M>,
    source: &Word,
    target: &Word,
) -> Result<PathResult> {
    let source = resolve(graph, source)?;
    let target = resolve(graph, target)?;

    Ok(ladder_between(graph, source, target).map_or(PathResult::Unreachable, PathResult::Found))
}

/// BFS ladder between two node indices, `None` when unreachable
///
/// Works on any node, valid or not; endpoint checks happen in `resolve`.
pub(crate) fn ladder_between<M: Mode>(
    graph: &Graph<M>,
    source: usize,
    target: usize,
) -> Option<Vec<Word>> {
    let mut parent: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return Some(reconstruct(graph, &parent, target));
        }
        for &next in graph.neighbor_indices(current) {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Enumerate every shortest ladder from `source` to `target`
///
/// The number of equal-length ladders can grow combinatorially, so `limit`
/// caps how many are returned; `None` means no cap. When the cap is hit the
/// result is marked `truncated`.
///
/// # Errors
/// - `InvalidInput` if `limit` is `Some(0)`.
/// - `LengthMismatch` / `UnknownWord` as for [`shortest_path`].
pub fn all_shortest_paths<M: Mode>(
    graph: &Graph<M>,
    source: &Word,
    target: &Word,
    limit: Option<usize>,
) -> Result<AllPathsResult> {
    if limit == Some(0) {
        return Err(LadderError::InvalidInput(
            "path limit must be at least 1".to_string(),
        ));
    }
    let source = resolve(graph, source)?;
    let target = resolve(graph, target)?;

    let n = graph.node_count();
    let mut distance = vec![usize::MAX; n];
    let mut parents: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut queue = VecDeque::new();

    distance[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        // All parents of the target sit one level above it, so once the
        // target's level is reached nothing further can be a parent.
        if distance[target] != usize::MAX && distance[current] >= distance[target] {
            break;
        }
        let next_level = distance[current] + 1;
        for &next in graph.neighbor_indices(current) {
            if distance[next] == usize::MAX {
                distance[next] = next_level;
                parents[next].push(current);
                queue.push_back(next);
            } else if distance[next] == next_level {
                parents[next].push(current);
            }
        }
    }

    if distance[target] == usize::MAX {
        return Ok(AllPathsResult::Unreachable);
    }

    let mut paths = Vec::new();
    let mut trail = vec![target];
    let truncated = collect_paths(
        graph,
        &parents,
        source,
        &mut trail,
        &mut paths,
        limit.unwrap_or(usize::MAX),
    );
    paths.sort();

    Ok(AllPathsResult::Found {
        distance: distance[target],
        paths,
        truncated,
    })
}

/// BFS hop counts from `source` to every node; `None` for unreachable nodes
pub(crate) fn distances_from<M: Mode>(graph: &Graph<M>, source: usize) -> Vec<Option<usize>> {
    let mut distance: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_level = distance[current].map_or(0, |d| d + 1);
        for &next in graph.neighbor_indices(current) {
            if distance[next].is_none() {
                distance[next] = Some(next_level);
                queue.push_back(next);
            }
        }
    }

    distance
}

/// Map a query word to its node index
///
/// Length is checked before membership. Only dictionary words can be ladder
/// endpoints, so a non-word node of a candidate graph is reported as unknown.
fn resolve<M: Mode>(graph: &Graph<M>, word: &Word) -> Result<usize> {
    if word.len() != graph.word_length() {
        return Err(LadderError::LengthMismatch {
            word: word.text().to_string(),
            expected: graph.word_length(),
            actual: word.len(),
        });
    }
    graph
        .index_of(word)
        .filter(|&idx| graph.nodes()[idx].is_valid())
        .ok_or_else(|| LadderError::UnknownWord(word.text().to_string()))
}

fn reconstruct<M: Mode>(graph: &Graph<M>, parent: &[Option<usize>], target: usize) -> Vec<Word> {
    let mut path = vec![graph.word_at(target).clone()];
    let mut current = target;
    while let Some(previous) = parent[current] {
        path.push(graph.word_at(previous).clone());
        current = previous;
    }
    path.reverse();
    path
}

/// Walk parent links from the end of `trail` back to `source`
///
/// Returns true if enumeration stopped because `limit` paths were collected.
fn collect_paths<M: Mode>(
    graph: &Graph<M>,
    parents: &[Vec<usize>],
    source: usize,
    trail: &mut Vec<usize>,
    paths: &mut Vec<Vec<Word>>,
    limit: usize,
) -> bool {
    let Some(&current) = trail.last() else {
        return false;
    };

    if current == source {
        if paths.len() == limit {
            return true;
        }
        paths.push(
            trail
                .iter()
                .rev()
                .map(|&idx| graph.word_at(idx).clone())
                .collect(),
        );
        return false;
    }

    for &previous in &parents[current] {
        trail.push(previous);
        let stopped = collect_paths(graph, parents, source, trail, paths, limit);
        trail.pop();
        if stopped {
            return true;
        }
    }
    false
}

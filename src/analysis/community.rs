//! Community detection (Louvain)
//!
//! Greedy modularity optimization: nodes move to the neighboring community
//! with the best modularity gain until nothing moves, then each community is
//! collapsed into a single weighted node and the process repeats on the
//! smaller graph. Visiting order is shuffled with a seeded RNG, so one seed
//! always yields the same partition.

use crate::core::Word;
use crate::graph::{Graph, Mode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

const MIN_GAIN: f64 = 1e-12;

/// Weighted graph for one aggregation level
struct Level {
    /// Neighbor lists as (node, weight), no self entries
    adjacency: Vec<Vec<(usize, f64)>>,
    /// Weight of edges folded inside each node
    internal: Vec<f64>,
}

impl Level {
    fn degree(&self, node: usize) -> f64 {
        self.adjacency[node].iter().map(|&(_, w)| w).sum::<f64>() + 2.0 * self.internal[node]
    }
}

/// Partition the graph into communities
///
/// Each community is a sorted word list; communities are ordered by size,
/// largest first, then by first word. Isolated words form singleton
/// communities.
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
#[must_use]
pub fn communities<M: Mode>(graph: &Graph<M>, seed: u64) -> Vec<Vec<Word>> {
    let n = graph.node_count();
    let mut membership: Vec<usize> = (0..n).collect();

    let mut level = Level {
        adjacency: (0..n)
            .map(|i| graph.neighbor_indices(i).iter().map(|&j| (j, 1.0)).collect())
            .collect(),
        internal: vec![0.0; n],
    };
    let total: f64 = (0..n).map(|i| level.degree(i)).sum();
    let mut rng = StdRng::seed_from_u64(seed);

    if total > 0.0 {
        let mut depth = 0;
        loop {
            let Some(assignment) = move_nodes(&level, total, &mut rng) else {
                break;
            };
            let (next, count) = aggregate(&level, &assignment);
            for community in &mut membership {
                *community = assignment[*community];
            }
            depth += 1;
            debug!(depth, communities = count, "louvain level");
            level = next;
        }
    }

    let mut groups: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
    for (i, &community) in membership.iter().enumerate() {
        groups
            .entry(community)
            .or_default()
            .push(graph.word_at(i).clone());
    }

    // Words are pushed in index order, which is already sorted
    let mut result: Vec<Vec<Word>> = groups.into_values().collect();
    result.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
    result
}

/// One local-moving phase; `None` if no node changed community
///
/// Returns community ids renumbered densely in order of first appearance.
fn move_nodes(level: &Level, total: f64, rng: &mut StdRng) -> Option<Vec<usize>> {
    let n = level.adjacency.len();
    let degrees: Vec<f64> = (0..n).map(|i| level.degree(i)).collect();
    let mut community: Vec<usize> = (0..n).collect();
    let mut community_total = degrees.clone();

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut changed = false;
    loop {
        let mut moved = false;
        for &node in &order {
            let current = community[node];
            let k = degrees[node];

            // Edge weight from `node` into each neighboring community, in first-seen order
            let mut links: Vec<(usize, f64)> = Vec::new();
            let mut slot: FxHashMap<usize, usize> = FxHashMap::default();
            for &(neighbor, weight) in &level.adjacency[node] {
                let c = community[neighbor];
                let idx = *slot.entry(c).or_insert_with(|| {
                    links.push((c, 0.0));
                    links.len() - 1
                });
                links[idx].1 += weight;
            }

            community_total[current] -= k;
            let gain = |c: usize, weight: f64| weight - community_total[c] * k / total;

            let own = links
                .iter()
                .find(|&&(c, _)| c == current)
                .map_or(0.0, |&(_, w)| w);
            let mut best = current;
            let mut best_gain = gain(current, own);
            for &(c, weight) in &links {
                let g = gain(c, weight);
                if g > best_gain + MIN_GAIN {
                    best = c;
                    best_gain = g;
                }
            }

            community_total[best] += k;
            if best != current {
                community[node] = best;
                moved = true;
            }
        }
        if !moved {
            break;
        }
        changed = true;
    }

    if !changed {
        return None;
    }

    let mut renumber: FxHashMap<usize, usize> = FxHashMap::default();
    Some(
        community
            .iter()
            .map(|c| {
                let next = renumber.len();
                *renumber.entry(*c).or_insert(next)
            })
            .collect(),
    )
}

/// Collapse each community into one node
fn aggregate(level: &Level, assignment: &[usize]) -> (Level, usize) {
    let count = assignment.iter().max().map_or(0, |&c| c + 1);
    let mut internal = vec![0.0; count];
    let mut links: Vec<FxHashMap<usize, f64>> = vec![FxHashMap::default(); count];

    for (node, neighbors) in level.adjacency.iter().enumerate() {
        let a = assignment[node];
        internal[a] += level.internal[node];
        for &(neighbor, weight) in neighbors {
            let b = assignment[neighbor];
            if a == b {
                // Each inner edge is seen from both ends
                internal[a] += weight / 2.0;
            } else {
                *links[a].entry(b).or_insert(0.0) += weight;
            }
        }
    }

    let adjacency = links
        .into_iter()
        .map(|map| {
            let mut neighbors: Vec<(usize, f64)> = map.into_iter().collect();
            neighbors.sort_unstable_by_key(|&(c, _)| c);
            neighbors
        })
        .collect();

    (Level { adjacency, internal }, count)
}

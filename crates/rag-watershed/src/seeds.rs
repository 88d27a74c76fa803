//! Seed sets and minimum-plateau seeding.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use rag_core::{validate_weights, Graph, NodeId};
use serde::{Deserialize, Serialize};

use crate::WatershedError;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Sparse mapping from node id to a positive seed label.
///
/// Iteration is by ascending node id. Entries are checked against a graph
/// only when flooding starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seeds {
    labels: BTreeMap<NodeId, u32>,
}

impl Seeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed label of `node`, returning the previous one.
    pub fn insert(&mut self, node: NodeId, label: u32) -> Option<u32> {
        self.labels.insert(node, label)
    }

    pub fn get(&self, node: NodeId) -> Option<u32> {
        self.labels.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.labels.iter().map(|(&n, &l)| (n, l))
    }

    /// Distinct seed labels, ascending.
    pub fn distinct_labels(&self) -> Vec<u32> {
        self.labels
            .values()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Fail with [`WatershedError::InvalidSeed`] on the first entry that is
    /// out of range for a graph of `node_count` nodes or uses label 0.
    pub fn validate(&self, node_count: usize) -> Result<(), WatershedError> {
        match self
            .iter()
            .find(|&(node, label)| node >= node_count || label == 0)
        {
            Some((node, label)) => Err(WatershedError::InvalidSeed {
                node,
                label,
                node_count,
            }),
            None => Ok(()),
        }
    }
}

impl FromIterator<(NodeId, u32)> for Seeds {
    fn from_iter<I: IntoIterator<Item = (NodeId, u32)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

/// One seed label per minimum plateau of `node_weights`.
///
/// A node is a local minimum when its weight is `<=` every neighbor's.
/// Each unvisited local minimum, in scan order `0..n`, starts a flood over
/// neighbors of exactly equal weight; the whole connected set it reaches is
/// one plateau. Members of a plateau may still drain into lower ground
/// elsewhere (a shoulder). Labels `1, 2, ...` are handed out in increasing
/// order of each plateau's lowest member id.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(nodes = graph.node_count()))
)]
pub fn node_weighted_seeds<G: Graph>(graph: &G, node_weights: &[f32]) -> Result<Seeds, WatershedError> {
    let n = graph.node_count();
    validate_weights("node weights", node_weights, n)?;

    let has_lower: Vec<bool> = (0..n)
        .map(|node| {
            graph
                .neighbors(node)
                .any(|adj| node_weights[adj.node] < node_weights[node])
        })
        .collect();

    let mut visited = vec![false; n];
    let mut plateaus: Vec<(NodeId, Vec<NodeId>)> = Vec::new();
    let mut stack = Vec::new();

    for start in 0..n {
        if visited[start] || has_lower[start] {
            continue;
        }
        let level = node_weights[start];
        let mut plateau = Vec::new();
        visited[start] = true;
        stack.push(start);
        while let Some(node) = stack.pop() {
            plateau.push(node);
            for adj in graph.neighbors(node) {
                if !visited[adj.node] && node_weights[adj.node] == level {
                    visited[adj.node] = true;
                    stack.push(adj.node);
                }
            }
        }
        let lowest = plateau.iter().copied().min().unwrap_or(start);
        plateaus.push((lowest, plateau));
    }

    // Shoulders can be entered above their lowest member.
    plateaus.sort_unstable_by_key(|(lowest, _)| *lowest);
    let mut seeds = Seeds::new();
    for (label, (_, plateau)) in (1u32..).zip(&plateaus) {
        for &node in plateau {
            seeds.insert(node, label);
        }
    }

    debug!(
        "{} seeded plateaus covering {} of {} nodes",
        plateaus.len(),
        seeds.len(),
        n
    );
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rag_core::AdjacencyGraph;

    fn path(n: usize) -> AdjacencyGraph {
        let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
        AdjacencyGraph::from_edges(n, &edges).expect("path graph")
    }

    #[test]
    fn symmetric_valley_has_two_minima() {
        let seeds = node_weighted_seeds(&path(4), &[0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(vec![(0, 1), (3, 2)], seeds.iter().collect::<Vec<_>>());
    }

    #[test]
    fn flat_minima_become_one_seed_each() {
        // Two flat basins separated by a ridge.
        let w = [1.0, 1.0, 1.0, 4.0, 2.0, 2.0];
        let seeds = node_weighted_seeds(&path(6), &w).expect("valid");
        assert_eq!(vec![1, 2], seeds.distinct_labels());
        assert_eq!(
            vec![(0, 1), (1, 1), (2, 1), (4, 2), (5, 2)],
            seeds.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn shoulder_reached_from_a_local_minimum_is_seeded() {
        // Node 1 is <= both neighbors; node 2 shares its weight but drains into 3.
        let w = [5.0, 3.0, 3.0, 1.0];
        let seeds = node_weighted_seeds(&path(4), &w).expect("valid");
        assert_eq!(vec![(1, 1), (2, 1), (3, 2)], seeds.iter().collect::<Vec<_>>());
    }

    #[test]
    fn shoulder_found_late_still_gets_its_own_label() {
        // Node 2 drains into 1, so the plateau {2, 3, 4} is entered from node 3.
        let w = [2.0, 0.0, 1.0, 1.0, 1.0, 3.0];
        let seeds = node_weighted_seeds(&path(6), &w).expect("valid");
        assert_eq!(
            vec![(1, 1), (2, 2), (3, 2), (4, 2)],
            seeds.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn plateau_entered_late_is_numbered_by_its_lowest_member() {
        // 0 and 2 share weight 2; 0 drains into 3, so {0, 2} is found from 2,
        // after the isolated node 1.
        let g = AdjacencyGraph::from_edges(4, &[(0, 2), (0, 3)]).expect("graph");
        let seeds = node_weighted_seeds(&g, &[2.0, 5.0, 2.0, 0.0]).expect("valid");
        assert_eq!(
            vec![(0, 1), (1, 2), (2, 1), (3, 3)],
            seeds.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn labels_follow_lowest_member_id() {
        // Minima at 4 and at {1, 2}; {1, 2} is found first.
        let w = [9.0, 0.5, 0.5, 9.0, 0.1];
        let seeds = node_weighted_seeds(&path(5), &w).expect("valid");
        assert_eq!(Some(1), seeds.get(1));
        assert_eq!(Some(1), seeds.get(2));
        assert_eq!(Some(2), seeds.get(4));
    }

    #[test]
    fn isolated_nodes_seed_themselves() {
        let g = AdjacencyGraph::new(2);
        let seeds = node_weighted_seeds(&g, &[3.0, 3.0]).expect("valid");
        assert_eq!(vec![(0, 1), (1, 2)], seeds.iter().collect::<Vec<_>>());
    }

    #[test]
    fn rejects_nan_weights() {
        let err = node_weighted_seeds(&path(3), &[0.0, f32::NAN, 1.0]).unwrap_err();
        assert!(matches!(err, WatershedError::Graph(_)));
    }

    #[test]
    fn validate_rejects_zero_label_and_out_of_range_node() {
        let seeds: Seeds = [(0, 1), (5, 2)].into_iter().collect();
        assert_eq!(
            Err(WatershedError::InvalidSeed {
                node: 5,
                label: 2,
                node_count: 3
            }),
            seeds.validate(3)
        );
        let zero: Seeds = [(1, 0)].into_iter().collect();
        assert!(zero.validate(3).is_err());
    }
}

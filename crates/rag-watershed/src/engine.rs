//! Priority-flood watershed shared by the node- and edge-weighted variants.
//!
//! Seeds are labeled first. Each labeled node then proposes its label to
//! every neighbor that is not labeled yet, keyed by the flood cost. The
//! cheapest proposal is popped next; if its target got labeled in the
//! meantime the proposal is stale and dropped, otherwise the target takes the
//! proposed label and proposes in turn. Equal costs pop in push order, which
//! makes the result a pure function of graph, weights and seeds.

use log::{debug, warn};
use rag_core::{connected_components, validate_weights, Adjacency, FloodQueue, Graph, NodeId};
use serde::{Deserialize, Serialize};

use crate::{Seeds, WatershedError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Which weight map prices a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloodCost {
    /// Cost of reaching a node is that node's weight.
    NodeWeighted,
    /// Cost of reaching a node is the weight of the edge taken.
    EdgeWeighted,
}

impl FloodCost {
    #[inline]
    fn cost(self, weights: &[f32], step: Adjacency) -> f32 {
        match self {
            FloodCost::NodeWeighted => weights[step.node],
            FloodCost::EdgeWeighted => weights[step.edge],
        }
    }

    fn expected_len<G: Graph>(self, graph: &G) -> usize {
        match self {
            FloodCost::NodeWeighted => graph.node_count(),
            FloodCost::EdgeWeighted => graph.edge_count(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FloodCost::NodeWeighted => "node weights",
            FloodCost::EdgeWeighted => "edge weights",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeState {
    Unlabeled,
    Queued,
    Labeled,
}

/// Watershed flooding over a borrowed graph.
///
/// The engine holds no state between calls; every call allocates its own
/// queue and label array.
#[derive(Clone, Copy, Debug)]
pub struct WatershedEngine<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> WatershedEngine<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Flood with node weights; see [`FloodCost::NodeWeighted`].
    pub fn node_weighted(&self, node_weights: &[f32], seeds: &Seeds) -> Result<Vec<u32>, WatershedError> {
        self.flood(FloodCost::NodeWeighted, node_weights, seeds)
    }

    /// Flood with edge weights; see [`FloodCost::EdgeWeighted`].
    pub fn edge_weighted(&self, edge_weights: &[f32], seeds: &Seeds) -> Result<Vec<u32>, WatershedError> {
        self.flood(FloodCost::EdgeWeighted, edge_weights, seeds)
    }

    /// Label every node with the seed label that reaches it first.
    ///
    /// Returns one label per node. Fails with
    /// [`WatershedError::UnseededComponent`] instead of returning a partial
    /// labeling when some connected component holds no seed.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, weights, seeds), fields(nodes = self.graph.node_count(), seeds = seeds.len()))
    )]
    pub fn flood(
        &self,
        cost: FloodCost,
        weights: &[f32],
        seeds: &Seeds,
    ) -> Result<Vec<u32>, WatershedError> {
        let graph = self.graph;
        let n = graph.node_count();
        validate_weights(cost.describe(), weights, cost.expected_len(graph))?;
        seeds.validate(n)?;
        if seeds.is_empty() && n > 0 {
            warn!("flooding {n} nodes without any seed");
        }

        let mut state = vec![NodeState::Unlabeled; n];
        let mut labels = vec![0u32; n];
        let mut queue: FloodQueue<(NodeId, u32)> = FloodQueue::with_capacity(n);

        for (node, label) in seeds.iter() {
            state[node] = NodeState::Labeled;
            labels[node] = label;
        }
        for (node, label) in seeds.iter() {
            for step in graph.neighbors(node) {
                if state[step.node] != NodeState::Labeled {
                    queue.push(cost.cost(weights, step), (step.node, label));
                    state[step.node] = NodeState::Queued;
                }
            }
        }

        let mut stale = 0usize;
        while let Some((_, (node, label))) = queue.pop() {
            if state[node] == NodeState::Labeled {
                stale += 1;
                continue;
            }
            state[node] = NodeState::Labeled;
            labels[node] = label;
            for step in graph.neighbors(node) {
                if state[step.node] != NodeState::Labeled {
                    queue.push(cost.cost(weights, step), (step.node, label));
                    state[step.node] = NodeState::Queued;
                }
            }
        }
        debug!(
            "{:?} flood: {} pushes, {} stale pops",
            cost,
            queue.pushed(),
            stale
        );

        let unlabeled: Vec<NodeId> = (0..n)
            .filter(|&node| state[node] != NodeState::Labeled)
            .collect();
        if let Some(&first) = unlabeled.first() {
            let cc = connected_components(graph);
            let mut seedless: Vec<usize> = unlabeled.iter().map(|&node| cc.labels[node]).collect();
            seedless.sort_unstable();
            seedless.dedup();
            warn!(
                "{} nodes in {} components unreachable from any seed",
                unlabeled.len(),
                seedless.len()
            );
            return Err(WatershedError::UnseededComponent {
                unlabeled: unlabeled.len(),
                components: seedless.len(),
                first,
            });
        }

        Ok(labels)
    }
}

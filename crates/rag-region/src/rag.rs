//! Region adjacency graph over a labeled base graph.
//!
//! Every surviving label becomes one coarse node; every pair of labels that
//! touch across at least one base edge becomes one coarse edge. Construction
//! also records the coarse-to-fine correspondence (member pixels per region,
//! inducing base edges per coarse edge) used later for feature accumulation.

use std::collections::BTreeSet;

use log::debug;
use rag_core::{Adjacency, AdjacencyGraph, EdgeId, Graph, GraphError, NodeId};

use crate::{RagError, RagParams};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Coarse graph with one node per label and its correspondence to the base graph.
///
/// Coarse node ids are assigned in increasing label order, skipping the
/// ignore label. Coarse edge ids follow first occurrence in the base-edge
/// scan. The structure is immutable once built.
#[derive(Clone, Debug)]
pub struct RegionAdjacencyGraph {
    graph: AdjacencyGraph,
    region_labels: Vec<u32>,
    node_of_label: Vec<Option<NodeId>>,
    region_of_base: Vec<Option<NodeId>>,
    members: Vec<Vec<NodeId>>,
    boundaries: Vec<Vec<EdgeId>>,
    base_edge_count: usize,
}

impl RegionAdjacencyGraph {
    /// Collapse `base` according to `labels` (one label per base node).
    ///
    /// Labels are expected to cover `0..=max` contiguously once the ignore
    /// label is set aside; a gap fails with [`RagError::EmptyGraph`].
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(base, labels), fields(base_nodes = base.node_count()))
    )]
    pub fn build<G: Graph>(base: &G, labels: &[u32], params: &RagParams) -> Result<Self, RagError> {
        let n = base.node_count();
        if labels.len() != n {
            return Err(GraphError::DimensionMismatch {
                what: "label map",
                expected: n,
                actual: labels.len(),
            }
            .into());
        }
        let ignore = params.ignore_label;
        let kept = |l: u32| Some(l) != ignore;

        let Some(max_label) = labels.iter().copied().filter(|&l| kept(l)).max() else {
            debug!("every base node carries the ignore label, coarse graph is empty");
            return Ok(Self::empty(n, base.edge_count()));
        };
        // Labels 0..=max minus the ignore label need at least `max` pixels.
        let kept_pixels = labels.iter().filter(|&&l| kept(l)).count();
        if max_label as usize > kept_pixels {
            return Err(RagError::EmptyGraph {
                label: first_missing_label(labels, kept),
            });
        }

        let mut counts = vec![0usize; max_label as usize + 1];
        for &l in labels.iter().filter(|&&l| kept(l)) {
            counts[l as usize] += 1;
        }

        let mut node_of_label = vec![None; counts.len()];
        let mut region_labels = Vec::new();
        for (label, &count) in counts.iter().enumerate() {
            let label = label as u32;
            if !kept(label) {
                continue;
            }
            if count == 0 {
                return Err(RagError::EmptyGraph { label });
            }
            node_of_label[label as usize] = Some(region_labels.len());
            region_labels.push(label);
        }

        let region_count = region_labels.len();
        let mut members: Vec<Vec<NodeId>> = region_labels
            .iter()
            .map(|&l| Vec::with_capacity(counts[l as usize]))
            .collect();
        let mut region_of_base = Vec::with_capacity(n);
        for (node, &l) in labels.iter().enumerate() {
            let region = if kept(l) {
                node_of_label[l as usize]
            } else {
                None
            };
            if let Some(r) = region {
                members[r].push(node);
            }
            region_of_base.push(region);
        }

        let mut graph = AdjacencyGraph::new(region_count);
        let mut boundaries: Vec<Vec<EdgeId>> = Vec::new();
        for (e, u, v) in base.edges() {
            let (Some(ru), Some(rv)) = (region_of_base[u], region_of_base[v]) else {
                continue;
            };
            if ru == rv {
                continue;
            }
            let coarse = graph.add_edge(ru, rv)?;
            if coarse == boundaries.len() {
                boundaries.push(Vec::new());
            }
            boundaries[coarse].push(e);
        }

        debug!(
            "region adjacency graph: {} regions, {} edges from {} base nodes / {} base edges",
            region_count,
            graph.edge_count(),
            n,
            base.edge_count()
        );

        Ok(Self {
            graph,
            region_labels,
            node_of_label,
            region_of_base,
            members,
            boundaries,
            base_edge_count: base.edge_count(),
        })
    }

    fn empty(base_nodes: usize, base_edges: usize) -> Self {
        Self {
            graph: AdjacencyGraph::new(0),
            region_labels: Vec::new(),
            node_of_label: Vec::new(),
            region_of_base: vec![None; base_nodes],
            members: Vec::new(),
            boundaries: Vec::new(),
            base_edge_count: base_edges,
        }
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn region_count(&self) -> usize {
        self.region_labels.len()
    }

    pub fn base_node_count(&self) -> usize {
        self.region_of_base.len()
    }

    pub fn base_edge_count(&self) -> usize {
        self.base_edge_count
    }

    /// Input label represented by coarse node `node`.
    pub fn label_of(&self, node: NodeId) -> u32 {
        self.region_labels[node]
    }

    /// Coarse node for an input label, `None` for the ignore label or unknown labels.
    pub fn node_of_label(&self, label: u32) -> Option<NodeId> {
        self.node_of_label.get(label as usize).copied().flatten()
    }

    /// Coarse node owning base node `base_node`, `None` when it was ignored.
    pub fn region_of(&self, base_node: NodeId) -> Option<NodeId> {
        self.region_of_base.get(base_node).copied().flatten()
    }

    /// Base nodes collapsed into `node`, ascending.
    pub fn members(&self, node: NodeId) -> &[NodeId] {
        &self.members[node]
    }

    /// Base edges crossing the boundary represented by coarse `edge`, ascending.
    pub fn boundary_edges(&self, edge: EdgeId) -> &[EdgeId] {
        &self.boundaries[edge]
    }
}

/// Smallest kept label below the maximum that no base node carries.
fn first_missing_label(labels: &[u32], kept: impl Fn(u32) -> bool) -> u32 {
    let present: BTreeSet<u32> = labels.iter().copied().filter(|&l| kept(l)).collect();
    (0..=u32::MAX)
        .find(|&l| kept(l) && !present.contains(&l))
        .unwrap_or(u32::MAX)
}

impl Graph for RegionAdjacencyGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.graph.endpoints(edge)
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = Adjacency> + '_ {
        self.graph.neighbors(node)
    }

    fn find_edge(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        self.graph.find_edge(u, v)
    }

    fn degree(&self, node: NodeId) -> usize {
        self.graph.degree(node)
    }
}

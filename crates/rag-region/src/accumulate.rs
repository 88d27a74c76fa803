//! Aggregation of base-graph features onto the region adjacency graph.
//!
//! All accumulators are plain means over the correspondence recorded at
//! construction time. Inputs are validated before any output is produced.

use rag_core::{validate_weights, Graph, GraphError};

use crate::{AccumulationTarget, RagError, RegionAdjacencyGraph};

#[cfg(feature = "tracing")]
use tracing::instrument;

fn mean_of(values: impl Iterator<Item = f32>, count: usize) -> f32 {
    let sum: f64 = values.map(f64::from).sum();
    (sum / count as f64) as f32
}

impl RegionAdjacencyGraph {
    /// Mean base-node weight per region.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all, fields(regions = self.region_count())))]
    pub fn accumulate_node_features(&self, base_node_weights: &[f32]) -> Result<Vec<f32>, RagError> {
        validate_weights("base node weights", base_node_weights, self.base_node_count())?;
        (0..self.region_count())
            .map(|r| {
                let members = self.members(r);
                if members.is_empty() {
                    return Err(RagError::Accumulation {
                        target: AccumulationTarget::Node,
                        index: r,
                    });
                }
                Ok(mean_of(
                    members.iter().map(|&n| base_node_weights[n]),
                    members.len(),
                ))
            })
            .collect()
    }

    /// Mean weight of the base edges inducing each coarse edge.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all, fields(edges = self.edge_count())))]
    pub fn accumulate_edge_features(&self, base_edge_weights: &[f32]) -> Result<Vec<f32>, RagError> {
        validate_weights("base edge weights", base_edge_weights, self.base_edge_count())?;
        (0..self.edge_count())
            .map(|e| {
                let crossing = self.boundary_edges(e);
                if crossing.is_empty() {
                    return Err(RagError::Accumulation {
                        target: AccumulationTarget::Edge,
                        index: e,
                    });
                }
                Ok(mean_of(
                    crossing.iter().map(|&b| base_edge_weights[b]),
                    crossing.len(),
                ))
            })
            .collect()
    }

    /// Coarse edge weight from a node image: the mean, over every inducing
    /// base edge, of both endpoint weights.
    ///
    /// `base` must be the graph this RAG was built from.
    pub fn accumulate_edge_features_from_node_image<G: Graph>(
        &self,
        base: &G,
        base_node_weights: &[f32],
    ) -> Result<Vec<f32>, RagError> {
        if base.node_count() != self.base_node_count() {
            return Err(GraphError::DimensionMismatch {
                what: "base graph nodes",
                expected: self.base_node_count(),
                actual: base.node_count(),
            }
            .into());
        }
        if base.edge_count() != self.base_edge_count() {
            return Err(GraphError::DimensionMismatch {
                what: "base graph edges",
                expected: self.base_edge_count(),
                actual: base.edge_count(),
            }
            .into());
        }
        validate_weights("base node weights", base_node_weights, self.base_node_count())?;
        (0..self.edge_count())
            .map(|e| {
                let crossing = self.boundary_edges(e);
                if crossing.is_empty() {
                    return Err(RagError::Accumulation {
                        target: AccumulationTarget::Edge,
                        index: e,
                    });
                }
                let endpoints = crossing.iter().flat_map(|&b| {
                    let (u, v) = base.endpoints(b);
                    [base_node_weights[u], base_node_weights[v]]
                });
                Ok(mean_of(endpoints, 2 * crossing.len()))
            })
            .collect()
    }

    /// Number of base nodes per region.
    pub fn region_sizes(&self) -> Vec<usize> {
        (0..self.region_count())
            .map(|r| self.members(r).len())
            .collect()
    }

    /// Number of inducing base edges per coarse edge (boundary length in
    /// lattice steps for a pixel grid).
    pub fn boundary_lengths(&self) -> Vec<usize> {
        (0..self.edge_count())
            .map(|e| self.boundary_edges(e).len())
            .collect()
    }
}

use rag_core::GraphError;

use crate::{RagError, RegionAdjacencyGraph};

/// Value written for base nodes that belong to no region.
pub const UNLABELED: u32 = 0;

impl RegionAdjacencyGraph {
    /// Copy a per-region labeling back onto the base nodes.
    ///
    /// Ignored base nodes receive [`UNLABELED`].
    pub fn project_node_labels(&self, region_labels: &[u32]) -> Result<Vec<u32>, RagError> {
        if region_labels.len() != self.region_count() {
            return Err(GraphError::DimensionMismatch {
                what: "region labels",
                expected: self.region_count(),
                actual: region_labels.len(),
            }
            .into());
        }
        Ok((0..self.base_node_count())
            .map(|n| self.region_of(n).map_or(UNLABELED, |r| region_labels[r]))
            .collect())
    }

    /// Like [`Self::project_node_labels`] for per-region features.
    pub fn project_node_features(
        &self,
        region_features: &[f32],
        fill: f32,
    ) -> Result<Vec<f32>, RagError> {
        if region_features.len() != self.region_count() {
            return Err(GraphError::DimensionMismatch {
                what: "region features",
                expected: self.region_count(),
                actual: region_features.len(),
            }
            .into());
        }
        Ok((0..self.base_node_count())
            .map(|n| self.region_of(n).map_or(fill, |r| region_features[r]))
            .collect())
    }
}

//! End-to-end segmentation: pixel lattice, region graph, features, seeds, floods.

use log::{debug, info};
use rag_core::{
    edge_features_from_interpolated_image, edge_features_from_node_image, GraphError, GridGraph,
    ScalarImageView,
};
use rag_region::{RagError, RegionAdjacencyGraph};
use rag_watershed::{node_weighted_seeds, Seeds, WatershedEngine, WatershedError};
use serde::{Deserialize, Serialize};

use crate::SegmentParams;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by [`segment`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Rag(#[from] RagError),
    #[error(transparent)]
    Watershed(#[from] WatershedError),
}

/// Result of one watershed flavour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantLabels {
    /// One label per region (coarse node).
    pub region_labels: Vec<u32>,
    /// Region labels projected back to pixels; ignored pixels hold
    /// [`rag_region::UNLABELED`].
    pub pixel_labels: Vec<u32>,
}

/// Everything [`segment`] computed along the way.
#[derive(Clone, Debug)]
pub struct Segmentation {
    pub grid: GridGraph,
    pub rag: RegionAdjacencyGraph,
    /// Mean node-image value per region.
    pub region_weights: Vec<f32>,
    /// Mean grid edge weight per region boundary.
    pub boundary_weights: Vec<f32>,
    pub seeds: Seeds,
    pub node_weighted: Option<VariantLabels>,
    pub edge_weighted: Option<VariantLabels>,
}

/// Segment a superpixel label map.
///
/// `labels` and `node_image` are row-major `width x height` maps. Grid edge
/// weights are sampled from `interpolated` when given (see
/// [`rag_core::interpolated_shape`]) and otherwise averaged from the two
/// endpoint pixels of `node_image`. Seeds are the minimum plateaus of the
/// per-region means and are shared by both watershed flavours.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(labels, node_image, interpolated, params))
)]
pub fn segment(
    labels: &[u32],
    width: usize,
    height: usize,
    node_image: ScalarImageView<'_>,
    interpolated: Option<ScalarImageView<'_>>,
    params: &SegmentParams,
) -> Result<Segmentation, SegmentError> {
    if (node_image.width, node_image.height) != (width, height) {
        return Err(GraphError::ShapeMismatch {
            what: "node image",
            expected: (width, height),
            actual: (node_image.width, node_image.height),
        }
        .into());
    }

    let grid = GridGraph::with_params(width, height, &params.grid);
    let grid_edge_weights = match interpolated {
        Some(fine) => edge_features_from_interpolated_image(&grid, fine)?,
        None => edge_features_from_node_image(&grid, node_image.data)?,
    };

    let rag = RegionAdjacencyGraph::build(&grid, labels, &params.rag)?;
    let region_weights = rag.accumulate_node_features(node_image.data)?;
    let boundary_weights = rag.accumulate_edge_features(&grid_edge_weights)?;
    let seeds = node_weighted_seeds(&rag, &region_weights)?;
    debug!(
        "{} regions, {} boundaries, {} seeds",
        rag.region_count(),
        boundary_weights.len(),
        seeds.distinct_labels().len()
    );

    let engine = WatershedEngine::new(&rag);
    let project = |region_labels: Vec<u32>| -> Result<VariantLabels, SegmentError> {
        let pixel_labels = rag.project_node_labels(&region_labels)?;
        Ok(VariantLabels {
            region_labels,
            pixel_labels,
        })
    };
    let node_weighted = if params.variant.runs_node_weighted() {
        Some(project(engine.node_weighted(&region_weights, &seeds)?)?)
    } else {
        None
    };
    let edge_weighted = if params.variant.runs_edge_weighted() {
        Some(project(engine.edge_weighted(&boundary_weights, &seeds)?)?)
    } else {
        None
    };
    info!(
        "segmented {}x{} pixels into {} regions and {} basins",
        width,
        height,
        rag.region_count(),
        seeds.distinct_labels().len()
    );

    Ok(Segmentation {
        grid,
        rag,
        region_weights,
        boundary_weights,
        seeds,
        node_weighted,
        edge_weighted,
    })
}

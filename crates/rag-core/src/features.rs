//! Per-edge features of a [`GridGraph`] derived from pixel maps.

use crate::image::check_len;
use crate::{validate_weights, Graph, GraphError, GridGraph, ScalarImageView};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Expected size of an interpolated map for a `width x height` lattice.
///
/// At `2 * size - 1` every edge midpoint of the lattice, diagonals included,
/// falls onto an exact sample.
pub fn interpolated_shape(width: usize, height: usize) -> (usize, usize) {
    ((2 * width).saturating_sub(1), (2 * height).saturating_sub(1))
}

/// Sample `interpolated` at the midpoint of every grid edge.
///
/// Pixel `(x, y)` sits at `(2x, 2y)` in the finer map, so the midpoint of
/// `(x0, y0)-(x1, y1)` is the sample `(x0 + x1, y0 + y1)`. Only the shape is
/// checked; that the finer map was really produced by interpolation is the
/// caller's business.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(grid, interpolated), fields(width = grid.width(), height = grid.height()))
)]
pub fn edge_features_from_interpolated_image(
    grid: &GridGraph,
    interpolated: ScalarImageView<'_>,
) -> Result<Vec<f32>, GraphError> {
    let expected = interpolated_shape(grid.width(), grid.height());
    let actual = (interpolated.width, interpolated.height);
    if expected != actual {
        return Err(GraphError::ShapeMismatch {
            what: "interpolated image",
            expected,
            actual,
        });
    }
    check_len(
        "interpolated image data",
        expected.0 * expected.1,
        interpolated.data.len(),
    )?;

    let weights: Vec<f32> = grid
        .edges()
        .map(|(_, u, v)| {
            let (x0, y0) = grid.coords(u);
            let (x1, y1) = grid.coords(v);
            interpolated.data[(y0 + y1) * interpolated.width + (x0 + x1)]
        })
        .collect();
    validate_weights("interpolated edge weights", &weights, grid.edge_count())?;
    Ok(weights)
}

/// Edge weight as the mean of the two endpoint node weights.
pub fn edge_features_from_node_image<G: Graph>(
    graph: &G,
    node_weights: &[f32],
) -> Result<Vec<f32>, GraphError> {
    validate_weights("node weights", node_weights, graph.node_count())?;
    Ok(graph
        .edges()
        .map(|(_, u, v)| 0.5 * (node_weights[u] + node_weights[v]))
        .collect())
}

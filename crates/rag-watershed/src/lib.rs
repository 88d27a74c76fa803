//! Seeded watershed segmentation on arbitrary [`rag_core::Graph`]s.
//!
//! ## Quickstart
//!
//! ```
//! use rag_core::AdjacencyGraph;
//! use rag_watershed::{node_weighted_seeds, node_weighted_watersheds};
//!
//! let graph = AdjacencyGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)])?;
//! let weights = [0.0, 5.0, 5.0, 0.0];
//!
//! let seeds = node_weighted_seeds(&graph, &weights)?;
//! let labels = node_weighted_watersheds(&graph, &weights, &seeds)?;
//! assert_eq!(vec![1, 1, 2, 2], labels);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Both variants run the same flood (see [`WatershedEngine`]); they differ
//! only in whether a step is priced by the target node's weight or by the
//! weight of the edge taken.

mod engine;
mod error;
mod seeds;

pub use engine::{FloodCost, WatershedEngine};
pub use error::WatershedError;
pub use seeds::{node_weighted_seeds, Seeds};

use rag_core::Graph;

/// Node-weighted watershed: one label per node, drawn from `seeds`.
pub fn node_weighted_watersheds<G: Graph>(
    graph: &G,
    node_weights: &[f32],
    seeds: &Seeds,
) -> Result<Vec<u32>, WatershedError> {
    WatershedEngine::new(graph).node_weighted(node_weights, seeds)
}

/// Edge-weighted watershed: one label per node, drawn from `seeds`.
pub fn edge_weighted_watersheds<G: Graph>(
    graph: &G,
    edge_weights: &[f32],
    seeds: &Seeds,
) -> Result<Vec<u32>, WatershedError> {
    WatershedEngine::new(graph).edge_weighted(edge_weights, seeds)
}

//! Graph primitives for region-adjacency segmentation.
//!
//! This crate knows nothing about labels or regions. It provides:
//! - the [`Graph`] interface (dense node/edge ids, neighbor iteration, edge
//!   lookup) and an arena-backed [`AdjacencyGraph`],
//! - [`GridGraph`], the implicit pixel lattice with 4- or 8-connectivity,
//! - pixel-map to edge-weight helpers,
//! - [`FloodQueue`], a min-cost queue with FIFO tie-breaking shared by the
//!   watershed and shortest-path code,
//! - connected components and Dijkstra / A* shortest paths.
//!
//! Weights are `f32` and must be finite; every entry point that takes a
//! weight map validates it before touching any state.

mod components;
mod error;
mod features;
mod graph;
mod grid;
mod image;
mod logger;
mod queue;
mod shortest_path;

pub use components::{connected_components, Components};
pub use error::GraphError;
pub use features::{
    edge_features_from_interpolated_image, edge_features_from_node_image, interpolated_shape,
};
pub use graph::{Adjacency, AdjacencyGraph, EdgeId, Graph, NodeId};
pub use grid::{Connectivity, GridGraph, GridGraphParams};
pub use image::{validate_non_negative_weights, validate_weights, ScalarImage, ScalarImageView};
pub use queue::FloodQueue;
pub use shortest_path::{shortest_path_astar, shortest_path_dijkstra, ShortestPaths};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_for_verbosity};

//! Region adjacency graphs over labeled pixel grids.
//!
//! ## Quickstart
//!
//! ```
//! use rag_core::{Connectivity, Graph, GridGraph};
//! use rag_region::{RagParams, RegionAdjacencyGraph};
//!
//! let grid = GridGraph::new(3, 1, Connectivity::Four);
//! let rag = RegionAdjacencyGraph::build(&grid, &[0, 0, 1], &RagParams::default())?;
//! assert_eq!(2, rag.node_count());
//!
//! let means = rag.accumulate_node_features(&[1.0, 3.0, 5.0])?;
//! assert_eq!(vec![2.0, 5.0], means);
//! # Ok::<(), rag_region::RagError>(())
//! ```
//!
//! A label of zero is not special: pass `ignore_label` in [`RagParams`] to
//! drop background pixels.

mod accumulate;
mod error;
mod params;
mod project;
mod rag;

pub use error::{AccumulationTarget, RagError};
pub use params::RagParams;
pub use project::UNLABELED;
pub use rag::RegionAdjacencyGraph;

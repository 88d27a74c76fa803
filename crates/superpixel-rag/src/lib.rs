//! Superpixel region adjacency graphs and seeded watershed segmentation.
//!
//! This crate provides:
//! - re-exports of the underlying `rag-*` crates,
//! - [`segment`], the end-to-end pipeline from a superpixel label map and a
//!   pixel cost image to one watershed label per region and per pixel,
//! - JSON config / report helpers ([`SegmentConfig`], [`SegmentReport`]),
//! - (feature `image`) conversions from `image` buffers.
//!
//! ## Quickstart
//!
//! ```
//! use superpixel_rag::core::ScalarImage;
//! use superpixel_rag::{segment, SegmentParams};
//!
//! // Four 2x2 superpixels in a row; the cost image dips at both ends.
//! let (width, height) = (8, 2);
//! let labels: Vec<u32> = (0..height).flat_map(|_| (0..width).map(|x| x as u32 / 2)).collect();
//! let cost = ScalarImage::from_fn(width, height, |x, _| [0.0, 4.0, 4.0, 0.0][x / 2]);
//!
//! let seg = segment(&labels, width, height, cost.as_view(), None, &SegmentParams::default())?;
//! let regions = seg.node_weighted.as_ref().map(|v| v.region_labels.clone());
//! assert_eq!(Some(vec![1, 1, 2, 2]), regions);
//! # Ok::<(), superpixel_rag::SegmentError>(())
//! ```
//!
//! ## API map
//! - `superpixel_rag::core`: graph interface, pixel grid graph, edge features,
//!   shortest paths, logging setup.
//! - `superpixel_rag::region`: region adjacency graph and feature accumulation.
//! - `superpixel_rag::watershed`: seeding and node-/edge-weighted flooding.
//! - `superpixel_rag::raster` (feature `image`): `image` crate interop.

pub use rag_core as core;
pub use rag_region as region;
pub use rag_watershed as watershed;

pub use rag_core::{Connectivity, GridGraph, GridGraphParams, ScalarImage, ScalarImageView};
pub use rag_region::{RagParams, RegionAdjacencyGraph};
pub use rag_watershed::{Seeds, WatershedEngine};

mod io;
mod params;
mod pipeline;

pub use io::{SegmentConfig, SegmentIoError, SegmentReport};
pub use params::{SegmentParams, WatershedVariant};
pub use pipeline::{segment, SegmentError, Segmentation, VariantLabels};

#[cfg(feature = "image")]
pub mod raster;

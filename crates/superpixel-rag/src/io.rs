//! JSON configuration and report helpers for segmentation runs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{SegmentError, SegmentParams, Segmentation, VariantLabels};

#[derive(thiserror::Error, Debug)]
pub enum SegmentIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// On-disk configuration of a segmentation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    #[serde(default)]
    pub params: SegmentParams,
    #[serde(default)]
    pub output_path: Option<String>,
}

impl SegmentConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SegmentIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SegmentIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("segment_report.json"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentReport {
    pub width: usize,
    pub height: usize,
    pub params: SegmentParams,
    #[serde(default)]
    pub region_count: usize,
    #[serde(default)]
    pub boundary_count: usize,
    /// Number of distinct seed labels, i.e. basins.
    #[serde(default)]
    pub seed_count: usize,
    #[serde(default)]
    pub region_sizes: Vec<usize>,
    #[serde(default)]
    pub node_weighted: Option<VariantLabels>,
    #[serde(default)]
    pub edge_weighted: Option<VariantLabels>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SegmentReport {
    /// Empty report for a `width x height` run with `params`.
    pub fn new(width: usize, height: usize, params: SegmentParams) -> Self {
        Self {
            width,
            height,
            params,
            region_count: 0,
            boundary_count: 0,
            seed_count: 0,
            region_sizes: Vec::new(),
            node_weighted: None,
            edge_weighted: None,
            error: None,
        }
    }

    /// Populate report fields from a successful run.
    pub fn set_segmentation(&mut self, seg: &Segmentation) {
        self.region_count = seg.rag.region_count();
        self.boundary_count = seg.boundary_weights.len();
        self.seed_count = seg.seeds.distinct_labels().len();
        self.region_sizes = seg.rag.region_sizes();
        self.node_weighted = seg.node_weighted.clone();
        self.edge_weighted = seg.edge_weighted.clone();
        self.error = None;
    }

    /// Record a segmentation error.
    pub fn set_error(&mut self, err: &SegmentError) {
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SegmentIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SegmentIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

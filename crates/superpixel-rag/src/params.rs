use rag_core::GridGraphParams;
use rag_region::RagParams;
use serde::{Deserialize, Serialize};

/// Which watershed flavour(s) [`crate::segment`] runs on the region graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatershedVariant {
    NodeWeighted,
    EdgeWeighted,
    #[default]
    Both,
}

impl WatershedVariant {
    pub fn runs_node_weighted(self) -> bool {
        matches!(self, WatershedVariant::NodeWeighted | WatershedVariant::Both)
    }

    pub fn runs_edge_weighted(self) -> bool {
        matches!(self, WatershedVariant::EdgeWeighted | WatershedVariant::Both)
    }
}

/// Everything [`crate::segment`] needs besides the pixel data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentParams {
    #[serde(default)]
    pub grid: GridGraphParams,
    #[serde(default)]
    pub rag: RagParams,
    #[serde(default)]
    pub variant: WatershedVariant,
}

use serde::{Deserialize, Serialize};

/// Options for [`crate::RegionAdjacencyGraph::build`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagParams {
    /// Pixels carrying this label are dropped: they induce neither a region
    /// nor any boundary edge.
    #[serde(default)]
    pub ignore_label: Option<u32>,
}

/// Errors raised while building graphs or validating per-node / per-edge maps.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("{what}: expected {expected} entries, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what}: expected shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("{what}: invalid value {value} at index {index}")]
    InvalidWeight {
        what: &'static str,
        index: usize,
        value: f32,
    },

    #[error("invalid edge ({u}, {v}) in a graph with {node_count} nodes")]
    InvalidEdge { u: usize, v: usize, node_count: usize },

    #[error("duplicate edge ({u}, {v})")]
    DuplicateEdge { u: usize, v: usize },

    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: usize, node_count: usize },
}

impl GraphError {
    /// `true` for both the length and the 2D shape flavour of a size error.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            GraphError::DimensionMismatch { .. } | GraphError::ShapeMismatch { .. }
        )
    }
}

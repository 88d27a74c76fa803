use rag_core::GraphError;

/// Which side of the correspondence an accumulation failed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccumulationTarget {
    Node,
    Edge,
}

/// Errors returned while building or querying a region adjacency graph.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RagError {
    #[error("label {label} is declared but has no pixels left after ignoring")]
    EmptyGraph { label: u32 },
    #[error("coarse {target:?} {index} has no grid members to aggregate")]
    Accumulation {
        target: AccumulationTarget,
        index: usize,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

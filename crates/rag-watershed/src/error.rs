use rag_core::GraphError;

/// Errors returned by seeding and flooding.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WatershedError {
    #[error("seed at node {node} with label {label} is invalid (graph has {node_count} nodes, labels must be > 0)")]
    InvalidSeed {
        node: usize,
        label: u32,
        node_count: usize,
    },
    #[error("{unlabeled} nodes in {components} seedless components left unlabeled (first: node {first})")]
    UnseededComponent {
        unlabeled: usize,
        components: usize,
        first: usize,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

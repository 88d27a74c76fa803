//! Undirected graph interface and an arena-backed adjacency list.
//!
//! Nodes are dense ids `0..node_count()`, edges are dense ids `0..edge_count()`.
//! Every edge joins two distinct nodes and appears at most once.

use std::collections::HashMap;

use crate::GraphError;

pub type NodeId = usize;
pub type EdgeId = usize;

/// One entry of a node's neighborhood: the node on the other side and the
/// edge that leads there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Adjacency {
    pub node: NodeId,
    pub edge: EdgeId,
}

/// Read-only view of an undirected simple graph.
///
/// Methods taking a node or edge id panic when the id is out of range, the
/// same way slice indexing does. Callers validate ids coming from outside.
pub trait Graph {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Endpoints of `edge` as `(u, v)` with `u < v`.
    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId);

    /// Neighbors of `node` in a fixed, deterministic order.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = Adjacency> + '_;

    /// Edge joining `u` and `v`, if any. Order of the endpoints does not matter.
    fn find_edge(&self, u: NodeId, v: NodeId) -> Option<EdgeId>;

    fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }

    /// All edges as `(id, u, v)` in id order.
    fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId)> + '_ {
        (0..self.edge_count()).map(move |e| {
            let (u, v) = self.endpoints(e);
            (e, u, v)
        })
    }
}

/// Explicit adjacency structure: per-node neighbor lists plus an edge arena.
///
/// Cross references are plain indices, so the structure is `Clone` and has
/// no ownership cycles.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<Adjacency>>,
    edges: Vec<(NodeId, NodeId)>,
    lookup: HashMap<(NodeId, NodeId), EdgeId>,
}

impl AdjacencyGraph {
    /// Graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Build from an explicit edge list; edge ids follow list order.
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(node_count);
        for &(u, v) in edges {
            let before = graph.edge_count();
            graph.add_edge(u, v)?;
            if graph.edge_count() == before {
                return Err(GraphError::DuplicateEdge { u, v });
            }
        }
        Ok(graph)
    }

    pub fn add_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Insert the edge `{u, v}` or return the id it already has.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId, GraphError> {
        let node_count = self.adjacency.len();
        if u == v || u >= node_count || v >= node_count {
            return Err(GraphError::InvalidEdge { u, v, node_count });
        }
        let key = (u.min(v), u.max(v));
        if let Some(&existing) = self.lookup.get(&key) {
            return Ok(existing);
        }

        let edge = self.edges.len();
        self.edges.push(key);
        self.lookup.insert(key, edge);
        self.adjacency[u].push(Adjacency { node: v, edge });
        self.adjacency[v].push(Adjacency { node: u, edge });
        Ok(edge)
    }
}

impl Graph for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.edges[edge]
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = Adjacency> + '_ {
        self.adjacency[node].iter().copied()
    }

    fn find_edge(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        self.lookup.get(&(u.min(v), u.max(v))).copied()
    }

    fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node].len()
    }
}

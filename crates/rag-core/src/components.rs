use crate::{Graph, NodeId};

/// Connected-component labeling of a graph.
///
/// Component ids are dense and ordered by each component's lowest node id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    pub labels: Vec<usize>,
    pub count: usize,
}

impl Components {
    /// Nodes of every component, each list ascending.
    pub fn members(&self) -> Vec<Vec<NodeId>> {
        let mut out = vec![Vec::new(); self.count];
        for (node, &c) in self.labels.iter().enumerate() {
            out[c].push(node);
        }
        out
    }
}

pub fn connected_components<G: Graph>(graph: &G) -> Components {
    const UNSET: usize = usize::MAX;
    let n = graph.node_count();
    let mut labels = vec![UNSET; n];
    let mut count = 0;
    let mut stack = Vec::new();

    for start in 0..n {
        if labels[start] != UNSET {
            continue;
        }
        labels[start] = count;
        stack.push(start);
        while let Some(node) = stack.pop() {
            for adj in graph.neighbors(node) {
                if labels[adj.node] == UNSET {
                    labels[adj.node] = count;
                    stack.push(adj.node);
                }
            }
        }
        count += 1;
    }

    Components { labels, count }
}

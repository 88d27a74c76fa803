//! Single-source shortest paths over non-negative edge weights.

use crate::{validate_non_negative_weights, FloodQueue, Graph, GraphError, NodeId};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Distances and predecessor tree from one source node.
///
/// Unreached nodes have distance `f32::INFINITY` and no predecessor. With an
/// early-exit target, only nodes settled before the target are final.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub distances: Vec<f32>,
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    fn new(source: NodeId, node_count: usize) -> Self {
        let mut distances = vec![f32::INFINITY; node_count];
        distances[source] = 0.0;
        Self {
            source,
            distances,
            predecessors: vec![None; node_count],
        }
    }

    /// Node sequence `source ..= target`, or `None` when `target` was not reached.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.distances.get(target)?.is_finite() {
            return None;
        }
        let mut path = vec![target];
        let mut node = target;
        while node != self.source {
            node = self.predecessors[node]?;
            path.push(node);
        }
        path.reverse();
        Some(path)
    }
}

fn check_node<G: Graph>(graph: &G, node: NodeId) -> Result<(), GraphError> {
    let node_count = graph.node_count();
    if node >= node_count {
        return Err(GraphError::NodeOutOfRange { node, node_count });
    }
    Ok(())
}

/// Dijkstra from `source`; stops as soon as `target` (if given) is settled.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(graph, edge_weights), fields(nodes = graph.node_count()))
)]
pub fn shortest_path_dijkstra<G: Graph>(
    graph: &G,
    edge_weights: &[f32],
    source: NodeId,
    target: Option<NodeId>,
) -> Result<ShortestPaths, GraphError> {
    shortest_path_astar(graph, edge_weights, source, target, |_| 0.0)
}

/// A* from `source` towards `target`, guided by `heuristic(node)`.
///
/// `heuristic` must not overestimate the remaining distance to the target;
/// with `|_| 0.0` this is exactly Dijkstra. Without a target the heuristic
/// only reorders the search and all distances are still exact as long as it
/// is consistent.
pub fn shortest_path_astar<G, H>(
    graph: &G,
    edge_weights: &[f32],
    source: NodeId,
    target: Option<NodeId>,
    heuristic: H,
) -> Result<ShortestPaths, GraphError>
where
    G: Graph,
    H: Fn(NodeId) -> f32,
{
    validate_non_negative_weights("edge weights", edge_weights, graph.edge_count())?;
    check_node(graph, source)?;
    if let Some(t) = target {
        check_node(graph, t)?;
    }

    let n = graph.node_count();
    let mut result = ShortestPaths::new(source, n);
    let mut settled = vec![false; n];
    let mut queue = FloodQueue::with_capacity(n);
    queue.push(heuristic(source), source);

    while let Some((_, node)) = queue.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if Some(node) == target {
            break;
        }

        let base = result.distances[node];
        for adj in graph.neighbors(node) {
            if settled[adj.node] {
                continue;
            }
            let candidate = base + edge_weights[adj.edge];
            if candidate < result.distances[adj.node] {
                result.distances[adj.node] = candidate;
                result.predecessors[adj.node] = Some(node);
                queue.push(candidate + heuristic(adj.node), adj.node);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyGraph, Connectivity, GridGraph};
    use approx::assert_relative_eq;

    fn diamond() -> (AdjacencyGraph, Vec<f32>) {
        // 0 -1- 1 -1- 3, 0 -5- 2 -1- 3, 1 -3- 2
        let g = AdjacencyGraph::from_edges(5, &[(0, 1), (1, 3), (0, 2), (2, 3), (1, 2)])
            .expect("graph");
        (g, vec![1.0, 1.0, 5.0, 1.0, 3.0])
    }

    #[test]
    fn dijkstra_finds_cheapest_route() {
        let (g, w) = diamond();
        let sp = shortest_path_dijkstra(&g, &w, 0, None).expect("valid");
        assert_relative_eq!(0.0, sp.distances[0]);
        assert_relative_eq!(1.0, sp.distances[1]);
        assert_relative_eq!(2.0, sp.distances[3]);
        assert_relative_eq!(3.0, sp.distances[2]);
        assert!(sp.distances[4].is_infinite());
        assert_eq!(Some(vec![0, 1, 3, 2]), sp.path_to(2));
        assert_eq!(None, sp.path_to(4));
    }

    #[test]
    fn astar_with_manhattan_heuristic_matches_dijkstra_on_grid() {
        let grid = GridGraph::new(6, 5, Connectivity::Four);
        let w = vec![1.0; grid.edge_count()];
        let target = grid.node_at(5, 4);

        let dijkstra = shortest_path_dijkstra(&grid, &w, 0, Some(target)).expect("valid");
        let astar = shortest_path_astar(&grid, &w, 0, Some(target), |n| {
            let (x, y) = grid.coords(n);
            ((5 - x) + (4 - y)) as f32
        })
        .expect("valid");

        assert_relative_eq!(9.0, dijkstra.distances[target]);
        assert_relative_eq!(9.0, astar.distances[target]);
        assert_eq!(10, astar.path_to(target).map(|p| p.len()).unwrap_or(0));
    }

    #[test]
    fn rejects_negative_weights_and_bad_endpoints() {
        let (g, mut w) = diamond();
        assert!(matches!(
            shortest_path_dijkstra(&g, &w, 9, None),
            Err(GraphError::NodeOutOfRange { node: 9, .. })
        ));
        w[2] = -1.0;
        assert!(matches!(
            shortest_path_dijkstra(&g, &w, 0, None),
            Err(GraphError::InvalidWeight { index: 2, .. })
        ));
    }
}

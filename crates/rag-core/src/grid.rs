//! Implicit graph over a 2D pixel lattice.
//!
//! Node id of pixel `(x, y)` is `y * width + x`. Edge ids are assigned in
//! blocks, each block in row-major order of the edge's upper-left endpoint:
//!
//! ```text
//! [ horizontal (x,y)-(x+1,y) | vertical (x,y)-(x,y+1) | C8 only: (x,y)-(x+1,y+1) | (x,y)-(x-1,y+1) ]
//! ```
//!
//! so ids depend only on the lattice size and connectivity. Nothing is
//! stored per edge; endpoints and ids are computed on demand.

use serde::{Deserialize, Serialize};

use crate::{Adjacency, EdgeId, Graph, NodeId};

/// Pixel neighborhood used to connect lattice nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Axis-aligned neighbors only.
    #[default]
    Four,
    /// Axis-aligned plus diagonal neighbors.
    Eight,
}

// Ordered so that neighbor ids come out ascending.
const OFFSETS_C8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
const OFFSETS_C4: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

impl Connectivity {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &OFFSETS_C4,
            Connectivity::Eight => &OFFSETS_C8,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGraphParams {
    #[serde(default)]
    pub connectivity: Connectivity,
}

/// Lattice graph of `width x height` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGraph {
    width: usize,
    height: usize,
    connectivity: Connectivity,
}

impl GridGraph {
    pub fn new(width: usize, height: usize, connectivity: Connectivity) -> Self {
        Self {
            width,
            height,
            connectivity,
        }
    }

    pub fn with_params(width: usize, height: usize, params: &GridGraphParams) -> Self {
        Self::new(width, height, params.connectivity)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[inline]
    pub fn node_at(&self, x: usize, y: usize) -> NodeId {
        y * self.width + x
    }

    #[inline]
    pub fn coords(&self, node: NodeId) -> (usize, usize) {
        (node % self.width, node / self.width)
    }

    fn horizontal_count(&self) -> usize {
        self.width.saturating_sub(1) * self.height
    }

    fn vertical_count(&self) -> usize {
        self.width * self.height.saturating_sub(1)
    }

    fn diagonal_count(&self) -> usize {
        match self.connectivity {
            Connectivity::Four => 0,
            Connectivity::Eight => self.width.saturating_sub(1) * self.height.saturating_sub(1),
        }
    }

    /// Id of the edge from in-bounds pixel `(x, y)` to in-bounds pixel
    /// `(x + dx, y + dy)`, where the step is one of the connectivity offsets.
    fn edge_for_step(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<EdgeId> {
        // Re-anchor at the endpoint the edge is numbered from.
        let (ax, ay, dx, dy) = if dy < 0 || (dy == 0 && dx < 0) {
            (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy), -dx, -dy)
        } else {
            (x, y, dx, dy)
        };

        let h = self.horizontal_count();
        let v = self.vertical_count();
        let d = self.diagonal_count();
        let row = self.width.saturating_sub(1);
        match (dx, dy, self.connectivity) {
            (1, 0, _) => Some(ay * row + ax),
            (0, 1, _) => Some(h + ay * self.width + ax),
            (1, 1, Connectivity::Eight) => Some(h + v + ay * row + ax),
            (-1, 1, Connectivity::Eight) => Some(h + v + d + ay * row + (ax - 1)),
            _ => None,
        }
    }

    #[inline]
    fn step(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < self.width && ny < self.height).then_some((nx, ny))
    }
}

impl Graph for GridGraph {
    fn node_count(&self) -> usize {
        self.width * self.height
    }

    fn edge_count(&self) -> usize {
        self.horizontal_count() + self.vertical_count() + 2 * self.diagonal_count()
    }

    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        let h = self.horizontal_count();
        let v = self.vertical_count();
        let d = self.diagonal_count();
        let row = self.width.saturating_sub(1);
        assert!(edge < self.edge_count(), "edge id {edge} out of range");

        if edge < h {
            let (x, y) = (edge % row, edge / row);
            (self.node_at(x, y), self.node_at(x + 1, y))
        } else if edge < h + v {
            let r = edge - h;
            let (x, y) = (r % self.width, r / self.width);
            (self.node_at(x, y), self.node_at(x, y + 1))
        } else if edge < h + v + d {
            let r = edge - h - v;
            let (x, y) = (r % row, r / row);
            (self.node_at(x, y), self.node_at(x + 1, y + 1))
        } else {
            let r = edge - h - v - d;
            let (x, y) = (r % row + 1, r / row);
            (self.node_at(x, y), self.node_at(x - 1, y + 1))
        }
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = Adjacency> + '_ {
        assert!(node < self.node_count(), "node id {node} out of range");
        let (x, y) = self.coords(node);
        self.connectivity
            .offsets()
            .iter()
            .filter_map(move |&(dx, dy)| {
                let (nx, ny) = self.step(x, y, dx, dy)?;
                let edge = self.edge_for_step(x, y, dx, dy)?;
                Some(Adjacency {
                    node: self.node_at(nx, ny),
                    edge,
                })
            })
    }

    fn find_edge(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        let n = self.node_count();
        if u >= n || v >= n || u == v {
            return None;
        }
        let (ux, uy) = self.coords(u);
        let (vx, vy) = self.coords(v);
        let dx = vx as isize - ux as isize;
        let dy = vy as isize - uy as isize;
        if dx.abs() > 1 || dy.abs() > 1 {
            return None;
        }
        self.edge_for_step(ux, uy, dx, dy)
    }
}

//! Tree layout
//!
//! Top-down rows by depth below the first node in the spec. The first node
//! is the root even when other nodes point at it.

use tracing::{debug, trace};

use crate::core::{Axis, DiagramGraph, LayoutAlgorithm, LayoutConfig, Point, PositionMap};

/// Hierarchical layout rooted at the first node
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeLayout;

impl TreeLayout {
    pub fn new() -> Self {
        Self
    }

    /// Node indices grouped into rows, root row first
    ///
    /// Rows grow breadth-first along outgoing connections and each node is
    /// visited once. Nodes the root cannot reach join the deepest row, in
    /// spec order.
    pub fn assign_rows(graph: &DiagramGraph<'_>) -> Vec<Vec<usize>> {
        if graph.is_empty() {
            return Vec::new();
        }

        let mut visited = vec![false; graph.node_count()];
        visited[0] = true;
        let mut rows = vec![vec![0]];

        loop {
            let mut next_row = Vec::new();
            if let Some(current) = rows.last() {
                for &parent in current {
                    for &child in graph.successors(parent) {
                        if !visited[child] {
                            visited[child] = true;
                            next_row.push(child);
                        }
                    }
                }
            }
            if next_row.is_empty() {
                break;
            }
            rows.push(next_row);
        }

        let unreached: Vec<usize> = (0..graph.node_count()).filter(|&i| !visited[i]).collect();
        if !unreached.is_empty() {
            debug!(count = unreached.len(), "Appending unreached nodes to deepest row");
            if let Some(deepest) = rows.last_mut() {
                deepest.extend(unreached);
            }
        }

        rows
    }
}

impl LayoutAlgorithm for TreeLayout {
    fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap {
        let mut positions = PositionMap::with_capacity(graph.node_count());
        let rows = Self::assign_rows(graph);
        debug!(row_count = rows.len(), "Assigned tree rows");

        for (row, members) in rows.iter().enumerate() {
            let y = config.slot(Axis::Vertical, row, rows.len());
            for (column, &index) in members.iter().enumerate() {
                let x = config.slot(Axis::Horizontal, column, members.len());
                let node = graph.node(index);
                trace!(node_id = %node.id, row, column, "Placing tree node");
                positions.place(node, Point::new(x, y));
            }
        }

        positions
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}

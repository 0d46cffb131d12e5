//! Grid layout
//!
//! Near-square grid filled row by row in spec order. This is also the
//! fallback for unrecognised strategy names.

use tracing::{debug, trace};

use crate::core::{Axis, DiagramGraph, LayoutAlgorithm, LayoutConfig, Point, PositionMap};

/// Row-major grid layout
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout;

impl GridLayout {
    pub fn new() -> Self {
        Self
    }

    /// Columns and rows for `count` nodes
    pub fn dimensions(count: usize) -> (usize, usize) {
        if count == 0 {
            return (0, 0);
        }
        let columns = (count as f64).sqrt().ceil() as usize;
        (columns, count.div_ceil(columns))
    }
}

impl LayoutAlgorithm for GridLayout {
    fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap {
        let mut positions = PositionMap::with_capacity(graph.node_count());
        let (columns, rows) = Self::dimensions(graph.node_count());
        debug!(columns, rows, "Computed grid dimensions");

        for (index, node) in graph.nodes().enumerate() {
            let (row, column) = (index / columns, index % columns);
            let x = config.slot(Axis::Horizontal, column, columns);
            let y = config.slot(Axis::Vertical, row, rows);
            trace!(node_id = %node.id, row, column, "Placing grid node");
            positions.place(node, Point::new(x, y));
        }

        positions
    }

    fn name(&self) -> &'static str {
        "grid"
    }
}

//! Flow layout
//!
//! Left-to-right columns by traversal level. Every node without incoming
//! connections starts at level 0; levels spread breadth-first along
//! outgoing connections, and a node keeps the first level it is reached at.

use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::core::{Axis, DiagramGraph, LayoutAlgorithm, LayoutConfig, Point, PositionMap};

/// Columnar layout for sequential processes
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowLayout;

impl FlowLayout {
    pub fn new() -> Self {
        Self
    }

    /// Level of every node, indexed like the graph's nodes
    ///
    /// Nodes unreachable from any root (including every node of a pure
    /// cycle) stay at level 0.
    pub fn assign_levels(graph: &DiagramGraph<'_>) -> Vec<usize> {
        let mut levels: Vec<Option<usize>> = vec![None; graph.node_count()];
        let mut queue = VecDeque::new();

        for root in graph.source_nodes() {
            levels[root] = Some(0);
            queue.push_back((root, 0));
        }

        while let Some((index, level)) = queue.pop_front() {
            for &next in graph.successors(index) {
                if levels[next].is_none() {
                    levels[next] = Some(level + 1);
                    queue.push_back((next, level + 1));
                }
            }
        }

        levels.into_iter().map(|l| l.unwrap_or(0)).collect()
    }
}

impl LayoutAlgorithm for FlowLayout {
    fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap {
        let mut positions = PositionMap::with_capacity(graph.node_count());
        if graph.is_empty() {
            return positions;
        }

        let levels = Self::assign_levels(graph);
        let level_count = levels.iter().max().map_or(0, |&m| m + 1);
        let mut columns: Vec<Vec<usize>> = vec![Vec::new(); level_count];
        for (index, &level) in levels.iter().enumerate() {
            columns[level].push(index);
        }
        debug!(level_count, "Assigned flow levels");

        for (column, members) in columns.iter().enumerate() {
            let x = config.slot(Axis::Horizontal, column, level_count);
            for (row, &index) in members.iter().enumerate() {
                let y = config.slot(Axis::Vertical, row, members.len());
                let node = graph.node(index);
                trace!(node_id = %node.id, column, row, "Placing flow node");
                positions.place(node, Point::new(x, y));
            }
        }

        positions
    }

    fn name(&self) -> &'static str {
        "flow"
    }
}

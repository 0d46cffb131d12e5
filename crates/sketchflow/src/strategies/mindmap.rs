//! Mind-map layout
//!
//! The first node is the central topic. Remaining nodes alternate between a
//! left and a right branch and are spread down each branch evenly.

use tracing::{debug, trace};

use crate::core::{Axis, DiagramGraph, LayoutAlgorithm, LayoutConfig, Point, PositionMap};

/// Two-branch layout around a central topic
#[derive(Debug, Clone, Copy, Default)]
pub struct MindmapLayout;

impl MindmapLayout {
    pub fn new() -> Self {
        Self
    }

    /// Horizontal distance from the center to each branch, kept inside the margin
    pub fn branch_offset(config: &LayoutConfig) -> f64 {
        let room = config.center().x - config.effective_margin();
        config.branch_offset.min(room).max(0.0)
    }
}

impl LayoutAlgorithm for MindmapLayout {
    fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap {
        let mut positions = PositionMap::with_capacity(graph.node_count());
        if graph.is_empty() {
            return positions;
        }

        let center = config.center();
        positions.place(graph.node(0), center);

        // Remaining node i (0-based after the center) is left when even
        let (left, right): (Vec<_>, Vec<_>) = graph
            .nodes()
            .skip(1)
            .enumerate()
            .partition(|(i, _)| i % 2 == 0);

        let offset = Self::branch_offset(config);
        debug!(left = left.len(), right = right.len(), offset, "Split mind-map branches");

        for (branch, x) in [(&left, center.x - offset), (&right, center.x + offset)] {
            for (slot, (_, node)) in branch.iter().enumerate() {
                let y = config.slot(Axis::Vertical, slot, branch.len());
                trace!(node_id = %node.id, x, y, "Placing branch node");
                positions.place(node, Point::new(x, y));
            }
        }

        positions
    }

    fn name(&self) -> &'static str {
        "mindmap"
    }
}

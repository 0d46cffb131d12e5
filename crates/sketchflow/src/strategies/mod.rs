//! Layout strategy implementations
//!
//! Each strategy is a unit struct implementing [`LayoutAlgorithm`]. The set
//! is closed: [`LayoutStrategy`] names them and dispatches by `match`.

pub mod flow;
pub mod grid;
pub mod mindmap;
pub mod radial;
pub mod timeline;
pub mod tree;

pub use flow::*;
pub use grid::*;
pub use mindmap::*;
pub use radial::*;
pub use timeline::*;
pub use tree::*;

use tracing::{debug, span, Level};

use crate::core::{
    DiagramGraph, DiagramSpec, LayoutAlgorithm, LayoutConfig, LayoutStrategy, PositionMap,
};

impl LayoutStrategy {
    /// The algorithm implementing this strategy
    pub fn algorithm(&self) -> &'static dyn LayoutAlgorithm {
        match self {
            LayoutStrategy::Flow => &FlowLayout,
            LayoutStrategy::Tree => &TreeLayout,
            LayoutStrategy::Radial => &RadialLayout,
            LayoutStrategy::Grid => &GridLayout,
            LayoutStrategy::Mindmap => &MindmapLayout,
            LayoutStrategy::Timeline => &TimelineLayout,
        }
    }

    /// Lay out a resolved graph with this strategy
    pub fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap {
        self.algorithm().layout(graph, config)
    }
}

/// Position every node of a spec using the strategy it names
///
/// Never fails: dangling connections are ignored, duplicate ids keep their
/// first occurrence, and an empty spec yields an empty map.
pub fn compute_layout(spec: &DiagramSpec, config: &LayoutConfig) -> PositionMap {
    let graph = DiagramGraph::new(spec);
    let layout_span = span!(
        Level::INFO,
        "layout",
        strategy = spec.layout.as_str(),
        node_count = graph.node_count(),
        edge_count = graph.edge_count()
    );
    let _enter = layout_span.enter();

    let positions = spec.layout.layout(&graph, config);
    debug!(positioned = positions.len(), "Layout completed");
    positions
}

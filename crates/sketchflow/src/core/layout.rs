//! Core layout trait and its output
//!
//! Every layout strategy turns a [`DiagramGraph`] into a [`PositionMap`]
//! holding exactly one entry per unique node.

use serde::Serialize;
use std::collections::HashMap;

use super::config::LayoutConfig;
use super::geometry::{Point, PositionedNode};
use super::graph::DiagramGraph;
use super::text::resolve_node_size;
use super::types::DiagramNode;

/// Core trait for layout algorithms
///
/// Implementations are pure: the same graph and config always produce the
/// same positions, and no input makes them fail.
///
/// # Example
/// ```
/// use sketchflow::core::{DiagramGraph, DiagramNode, DiagramSpec, LayoutAlgorithm, LayoutConfig, LayoutStrategy};
/// use sketchflow::strategies::GridLayout;
///
/// let spec = DiagramSpec::new(LayoutStrategy::Grid).with_node(DiagramNode::new("a", "A"));
/// let graph = DiagramGraph::new(&spec);
/// let positions = GridLayout.layout(&graph, &LayoutConfig::default());
/// assert_eq!(positions.len(), 1);
/// ```
pub trait LayoutAlgorithm: Send + Sync {
    /// Assign a position and size to every node in the graph
    fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap;

    /// Get the name of this layout algorithm
    fn name(&self) -> &'static str;
}

/// Insertion-ordered map from node id to its laid-out box
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PositionMap {
    entries: Vec<PositionedNode>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Place a node at a center point, sizing it from its label
    ///
    /// A node that is already placed keeps its first position.
    pub fn place(&mut self, node: &DiagramNode, center: Point) {
        if self.index.contains_key(&node.id) {
            return;
        }
        let size = resolve_node_size(node);
        self.index.insert(node.id.clone(), self.entries.len());
        self.entries
            .push(PositionedNode::new(node.id.clone(), center, size));
    }

    /// Get a positioned node by id
    pub fn get(&self, id: &str) -> Option<&PositionedNode> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over positioned nodes in placement order
    pub fn iter(&self) -> impl Iterator<Item = &PositionedNode> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PositionMap {
    type Item = &'a PositionedNode;
    type IntoIter = std::slice::Iter<'a, PositionedNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Resolved graph view over a diagram spec
//!
//! Layout strategies never look at raw connection ids. They work on this
//! view, where every node has a dense index in spec order and every
//! connection has been resolved to a pair of indices. Connections that
//! reference unknown ids are dropped here, once, for every strategy.

use std::collections::HashMap;
use tracing::{debug, trace};

use super::types::{DiagramNode, DiagramSpec};

/// Index-based adjacency view of a [`DiagramSpec`]
#[derive(Debug)]
pub struct DiagramGraph<'a> {
    /// Unique nodes in spec order (first occurrence of an id wins)
    nodes: Vec<&'a DiagramNode>,
    /// Node index by id
    index: HashMap<&'a str, usize>,
    /// Connections whose endpoints both resolved
    edge_count: usize,
    /// Outgoing neighbours per node, in connection order
    successors: Vec<Vec<usize>>,
    /// Incoming connection count per node
    in_degree: Vec<usize>,
    /// Connections dropped for referencing unknown nodes
    dropped: usize,
}

impl<'a> DiagramGraph<'a> {
    /// Build the graph view for a spec
    pub fn new(spec: &'a DiagramSpec) -> Self {
        let mut nodes = Vec::with_capacity(spec.nodes.len());
        let mut index = HashMap::with_capacity(spec.nodes.len());
        for node in &spec.nodes {
            if index.contains_key(node.id.as_str()) {
                debug!(node_id = %node.id, "Duplicate node id ignored");
                continue;
            }
            index.insert(node.id.as_str(), nodes.len());
            nodes.push(node);
        }

        let mut edge_count = 0;
        let mut successors = vec![Vec::new(); nodes.len()];
        let mut in_degree = vec![0; nodes.len()];
        let mut dropped = 0;
        for connection in &spec.connections {
            match (
                index.get(connection.from.as_str()),
                index.get(connection.to.as_str()),
            ) {
                (Some(&from), Some(&to)) => {
                    edge_count += 1;
                    successors[from].push(to);
                    in_degree[to] += 1;
                }
                _ => {
                    trace!(
                        from = %connection.from,
                        to = %connection.to,
                        "Dropping connection with unknown endpoint"
                    );
                    dropped += 1;
                }
            }
        }

        debug!(
            node_count = nodes.len(),
            edge_count,
            dropped,
            "Built diagram graph"
        );

        Self {
            nodes,
            index,
            edge_count,
            successors,
            in_degree,
            dropped,
        }
    }

    /// Get the number of unique nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of resolved connections
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of connections dropped for dangling endpoints
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Node at an index
    pub fn node(&self, index: usize) -> &'a DiagramNode {
        self.nodes[index]
    }

    /// Iterate over unique nodes in spec order
    pub fn nodes(&self) -> impl Iterator<Item = &'a DiagramNode> + '_ {
        self.nodes.iter().copied()
    }

    /// Look up a node index by id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Indices this node points to, in connection order
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// Number of resolved connections ending at this node
    pub fn in_degree(&self, index: usize) -> usize {
        self.in_degree[index]
    }

    /// Nodes with no incoming connections, in spec order
    pub fn source_nodes(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| self.in_degree[i] == 0)
            .collect()
    }
}

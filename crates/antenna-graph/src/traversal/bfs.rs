//! Lazy breadth-first iterator.
//!
//! Classic queue-based level order. Nodes are marked visited at enqueue
//! time, not at dequeue time, so a node can never sit in the frontier
//! twice.

use std::collections::VecDeque;

use crate::graph::{Graph, NodeId};

/// Breadth-first iterator over the component reachable from a start node.
pub struct BfsIter<'a> {
    graph: &'a Graph,
    frontier: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'a> BfsIter<'a> {
    pub(crate) fn new(graph: &'a Graph, start: NodeId) -> Self {
        debug_assert!(start < graph.node_count(), "start handle out of range");
        let mut visited = vec![false; graph.node_count()];
        visited[start] = true;
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        Self {
            graph,
            frontier,
            visited,
        }
    }
}

impl Iterator for BfsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.frontier.pop_front()?;
        for &neighbor in self.graph.neighbors(current) {
            if !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.frontier.push_back(neighbor);
            }
        }
        Some(current)
    }
}

//! Lazy depth-first iterator.
//!
//! Explicit-stack walk, yielding nodes one at a time in preorder. The
//! explicit stack keeps recursion depth off the call stack, so large
//! graphs traverse safely.

use crate::graph::{Graph, NodeId};

/// Depth-first iterator over the component reachable from a start node.
pub struct DfsIter<'a> {
    graph: &'a Graph,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<'a> DfsIter<'a> {
    pub(crate) fn new(graph: &'a Graph, start: NodeId) -> Self {
        debug_assert!(start < graph.node_count(), "start handle out of range");
        Self {
            graph,
            stack: vec![start],
            visited: vec![false; graph.node_count()],
        }
    }
}

impl Iterator for DfsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let current = self.stack.pop()?;
            if self.visited[current] {
                continue;
            }
            self.visited[current] = true;

            // Push in reverse so neighbors expand in adjacency order.
            for &neighbor in self.graph.neighbors(current).iter().rev() {
                if !self.visited[neighbor] {
                    self.stack.push(neighbor);
                }
            }

            return Some(current);
        }
    }
}

//! Graph traversal engine.
//!
//! Depth-first and breadth-first walks over the antenna graph, exposed as
//! restartable lazy iterators. Each iterator allocates a fresh visited
//! buffer when constructed, so every walk starts from a clean slate and a
//! graph can be traversed any number of times. Iterators borrow the graph
//! immutably, which rules out structural mutation for the duration of a
//! walk.
//!
//! Every reachable node is yielded exactly once, in engine-determined
//! order: DFS is preorder with neighbors expanded in adjacency order, BFS
//! is level order with nodes marked visited at enqueue time.

mod bfs;
mod dfs;

pub use bfs::BfsIter;
pub use dfs::DfsIter;

use crate::graph::{Graph, NodeId};

impl Graph {
    /// Depth-first walk from `start`.
    ///
    /// `start` must be a handle from this graph.
    #[must_use]
    pub fn dfs(&self, start: NodeId) -> DfsIter<'_> {
        DfsIter::new(self, start)
    }

    /// Breadth-first walk from `start`.
    ///
    /// `start` must be a handle from this graph.
    #[must_use]
    pub fn bfs(&self, start: NodeId) -> BfsIter<'_> {
        BfsIter::new(self, start)
    }

    /// Collected depth-first visit order.
    #[must_use]
    pub fn dfs_order(&self, start: NodeId) -> Vec<NodeId> {
        self.dfs(start).collect()
    }

    /// Collected breadth-first visit order.
    #[must_use]
    pub fn bfs_order(&self, start: NodeId) -> Vec<NodeId> {
        self.bfs(start).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    /// Two frequency groups: four `A` corners and two `B` cells.
    fn two_component_graph() -> Graph {
        let mut g = Graph::new();
        g.add_node('A', 0, 0);
        g.add_node('A', 2, 0);
        g.add_node('A', 0, 2);
        g.add_node('A', 2, 2);
        g.add_node('B', 1, 1);
        g.add_node('B', 1, 2);
        g.connect_same_frequency();
        g
    }

    #[test]
    fn test_dfs_visits_component_exactly_once() {
        let g = two_component_graph();
        let start = g.find_node(0, 0).unwrap();
        let mut order = g.dfs_order(start);
        assert_eq!(order.len(), 4);
        order.sort_unstable();
        order.dedup();
        assert_eq!(order, vec![0, 1, 2, 3], "each A node visited exactly once");
    }

    #[test]
    fn test_bfs_visits_component_exactly_once() {
        let g = two_component_graph();
        let start = g.find_node(0, 0).unwrap();
        let mut order = g.bfs_order(start);
        assert_eq!(order.len(), 4);
        order.sort_unstable();
        order.dedup();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_traversal_stays_inside_component() {
        let g = two_component_graph();
        let start = g.find_node(1, 1).unwrap();
        for id in g.dfs(start) {
            assert_eq!(g.node(id).frequency, 'B');
        }
        assert_eq!(g.bfs_order(start).len(), 2);
    }

    #[test]
    fn test_traversal_starts_at_start_node() {
        let g = two_component_graph();
        let start = g.find_node(2, 2).unwrap();
        assert_eq!(g.dfs_order(start)[0], start);
        assert_eq!(g.bfs_order(start)[0], start);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let g = two_component_graph();
        let start = g.find_node(0, 0).unwrap();
        assert_eq!(g.bfs_order(start), g.bfs_order(start));
        assert_eq!(g.dfs_order(start), g.dfs_order(start));
    }

    #[test]
    fn test_isolated_node_yields_itself() {
        let mut g = Graph::new();
        let only = g.add_node('Z', 5, 5);
        g.connect_same_frequency();
        assert_eq!(g.dfs_order(only), vec![only]);
        assert_eq!(g.bfs_order(only), vec![only]);
    }

    #[test]
    fn test_cyclic_clique_terminates() {
        // 3-clique contains cycles; the walk must still terminate.
        let mut g = Graph::new();
        g.add_node('C', 0, 0);
        g.add_node('C', 1, 0);
        g.add_node('C', 2, 0);
        g.connect_same_frequency();
        assert_eq!(g.dfs_order(0).len(), 3);
        assert_eq!(g.bfs_order(0).len(), 3);
    }
}

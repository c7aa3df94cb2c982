//! Node store and adjacency builder.
//!
//! The graph is an arena: a dense array of immutable antenna records plus a
//! parallel adjacency table of node indices. Edges are derived data, rebuilt
//! from frequency equality by [`Graph::connect_same_frequency`] — they are
//! never persisted and never edited directly.
//!
//! # Invariant
//!
//! After `connect_same_frequency`, every pair of distinct same-frequency
//! nodes is linked by both directed arcs exactly once. No self-loops, no
//! cross-frequency edges.

use serde::Serialize;
use tracing::debug;

/// Node handle: a dense index into the graph's arena.
///
/// Valid only for the graph that produced it; obtained from
/// [`Graph::add_node`] or [`Graph::find_node`].
pub type NodeId = usize;

/// A labeled point in the grid.
///
/// Coordinates are immutable after creation. Traversal scratch state lives
/// outside the record, so an `Antenna` never changes once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Antenna {
    /// Single-character group label; same-frequency antennas are fully
    /// interconnected.
    pub frequency: char,
    /// Column index (0-based).
    pub x: i32,
    /// Row index (0-based).
    pub y: i32,
}

/// Arena-backed antenna graph.
///
/// Owns all node and edge records. Node order is insertion order, which is
/// the order loaders add nodes and the order all scans observe.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Antenna>,
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an antenna and return its handle.
    ///
    /// Duplicate coordinates are accepted; the standard loaders never
    /// produce them, and lookups resolve to the first match in insertion
    /// order.
    pub fn add_node(&mut self, frequency: char, x: i32, y: i32) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Antenna { frequency, x, y });
        self.adjacency.push(Vec::new());
        id
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Access a node record by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Antenna {
        &self.nodes[id]
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Antenna)> {
        self.nodes.iter().enumerate()
    }

    /// Find the node at the given coordinates.
    ///
    /// Linear scan; returns the first match in insertion order, or `None`
    /// when no antenna occupies the cell.
    #[must_use]
    pub fn find_node(&self, x: i32, y: i32) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.x == x && n.y == y)
    }

    /// Outgoing neighbors of a node, in edge insertion order.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id]
    }

    /// Smallest `(cols, rows)` bounding box covering every node, or `None`
    /// for an empty graph. Nodes at negative coordinates do not extend the
    /// box.
    #[must_use]
    pub fn extent(&self) -> Option<(usize, usize)> {
        if self.nodes.is_empty() {
            return None;
        }
        let max_x = self.nodes.iter().map(|n| n.x).max().unwrap_or(-1);
        let max_y = self.nodes.iter().map(|n| n.y).max().unwrap_or(-1);
        let cols = usize::try_from(max_x + 1).unwrap_or(0);
        let rows = usize::try_from(max_y + 1).unwrap_or(0);
        Some((cols, rows))
    }

    /// Connect every pair of distinct same-frequency nodes.
    ///
    /// O(n²) ordered-pair scan with an O(degree) duplicate check per pair.
    /// Idempotent: calling it again on an already connected graph adds
    /// nothing. Existing edges are never cleared.
    pub fn connect_same_frequency(&mut self) {
        let n = self.nodes.len();
        let mut added = 0usize;
        for a in 0..n {
            for b in 0..n {
                if a == b || self.nodes[a].frequency != self.nodes[b].frequency {
                    continue;
                }
                if !self.adjacency[a].contains(&b) {
                    self.adjacency[a].push(b);
                    added += 1;
                }
            }
        }
        debug!(nodes = n, edges_added = added, "rebuilt same-frequency adjacency");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_corner_graph() -> Graph {
        // A . A
        // . . .
        // A . A
        let mut g = Graph::new();
        g.add_node('A', 0, 0);
        g.add_node('A', 2, 0);
        g.add_node('A', 0, 2);
        g.add_node('A', 2, 2);
        g.connect_same_frequency();
        g
    }

    #[test]
    fn test_new_graph_is_empty() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.extent(), None);
    }

    #[test]
    fn test_add_node_preserves_insertion_order() {
        let mut g = Graph::new();
        let a = g.add_node('A', 0, 0);
        let b = g.add_node('B', 1, 0);
        assert_eq!((a, b), (0, 1));
        let order: Vec<char> = g.nodes().map(|(_, n)| n.frequency).collect();
        assert_eq!(order, vec!['A', 'B']);
    }

    #[test]
    fn test_find_node_first_match_in_order() {
        let mut g = Graph::new();
        let first = g.add_node('A', 1, 1);
        g.add_node('B', 1, 1); // duplicate coordinates are accepted
        assert_eq!(g.find_node(1, 1), Some(first));
        assert_eq!(g.find_node(9, 9), None);
    }

    #[test]
    fn test_connect_builds_full_clique() {
        let g = four_corner_graph();
        let total: usize = g.nodes().map(|(id, _)| g.neighbors(id).len()).sum();
        assert_eq!(total, 12, "4 same-frequency nodes form 12 directed arcs");
        for (id, _) in g.nodes() {
            assert_eq!(g.neighbors(id).len(), 3);
            assert!(!g.neighbors(id).contains(&id), "no self-loops");
        }
    }

    #[test]
    fn test_connect_is_symmetric() {
        let g = four_corner_graph();
        for (a, _) in g.nodes() {
            for &b in g.neighbors(a) {
                assert!(g.neighbors(b).contains(&a), "{a} -> {b} missing reverse arc");
            }
        }
    }

    #[test]
    fn test_connect_is_idempotent() {
        let mut g = four_corner_graph();
        g.connect_same_frequency();
        let total: usize = g.nodes().map(|(id, _)| g.neighbors(id).len()).sum();
        assert_eq!(total, 12, "reconnecting must not duplicate edges");
    }

    #[test]
    fn test_connect_ignores_other_frequencies() {
        let mut g = Graph::new();
        let a = g.add_node('A', 0, 0);
        let b = g.add_node('B', 1, 0);
        g.connect_same_frequency();
        assert!(g.neighbors(a).is_empty());
        assert!(g.neighbors(b).is_empty());
    }

    #[test]
    fn test_extent_covers_all_nodes() {
        let g = four_corner_graph();
        assert_eq!(g.extent(), Some((3, 3)));
    }
}

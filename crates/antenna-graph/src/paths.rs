//! Exhaustive simple-path enumeration.
//!
//! Backtracking search reporting every simple path (no repeated node)
//! between two nodes. The visited set and path buffer are owned by the
//! search, not the nodes, so the graph itself stays immutable throughout.
//!
//! Recursion depth is bounded by the node count, since paths are simple.

use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Enumerate every simple path from `origin` to `destination`.
///
/// `on_path` receives each complete path as a slice of node handles,
/// origin first. When `origin == destination` the single trivial path
/// `[origin]` is reported; when no path exists `on_path` is never called.
///
/// Both handles must come from `graph`.
pub fn find_all_paths<F>(graph: &Graph, origin: NodeId, destination: NodeId, mut on_path: F)
where
    F: FnMut(&[NodeId]),
{
    let mut visited = vec![false; graph.node_count()];
    let mut path = Vec::with_capacity(graph.node_count());
    let mut found = 0usize;
    walk(
        graph,
        origin,
        destination,
        &mut visited,
        &mut path,
        &mut |p: &[NodeId]| {
            found += 1;
            on_path(p);
        },
    );
    debug!(origin, destination, paths = found, "path enumeration complete");
}

/// Collect every simple path from `origin` to `destination`.
#[must_use]
pub fn collect_all_paths(graph: &Graph, origin: NodeId, destination: NodeId) -> Vec<Vec<NodeId>> {
    let mut paths = Vec::new();
    find_all_paths(graph, origin, destination, |p| paths.push(p.to_vec()));
    paths
}

fn walk<F>(
    graph: &Graph,
    current: NodeId,
    destination: NodeId,
    visited: &mut [bool],
    path: &mut Vec<NodeId>,
    on_path: &mut F,
) where
    F: FnMut(&[NodeId]),
{
    path.push(current);
    visited[current] = true;

    if current == destination {
        on_path(path);
    } else {
        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                walk(graph, neighbor, destination, visited, path, on_path);
            }
        }
    }

    // Backtrack: restore state for sibling branches.
    path.pop();
    visited[current] = false;
}

//! Antenna graph engine.
//!
//! Models a 2-D grid of frequency-labeled antennas as a graph: every pair
//! of antennas sharing a frequency is connected, forming a clique per
//! frequency group. On top of that derived connectivity the crate offers
//! traversal, exhaustive simple-path enumeration, a geometric intersection
//! predicate, and two on-disk representations.
//!
//! # Architecture
//!
//! - **graph**: arena node store and the same-frequency adjacency builder
//! - **traversal**: lazy DFS and BFS iterators
//! - **paths**: backtracking simple-path enumeration
//! - **harmonic**: alignment + 2:1 origin-distance intersection finder
//! - **codec**: grid-text and fixed-layout binary persistence
//! - **error**: typed errors with [`GraphResult`]
//!
//! Everything is single-threaded and synchronous; operations are bounded
//! by grid size and run to completion.
//!
//! # Example
//!
//! ```
//! use antenna_graph::codec::grid::parse_grid;
//!
//! let graph = parse_grid("A.A\n...\nA.A\n");
//! assert_eq!(graph.node_count(), 4);
//!
//! let start = graph.find_node(0, 0).unwrap();
//! assert_eq!(graph.bfs_order(start).len(), 4);
//! ```

pub mod codec;
pub mod error;
pub mod graph;
pub mod harmonic;
pub mod paths;
pub mod traversal;

pub use error::{GraphError, GraphResult};
pub use graph::{Antenna, Graph, NodeId};
pub use harmonic::{collect_intersections, find_intersections, HARMONIC_EPSILON};
pub use paths::{collect_all_paths, find_all_paths};
pub use traversal::{BfsIter, DfsIter};

//! On-disk representations of the antenna graph.
//!
//! Two formats materialize a graph:
//!
//! - **Grid text** ([`grid`]): ASCII matrix, `.` for empty cells, any other
//!   character for an antenna whose frequency is that character.
//! - **Binary** ([`binary`]): fixed little-endian layout of node records.
//!
//! Neither format stores edges. Adjacency is derived data and both loaders
//! rebuild it from frequency equality after the nodes are in.

pub mod binary;
pub mod grid;

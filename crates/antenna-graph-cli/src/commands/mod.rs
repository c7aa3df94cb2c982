//! CLI subcommands.
//!
//! Each subcommand loads its input graph, calls one engine entry point,
//! and formats the result for the console (or as JSON with `--json`).

mod convert;
mod intersect;
mod render;
mod traverse;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use antenna_graph::codec::{binary, grid};
use antenna_graph::{Graph, GraphError, GraphResult, NodeId};
use clap::Subcommand;

/// Grid coordinates given as `X,Y`.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y coordinates, got {s:?}"))?;
        let x = x.trim().parse().map_err(|_| format!("invalid column {x:?}"))?;
        let y = y.trim().parse().map_err(|_| format!("invalid row {y:?}"))?;
        Ok(Self { x, y })
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the antenna matrix
    Show {
        /// Input graph file
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Treat the input as the binary format instead of grid text
        #[arg(long)]
        binary: bool,
        /// Rows to render (default: graph extent)
        #[arg(long)]
        rows: Option<usize>,
        /// Columns to render (default: graph extent)
        #[arg(long)]
        cols: Option<usize>,
    },
    /// Render the antenna matrix as per-cell bit patterns
    ShowBits {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(long)]
        binary: bool,
        #[arg(long)]
        rows: Option<usize>,
        #[arg(long)]
        cols: Option<usize>,
    },
    /// List every antenna with its adjacency
    Edges {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(long)]
        binary: bool,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Depth-first traversal from an antenna
    Dfs {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(long)]
        binary: bool,
        /// Start antenna coordinates
        #[arg(long, value_name = "X,Y")]
        at: Point,
        #[arg(long)]
        json: bool,
    },
    /// Breadth-first traversal from an antenna
    Bfs {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(long)]
        binary: bool,
        /// Start antenna coordinates
        #[arg(long, value_name = "X,Y")]
        at: Point,
        #[arg(long)]
        json: bool,
    },
    /// Enumerate every simple path between two antennas
    Paths {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(long)]
        binary: bool,
        /// Origin antenna coordinates
        #[arg(long, value_name = "X,Y")]
        from: Point,
        /// Destination antenna coordinates
        #[arg(long, value_name = "X,Y")]
        to: Point,
        #[arg(long)]
        json: bool,
    },
    /// List harmonic intersections between two frequency groups
    Intersections {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(long)]
        binary: bool,
        /// First frequency label
        #[arg(short = 'a', long, value_name = "CHAR")]
        freq_a: char,
        /// Second frequency label
        #[arg(short = 'b', long, value_name = "CHAR")]
        freq_b: char,
        #[arg(long)]
        json: bool,
    },
    /// Convert a grid-text file to the binary format
    Convert {
        /// Input grid-text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Output binary file
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
}

/// Dispatch a parsed subcommand.
pub fn run(command: Command) -> GraphResult<()> {
    match command {
        Command::Show {
            input,
            binary,
            rows,
            cols,
        } => render::show(&load(&input, binary)?, rows, cols, false),
        Command::ShowBits {
            input,
            binary,
            rows,
            cols,
        } => render::show(&load(&input, binary)?, rows, cols, true),
        Command::Edges {
            input,
            binary,
            json,
        } => render::edges(&load(&input, binary)?, json),
        Command::Dfs {
            input,
            binary,
            at,
            json,
        } => traverse::traverse(&load(&input, binary)?, at, traverse::Strategy::DepthFirst, json),
        Command::Bfs {
            input,
            binary,
            at,
            json,
        } => traverse::traverse(&load(&input, binary)?, at, traverse::Strategy::BreadthFirst, json),
        Command::Paths {
            input,
            binary,
            from,
            to,
            json,
        } => traverse::paths(&load(&input, binary)?, from, to, json),
        Command::Intersections {
            input,
            binary,
            freq_a,
            freq_b,
            json,
        } => intersect::intersections(&load(&input, binary)?, freq_a, freq_b, json),
        Command::Convert { input, output } => convert::convert(&input, &output),
    }
}

/// Load a graph from either on-disk representation.
fn load(input: &Path, binary_format: bool) -> GraphResult<Graph> {
    tracing::debug!(?input, binary_format, "loading graph");
    if binary_format {
        binary::load_binary(input)
    } else {
        grid::load_grid(input)
    }
}

/// Resolve coordinates to a node handle, or fail with `NodeNotFound`.
fn resolve(graph: &Graph, at: Point) -> GraphResult<NodeId> {
    graph
        .find_node(at.x, at.y)
        .ok_or(GraphError::NodeNotFound { x: at.x, y: at.y })
}

/// Compact antenna display: `A(0,0)`.
fn describe(graph: &Graph, id: NodeId) -> String {
    let node = graph.node(id);
    format!("{}({},{})", node.frequency, node.x, node.y)
}

/// Map a serde_json failure into the engine error type.
fn json_error(err: serde_json::Error) -> GraphError {
    GraphError::Serialization(err.to_string())
}

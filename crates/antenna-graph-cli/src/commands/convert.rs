//! Grid-text to binary conversion command.

use std::path::Path;

use antenna_graph::codec::{binary, grid};
use antenna_graph::GraphResult;

/// Load a grid-text file and write it out in the binary format.
pub fn convert(input: &Path, output: &Path) -> GraphResult<()> {
    let graph = grid::load_grid(input)?;
    binary::save_binary(&graph, output)?;
    println!(
        "wrote {} antennas to {}",
        graph.node_count(),
        output.display()
    );
    Ok(())
}

//! Matrix and adjacency rendering commands.

use antenna_graph::codec::grid;
use antenna_graph::{Antenna, Graph, GraphResult};

use super::{describe, json_error};

/// Print the antenna matrix, plain or as per-cell bit patterns.
///
/// Dimensions default to the graph's extent; explicit `--rows`/`--cols`
/// clip or pad the window.
pub fn show(graph: &Graph, rows: Option<usize>, cols: Option<usize>, bits: bool) -> GraphResult<()> {
    let (extent_cols, extent_rows) = graph.extent().unwrap_or((0, 0));
    let rows = rows.unwrap_or(extent_rows);
    let cols = cols.unwrap_or(extent_cols);

    let rendered = if bits {
        grid::render_grid_bits(graph, rows, cols)
    } else {
        grid::render_grid(graph, rows, cols)
    };
    print!("{rendered}");
    Ok(())
}

/// List every antenna followed by its outgoing adjacency.
pub fn edges(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        let records: Vec<serde_json::Value> = graph
            .nodes()
            .map(|(id, node)| {
                let neighbors: Vec<&Antenna> = graph
                    .neighbors(id)
                    .iter()
                    .map(|&n| graph.node(n))
                    .collect();
                serde_json::json!({ "antenna": node, "neighbors": neighbors })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&records).map_err(json_error)?
        );
        return Ok(());
    }

    for (id, node) in graph.nodes() {
        let neighbors: Vec<String> = graph
            .neighbors(id)
            .iter()
            .map(|&n| describe(graph, n))
            .collect();
        println!(
            "Antenna {} ({},{}) -> {}",
            node.frequency,
            node.x,
            node.y,
            neighbors.join(" ")
        );
    }
    Ok(())
}

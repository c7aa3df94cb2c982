//! Harmonic intersection command.

use antenna_graph::{collect_intersections, Graph, GraphResult};

use super::{describe, json_error};

/// List every aligned, harmonic pair between two frequency groups.
pub fn intersections(graph: &Graph, freq_a: char, freq_b: char, json: bool) -> GraphResult<()> {
    let pairs = collect_intersections(graph, freq_a, freq_b);

    if json {
        let records: Vec<serde_json::Value> = pairs
            .iter()
            .map(|&(a, b)| serde_json::json!({ "a": graph.node(a), "b": graph.node(b) }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&records).map_err(json_error)?
        );
        return Ok(());
    }

    for (a, b) in pairs {
        println!("{} and {}", describe(graph, a), describe(graph, b));
    }
    Ok(())
}

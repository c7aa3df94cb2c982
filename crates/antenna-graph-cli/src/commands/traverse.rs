//! Traversal and path enumeration commands.

use antenna_graph::{collect_all_paths, Antenna, Graph, GraphResult};

use super::{describe, json_error, resolve, Point};

/// Which walk order to use.
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

/// Walk the component reachable from `at` and print each antenna once,
/// in visit order.
pub fn traverse(graph: &Graph, at: Point, strategy: Strategy, json: bool) -> GraphResult<()> {
    let start = resolve(graph, at)?;
    let order = match strategy {
        Strategy::DepthFirst => graph.dfs_order(start),
        Strategy::BreadthFirst => graph.bfs_order(start),
    };

    if json {
        let nodes: Vec<&Antenna> = order.iter().map(|&id| graph.node(id)).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&nodes).map_err(json_error)?
        );
        return Ok(());
    }

    for id in order {
        let node = graph.node(id);
        println!("Antenna {} ({},{})", node.frequency, node.x, node.y);
    }
    Ok(())
}

/// Print every simple path between two antennas, one per line.
pub fn paths(graph: &Graph, from: Point, to: Point, json: bool) -> GraphResult<()> {
    let origin = resolve(graph, from)?;
    let destination = resolve(graph, to)?;
    let all = collect_all_paths(graph, origin, destination);

    if json {
        let records: Vec<Vec<&Antenna>> = all
            .iter()
            .map(|path| path.iter().map(|&id| graph.node(id)).collect())
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&records).map_err(json_error)?
        );
        return Ok(());
    }

    for path in &all {
        let line: Vec<String> = path.iter().map(|&id| describe(graph, id)).collect();
        println!("{}", line.join(" -> "));
    }
    Ok(())
}

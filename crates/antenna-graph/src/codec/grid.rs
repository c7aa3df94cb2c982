//! Grid-text loader and renderer.
//!
//! Each non-`.` character at column `x` of line `y` becomes an antenna with
//! that character as frequency, both coordinates 0-based. Blank lines carry
//! no antennas but still advance the row counter. A trailing `\r` (CRLF
//! input) is not part of the grid.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::GraphResult;
use crate::graph::Graph;

/// Parse a grid from in-memory text and build its adjacency.
#[must_use]
pub fn parse_grid(text: &str) -> Graph {
    let mut graph = Graph::new();
    for (y, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        for (x, cell) in line.chars().enumerate() {
            if cell != '.' {
                graph.add_node(cell, x as i32, y as i32);
            }
        }
    }
    graph.connect_same_frequency();
    graph
}

/// Load a graph from a grid-text file.
///
/// # Errors
///
/// Returns `GraphError::Io` when the file cannot be opened or read. Parsing
/// itself cannot fail: every character is either `.` or a frequency label.
pub fn load_grid<P: AsRef<Path>>(path: P) -> GraphResult<Graph> {
    let text = fs::read_to_string(path)?;
    let graph = parse_grid(&text);
    debug!(nodes = graph.node_count(), "loaded grid text");
    Ok(graph)
}

/// Render the graph back into grid text of the given dimensions.
///
/// Cells without an antenna render as `.`; nodes outside the requested
/// window are clipped. Rows are newline-terminated.
#[must_use]
pub fn render_grid(graph: &Graph, rows: usize, cols: usize) -> String {
    let cells = build_matrix(graph, rows, cols);
    let mut out = String::with_capacity(rows * (cols + 1));
    for row in cells {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Render the grid with each cell expanded to the 8-bit pattern of its
/// character, cells separated by a space.
#[must_use]
pub fn render_grid_bits(graph: &Graph, rows: usize, cols: usize) -> String {
    let cells = build_matrix(graph, rows, cols);
    let mut out = String::with_capacity(rows * cols * 9);
    for row in cells {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let byte = (u32::from(*cell) & 0xFF) as u8;
            for bit in (0..8).rev() {
                out.push(if (byte >> bit) & 1 == 1 { '1' } else { '0' });
            }
        }
        out.push('\n');
    }
    out
}

fn build_matrix(graph: &Graph, rows: usize, cols: usize) -> Vec<Vec<char>> {
    let mut cells = vec![vec!['.'; cols]; rows];
    for (_, node) in graph.nodes() {
        if node.x < 0 || node.y < 0 {
            continue;
        }
        let (x, y) = (node.x as usize, node.y as usize);
        if y < rows && x < cols {
            cells[y][x] = node.frequency;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORNERS: &str = "A.A\n...\nA.A\n";

    #[test]
    fn test_parse_counts_non_empty_cells() {
        let g = parse_grid(CORNERS);
        assert_eq!(g.node_count(), 4);
        for (x, y) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
            let id = g.find_node(x, y).expect("corner antenna missing");
            assert_eq!(g.node(id).frequency, 'A');
        }
    }

    #[test]
    fn test_parse_builds_adjacency() {
        let g = parse_grid(CORNERS);
        let total: usize = g.nodes().map(|(id, _)| g.neighbors(id).len()).sum();
        assert_eq!(total, 12);
        let start = g.find_node(0, 0).unwrap();
        assert_eq!(g.bfs_order(start).len(), 4);
    }

    #[test]
    fn test_blank_line_advances_row() {
        let g = parse_grid("A\n\nA\n");
        assert_eq!(g.node_count(), 2);
        assert!(g.find_node(0, 0).is_some());
        assert!(g.find_node(0, 2).is_some());
        assert!(g.find_node(0, 1).is_none());
    }

    #[test]
    fn test_crlf_input() {
        let g = parse_grid("A.B\r\n.C.\r\n");
        assert_eq!(g.node_count(), 3);
        assert!(g.find_node(2, 0).is_some());
        assert!(g.find_node(3, 0).is_none(), "\\r must not become a node");
    }

    #[test]
    fn test_empty_text_yields_empty_graph() {
        let g = parse_grid("");
        assert!(g.is_empty());
    }

    #[test]
    fn test_render_round_trips_rectangular_grid() {
        let g = parse_grid(CORNERS);
        let (cols, rows) = g.extent().unwrap();
        assert_eq!(render_grid(&g, rows, cols), CORNERS);
    }

    #[test]
    fn test_render_clips_out_of_window_nodes() {
        let g = parse_grid(CORNERS);
        assert_eq!(render_grid(&g, 1, 1), "A\n");
    }

    #[test]
    fn test_render_bits_known_patterns() {
        let g = parse_grid("A.\n");
        // 'A' = 0x41, '.' = 0x2E
        assert_eq!(render_grid_bits(&g, 1, 2), "01000001 00101110\n");
    }
}

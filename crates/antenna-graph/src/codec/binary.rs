//! Fixed-layout binary serializer and deserializer.
//!
//! # Binary Format
//!
//! All scalars little-endian:
//!
//! ```text
//! i32          node_count
//! repeat node_count times:
//!   u8         frequency
//!   i32        x
//!   i32        y
//! ```
//!
//! Edges are never written; the loader rebuilds adjacency from frequency
//! equality once every record is in. A truncated or malformed payload
//! fails the whole load — the partially built graph is discarded, never
//! returned.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Serialize the graph's node records to a writer.
///
/// Records are written in the graph's current node order.
///
/// # Errors
///
/// `GraphError::UnencodableFrequency` when a frequency label does not fit
/// the one-byte encoding; `GraphError::Io` on write failure.
pub fn write_binary<W: Write>(graph: &Graph, mut writer: W) -> GraphResult<()> {
    let count = i32::try_from(graph.node_count())
        .map_err(|_| GraphError::Serialization("node count exceeds i32 range".to_string()))?;
    writer.write_all(&count.to_le_bytes())?;

    for (_, node) in graph.nodes() {
        let label = u8::try_from(u32::from(node.frequency))
            .map_err(|_| GraphError::UnencodableFrequency(node.frequency))?;
        writer.write_all(&[label])?;
        writer.write_all(&node.x.to_le_bytes())?;
        writer.write_all(&node.y.to_le_bytes())?;
    }
    Ok(())
}

/// Deserialize a graph from a reader and rebuild its adjacency.
///
/// # Errors
///
/// `GraphError::CorruptedData` when the payload is structurally invalid
/// (short read against the declared count, negative count);
/// `GraphError::Io` on other read failures.
pub fn read_binary<R: Read>(mut reader: R) -> GraphResult<Graph> {
    let count = read_i32(&mut reader, "node count")?;
    if count < 0 {
        return Err(GraphError::CorruptedData {
            location: "node count".to_string(),
            details: format!("negative node count {count}"),
        });
    }

    let mut graph = Graph::new();
    for index in 0..count {
        let location = format!("node record {index}");
        let mut label = [0u8; 1];
        read_field(&mut reader, &mut label, &location)?;
        let x = read_i32(&mut reader, &location)?;
        let y = read_i32(&mut reader, &location)?;
        graph.add_node(char::from(label[0]), x, y);
    }

    graph.connect_same_frequency();
    Ok(graph)
}

/// Save the graph to a binary file.
pub fn save_binary<P: AsRef<Path>>(graph: &Graph, path: P) -> GraphResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_binary(graph, &mut writer)?;
    writer.flush()?;
    debug!(nodes = graph.node_count(), "saved binary graph");
    Ok(())
}

/// Load a graph from a binary file.
pub fn load_binary<P: AsRef<Path>>(path: P) -> GraphResult<Graph> {
    let reader = BufReader::new(File::open(path)?);
    let graph = read_binary(reader)?;
    debug!(nodes = graph.node_count(), "loaded binary graph");
    Ok(graph)
}

fn read_i32<R: Read>(reader: &mut R, location: &str) -> GraphResult<i32> {
    let mut buf = [0u8; 4];
    read_field(reader, &mut buf, location)?;
    Ok(i32::from_le_bytes(buf))
}

fn read_field<R: Read>(reader: &mut R, buf: &mut [u8], location: &str) -> GraphResult<()> {
    reader.read_exact(buf).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            GraphError::CorruptedData {
                location: location.to_string(),
                details: "unexpected end of file".to_string(),
            }
        } else {
            GraphError::Io(err)
        }
    })
}

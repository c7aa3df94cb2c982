//! Error types for antenna graph operations.
//!
//! All fallible operations return [`GraphResult`]; errors are typed with
//! `thiserror` and carry enough context to decide user-visible messaging
//! at the calling layer.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Underlying file open/read/write failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Coordinate lookup miss.
    #[error("no antenna at ({x}, {y})")]
    NodeNotFound { x: i32, y: i32 },

    /// Structurally invalid binary payload (short read, bad header).
    /// The load that detected this is aborted and no graph is returned.
    #[error("corrupted data in {location}: {details}")]
    CorruptedData { location: String, details: String },

    /// Frequency label that does not fit the one-byte on-disk encoding.
    #[error("frequency {0:?} does not fit a single byte")]
    UnencodableFrequency(char),

    /// Serialization failed for a reason other than a malformed payload.
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_display() {
        let err = GraphError::NodeNotFound { x: 3, y: 7 };
        let msg = err.to_string();
        assert!(msg.contains("(3, 7)"));
    }

    #[test]
    fn test_corrupted_data_display() {
        let err = GraphError::CorruptedData {
            location: "node count".to_string(),
            details: "unexpected end of file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node count"));
        assert!(msg.contains("unexpected end of file"));
    }

    #[test]
    fn test_unencodable_frequency_display() {
        let err = GraphError::UnencodableFrequency('λ');
        assert!(err.to_string().contains('λ'));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let graph_err: GraphError = io_err.into();
        assert!(matches!(graph_err, GraphError::Io(_)));
    }
}

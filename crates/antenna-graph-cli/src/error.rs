//! CLI exit code policy.
//!
//! Exit codes:
//! - 0: success
//! - 1: recoverable error (stderr message, caller may retry with fixed input)
//! - 2: corruption — the binary payload is structurally invalid

use std::process::ExitCode;

use antenna_graph::GraphError;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Success.
    Success = 0,
    /// Recoverable error.
    Warning = 1,
    /// Corrupted on-disk data.
    Corruption = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&GraphError> for CliExitCode {
    fn from(err: &GraphError) -> Self {
        match err {
            GraphError::CorruptedData { .. } => CliExitCode::Corruption,
            GraphError::Io(_)
            | GraphError::NodeNotFound { .. }
            | GraphError::UnencodableFrequency(_)
            | GraphError::Serialization(_) => CliExitCode::Warning,
        }
    }
}

/// Map an engine error to the process exit code.
pub fn exit_code_for(err: &GraphError) -> ExitCode {
    CliExitCode::from(err).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupted_data_is_blocking() {
        let err = GraphError::CorruptedData {
            location: "node count".to_string(),
            details: "unexpected end of file".to_string(),
        };
        assert_eq!(CliExitCode::from(&err), CliExitCode::Corruption);
    }

    #[test]
    fn test_missing_antenna_is_recoverable() {
        let err = GraphError::NodeNotFound { x: 1, y: 2 };
        assert_eq!(CliExitCode::from(&err), CliExitCode::Warning);
    }

    #[test]
    fn test_io_error_is_recoverable() {
        let err = GraphError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert_eq!(CliExitCode::from(&err), CliExitCode::Warning);
    }
}

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can terminate a run. Each variant is fatal: the binary
/// reports it and exits with code 1. A filter that matches zero rows is
/// not an error.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("'{}' is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to parse CSV")]
    Parse {
        #[source]
        source: csv::Error,
    },

    #[error("duplicate column '{0}' in header")]
    DuplicateColumn(String),

    #[error("column '{column}' not found; available columns: {}", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

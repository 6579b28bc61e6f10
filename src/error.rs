//! Error types for word-dict.

use std::{collections::TryReserveError, io, path::Path};

use thiserror::Error;

/// Structured error types for word-dict.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid command-line usage.
    #[error("usage: {0}")]
    Usage(String),

    /// A reader needs room for at least one element per chunk.
    #[error("chunk size must be at least one element")]
    ChunkSize,

    /// A chunk buffer could not be allocated.
    #[error("cannot allocate a chunk of {elements} elements")]
    Allocation {
        /// Requested chunk capacity.
        elements: usize,
        /// Underlying allocation failure.
        #[source]
        source: TryReserveError,
    },

    /// I/O error with context.
    #[error("{message}: {path}")]
    Io {
        /// File path where error occurred.
        path: String,
        /// Error description.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A block source failed while filling a chunk.
    #[error("block source failed")]
    Source(#[source] io::Error),

    /// The background fetch thread could not be started.
    #[error("failed to spawn prefetch thread")]
    Spawn(#[source] io::Error),

    /// A mutex was poisoned by a panic in another thread.
    #[error("mutex poisoned by a panicked thread")]
    MutexPoisoned,

    /// JSON serialization error.
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Wraps an `io::Error` raised while opening or reading `path`.
    pub(crate) fn io_at(path: &Path, source: io::Error) -> Self {
        let message = match source.kind() {
            io::ErrorKind::NotFound => "no such file",
            io::ErrorKind::PermissionDenied => "permission denied",
            _ => "failed to open file",
        };

        Self::Io {
            path: path.display().to_string(),
            message: message.to_string(),
            source,
        }
    }
}

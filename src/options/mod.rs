//! Configuration options for building a dictionary.
//!
//! This module provides the [`Options`] struct, a unified container for all
//! word-dict configuration settings.
//!
//! # Structure
//!
//! - **Sort** ([`Sort`]): Result ordering (descending, ascending, unsorted)
//! - **Serialization** ([`Serialization`]): Output format (text, CSV, JSON) and delimiter
//! - **Io** ([`Io`]): I/O strategy (streamed, memory-mapped)
//! - **Performance** ([`Performance`]): Chunk size and capacity tuning
//!
//! # Usage
//!
//! ```
//! use word_dict::{Format, Io, Options, Sort};
//!
//! let options = Options::default();
//! assert_eq!(options.sort(), Sort::Desc);
//!
//! let options = Options::default()
//!     .with_format(Format::Json)
//!     .with_io(Io::MemoryMapped)
//!     .with_chunk_size(4096);
//! assert_eq!(options.io(), Io::MemoryMapped);
//! assert_eq!(options.performance().chunk_size(), 4096);
//! ```
//!
//! # Environment Variables
//!
//! - `WORD_DICT_CHUNK_SIZE`: Bytes per streamed chunk (default: 262144)
//! - `WORD_DICT_IO`: I/O strategy, `streamed` or `mmap` (default: streamed)

pub mod io;
pub mod performance;
pub mod serialization;
pub mod sort;

use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use self::{
    io::Io,
    performance::Performance,
    serialization::{Format, Serialization},
    sort::Sort,
};

/// Unified configuration for dictionary building and output.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Options {
    /// Sort order for results.
    sort: Sort,

    /// Serialization configuration (output format, delimiter).
    serialization: Serialization,

    /// I/O strategy (streamed, memory-mapped).
    io: Io,

    /// Performance tuning configuration (chunk size, capacity).
    performance: Performance,
}

impl Options {
    /// Creates a new `Options` from each of its parts.
    #[must_use]
    pub const fn new(
        sort: Sort,
        serialization: Serialization,
        io: Io,
        performance: Performance,
    ) -> Self {
        Self {
            sort,
            serialization,
            io,
            performance,
        }
    }

    /// Options seeded from `WORD_DICT_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default()
            .with_io(Io::from_env())
            .with_performance(Performance::from_env())
    }

    /// Set sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Set serialization options while preserving other options.
    #[must_use]
    pub fn with_serialization(mut self, serialization: Serialization) -> Self {
        self.serialization = serialization;
        self
    }

    /// Set output format while preserving other options.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.serialization = self.serialization.with_format(format);
        self
    }

    /// Set delimiter for text output.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.serialization = self.serialization.with_delimiter(delimiter);
        self
    }

    /// Set I/O strategy.
    #[must_use]
    pub const fn with_io(mut self, io: Io) -> Self {
        self.io = io;
        self
    }

    /// Set performance configuration while preserving other options.
    #[must_use]
    pub const fn with_performance(mut self, performance: Performance) -> Self {
        self.performance = performance;
        self
    }

    /// Set chunk size for streamed reads.
    #[must_use]
    pub const fn with_chunk_size(mut self, size: usize) -> Self {
        self.performance = self.performance.with_chunk_size(size);
        self
    }

    /// Get the sort order.
    #[must_use]
    pub const fn sort(&self) -> Sort {
        self.sort
    }

    /// Get a reference to the serialization options.
    #[must_use]
    pub const fn serialization(&self) -> &Serialization {
        &self.serialization
    }

    /// Get the I/O strategy.
    #[must_use]
    pub const fn io(&self) -> Io {
        self.io
    }

    /// Get a reference to the performance configuration.
    #[must_use]
    pub const fn performance(&self) -> &Performance {
        &self.performance
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Options {{ sort: {}, serialization: {}, io: {}, performance: {} }}",
            self.sort, self.serialization, self.io, self.performance
        )
    }
}

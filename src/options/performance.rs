//! Configuration for reader performance.

use core::fmt::{self, Display, Formatter};
use std::env;

use serde::{Deserialize, Serialize};

use crate::reader::DEFAULT_CHUNK_SIZE;

/// Performance tuning configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Bytes loaded per chunk by the streamed reader.
    pub chunk_size: usize,

    /// Initial dictionary capacity for inputs of unknown size.
    pub base_capacity: usize,
}

impl Default for Performance {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            base_capacity: Self::BASE_CAPACITY,
        }
    }
}

impl Performance {
    /// Estimated one new word per 64 bytes of text.
    const BYTES_PER_UNIQUE_WORD: u64 = 64;
    /// Capacity used when the input size is unknown.
    const BASE_CAPACITY: usize = 4096;
    /// Upper bound on the up-front dictionary reservation.
    const MAX_CAPACITY: usize = 1 << 20;

    // Environment variable names for configuration.
    const ENV_CHUNK_SIZE: &str = "WORD_DICT_CHUNK_SIZE";

    /// Create performance configuration from environment variables if present.
    ///
    /// A missing, unparsable or zero `WORD_DICT_CHUNK_SIZE` keeps the default.
    pub fn from_env() -> Self {
        let chunk_size = env::var(Self::ENV_CHUNK_SIZE)
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|&size: &usize| size > 0)
            .unwrap_or(DEFAULT_CHUNK_SIZE);

        Self::default().with_chunk_size(chunk_size)
    }

    /// Set the chunk size for this configuration.
    #[must_use]
    pub const fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Get the chunk size.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Estimated dictionary capacity based on input size in bytes.
    #[must_use]
    pub fn capacity(&self, input_size: Option<u64>) -> usize {
        input_size.map_or(self.base_capacity, |size| {
            usize::try_from(size / Self::BYTES_PER_UNIQUE_WORD)
                .unwrap_or(usize::MAX)
                .min(Self::MAX_CAPACITY)
        })
    }
}

impl Display for Performance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Performance {{ chunk: {}, base_capacity: {} }}",
            self.chunk_size, self.base_capacity
        )
    }
}

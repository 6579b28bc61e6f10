//! Configuration for I/O strategies.

use core::fmt::{self, Display, Formatter};
use std::env;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Determines how input bytes reach the dictionary builder.
///
/// Performance characteristics:
/// - **Streamed**: Reads the file in fixed-size chunks through a double-buffered
///   reader, overlapping disk reads with word counting on a prefetch thread.
///   Memory use is two chunks regardless of file size.
///
/// - **MemoryMapped**: Maps the whole file and scans it in place.
///   Requires a seekable file.
///
/// # Examples
///
/// ```
/// use word_dict::Io;
///
/// assert_eq!(Io::default(), Io::Streamed);
/// assert_eq!(Io::MemoryMapped.to_string(), "memory-mapped");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Io {
    /// Double-buffered chunked reads on a background thread
    #[default]
    Streamed,

    /// Use memory-mapped I/O for the whole file
    #[value(name = "mmap")]
    MemoryMapped,

    /// Scan bytes already in memory without file I/O
    #[value(skip)]
    Bytes,
}

impl Display for Io {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Streamed => write!(f, "streamed"),
            Self::MemoryMapped => write!(f, "memory-mapped"),
            Self::Bytes => write!(f, "bytes"),
        }
    }
}

impl Io {
    /// Environment variable name for I/O configuration.
    pub const ENV_IO: &str = "WORD_DICT_IO";

    /// Parse I/O strategy from the `WORD_DICT_IO` environment variable.
    pub fn from_env() -> Self {
        match env::var(Self::ENV_IO).ok().as_deref() {
            Some(s) if s.eq_ignore_ascii_case("streamed") => Self::Streamed,
            Some(s) if s.eq_ignore_ascii_case("memory-mapped") || s.eq_ignore_ascii_case("mmap") => {
                Self::MemoryMapped
            }
            _ => Self::default(),
        }
    }
}

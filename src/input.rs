//! Input sources: files read in chunks, memory-mapped files, or bytes.

use std::{
    fmt::{self, Display, Formatter},
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Arc,
};

use memmap2::Mmap;

use crate::{WordDictError, options::io::Io};

/// `Input` to build a dictionary from.
#[derive(Clone, Debug)]
pub enum Input {
    /// A file read through the double-buffered reader.
    File(PathBuf),
    /// A file mapped into memory in full.
    Mmap(Arc<Mmap>, PathBuf),
    /// Bytes already in memory.
    Bytes(Box<[u8]>),
}

impl Input {
    /// Construct an `Input` for a file path with the given I/O strategy.
    ///
    /// For bytes data, use `Input::from_bytes` instead.
    ///
    /// # Errors
    ///
    /// - `WordDictError::Io` if a file to be memory mapped cannot be opened or mapped
    /// - `WordDictError::Usage` if `Io::Bytes` is requested with a path
    pub fn new<P: AsRef<Path>>(path: P, io: Io) -> Result<Self, WordDictError> {
        let path = path.as_ref();

        match io {
            Io::Streamed => Ok(Self::File(path.to_path_buf())),
            Io::MemoryMapped => {
                let file = File::open(path).map_err(|source| WordDictError::io_at(path, source))?;
                // Safety: the map is read-only and the file is not truncated while we hold it
                #[allow(unsafe_code)]
                let mmap = unsafe { Mmap::map(&file) }.map_err(|source| WordDictError::Io {
                    path: path.display().to_string(),
                    message: "failed to memory map".to_string(),
                    source,
                })?;

                Ok(Self::Mmap(Arc::new(mmap), path.to_path_buf()))
            }
            Io::Bytes => Err(WordDictError::Usage(
                "byte I/O mode requires `Input::from_bytes()`".to_string(),
            )),
        }
    }

    /// Create an `Input` from byte data.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self::Bytes(bytes.as_ref().into())
    }

    /// Returns the file name of the input, or `"<bytes>"`.
    pub fn source(&self) -> String {
        match self {
            Self::File(path) | Self::Mmap(_, path) => path.file_name().map_or_else(
                || format!("No filename: {}", path.display()),
                |name| name.to_string_lossy().into_owned(),
            ),
            Self::Bytes(_) => "<bytes>".to_string(),
        }
    }

    /// Get the size of the input in bytes, if available.
    pub fn size(&self) -> Option<u64> {
        match self {
            Self::File(path) => fs::metadata(path).ok().map(|metadata| metadata.len()),
            Self::Mmap(mmap, _) => Some(mmap.len() as u64),
            Self::Bytes(bytes) => Some(bytes.len() as u64),
        }
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "File({})", path.display()),
            Self::Mmap(_, path) => write!(f, "Mmap({})", path.display()),
            Self::Bytes(_) => write!(f, "Bytes"),
        }
    }
}

//! File-backed source reading whole elements sequentially.

use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, Read},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use super::BlockSource;
use crate::{
    WordDictError,
    element::{Element, decode_into},
};

/// Sequential file reader yielding elements of type `T`.
///
/// Bytes are read straight into a reusable scratch buffer sized to the
/// requested chunk, then decoded; `u8` chunks are filled in place. A trailing
/// partial element is dropped.
#[derive(Debug)]
pub struct FileSource<T> {
    path: PathBuf,
    file: File,
    scratch: Vec<u8>,
    len_hint: Option<u64>,
    element: PhantomData<fn() -> T>,
}

impl<T: Element> FileSource<T> {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns `WordDictError::Io` with specific messages for:
    /// - File not found
    /// - Permission denied
    /// - Other I/O errors
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WordDictError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordDictError::io_at(path, source))?;
        let len_hint = file
            .metadata()
            .ok()
            .map(|metadata| metadata.len() / T::SIZE as u64);

        Ok(Self {
            path: path.to_path_buf(),
            file,
            scratch: Vec::new(),
            len_hint,
            element: PhantomData,
        })
    }

    /// Returns the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Element> BlockSource<T> for FileSource<T> {
    fn fill(&mut self, buf: &mut [T]) -> io::Result<usize> {
        // Single-byte elements are read in place.
        if let Some(bytes) = T::as_bytes_mut(buf) {
            return read_full(&mut self.file, bytes);
        }

        let wanted = buf.len().saturating_mul(T::SIZE);
        if self.scratch.len() < wanted {
            self.scratch.resize(wanted, 0);
        }
        let filled = read_full(&mut self.file, &mut self.scratch[..wanted])?;

        Ok(decode_into(&self.scratch[..filled], buf))
    }

    fn len_hint(&self) -> Option<u64> {
        self.len_hint
    }
}

/// Reads until `bytes` is full or the file ends, returning the bytes read.
fn read_full(file: &mut File, bytes: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < bytes.len() {
        match file.read(&mut bytes[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }

    Ok(filled)
}

impl<T> Display for FileSource<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl<T: Element> TryFrom<&Path> for FileSource<T> {
    type Error = WordDictError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Self::open(path)
    }
}

impl<T: Element> TryFrom<&str> for FileSource<T> {
    type Error = WordDictError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::open(path)
    }
}

//! Block sources feeding the double-buffered reader.
//!
//! A [`BlockSource`] hands out the next run of elements on request. Two
//! sources ship with the crate:
//!
//! - **File**: [`FileSource`] reads whole elements from a file on disk
//! - **Bytes**: [`BytesSource`] decodes elements from an in-memory buffer
//!
//! Any other type can feed a [`DoubleBufferedReader`](crate::DoubleBufferedReader)
//! by implementing the trait.

pub mod bytes;
pub mod file;

use std::io;

pub use self::{bytes::BytesSource, file::FileSource};

/// Synchronous supplier of elements for a single sequential reader.
///
/// `fill` runs on the reader's background thread, so sources must be `Send`.
pub trait BlockSource<T>: Send + 'static {
    /// Fills `buf` with up to `buf.len()` elements and returns how many were written.
    ///
    /// Returning fewer than requested is allowed. Returning `0` means the source
    /// is exhausted and will not be asked again.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the underlying input cannot be read. The reader
    /// treats this as end of stream and reports the error through
    /// [`DoubleBufferedReader::try_next`](crate::DoubleBufferedReader::try_next).
    fn fill(&mut self, buf: &mut [T]) -> io::Result<usize>;

    /// Total number of elements the source will yield, if known up front.
    fn len_hint(&self) -> Option<u64> {
        None
    }
}

impl<T, S: BlockSource<T> + ?Sized> BlockSource<T> for Box<S> {
    fn fill(&mut self, buf: &mut [T]) -> io::Result<usize> {
        (**self).fill(buf)
    }

    fn len_hint(&self) -> Option<u64> {
        (**self).len_hint()
    }
}

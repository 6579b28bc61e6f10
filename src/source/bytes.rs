//! In-memory source decoding elements from owned bytes.

use std::{io, marker::PhantomData};

use super::BlockSource;
use crate::element::{Element, decode_into};

/// Source over an owned byte buffer.
#[derive(Clone, Debug)]
pub struct BytesSource<T> {
    bytes: Box<[u8]>,
    position: usize,
    element: PhantomData<fn() -> T>,
}

impl<T: Element> BytesSource<T> {
    /// Creates a source that yields the elements encoded in `bytes`.
    pub fn new<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self {
            bytes: bytes.as_ref().into(),
            position: 0,
            element: PhantomData,
        }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> &[u8] {
        &self.bytes[self.position..]
    }
}

impl<T: Element> BlockSource<T> for BytesSource<T> {
    fn fill(&mut self, buf: &mut [T]) -> io::Result<usize> {
        let count = decode_into(self.remaining(), buf);
        self.position += count * T::SIZE;
        Ok(count)
    }

    fn len_hint(&self) -> Option<u64> {
        Some((self.bytes.len() / T::SIZE) as u64)
    }
}

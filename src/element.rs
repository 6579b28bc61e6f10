//! Fixed-size elements decoded from raw bytes.

/// A fixed-size value that a byte source can be read as.
///
/// Elements are decoded from native-endian bytes, so a file written by
/// `T::to_ne_bytes` on the same platform reads back unchanged.
pub trait Element: Copy + Default + Send + 'static {
    /// Width of one element in bytes.
    const SIZE: usize;

    /// Decodes one element from exactly `Self::SIZE` bytes.
    fn from_ne_slice(bytes: &[u8]) -> Self;

    /// Views `buf` as raw bytes when elements are single bytes, so a source
    /// can read into it without decoding.
    fn as_bytes_mut(_buf: &mut [Self]) -> Option<&mut [u8]> {
        None
    }
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const SIZE: usize = size_of::<$ty>();

                #[inline]
                fn from_ne_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0_u8; size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    Self::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_element!(u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl Element for u8 {
    const SIZE: usize = 1;

    #[inline]
    fn from_ne_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn as_bytes_mut(buf: &mut [Self]) -> Option<&mut [u8]> {
        Some(buf)
    }
}

/// Decodes as many whole elements as `bytes` holds into `out`.
///
/// Returns the number of elements written. Trailing bytes that do not make up
/// a whole element are ignored.
pub(crate) fn decode_into<T: Element>(bytes: &[u8], out: &mut [T]) -> usize {
    for (raw, slot) in bytes.chunks_exact(T::SIZE).zip(out.iter_mut()) {
        *slot = T::from_ne_slice(raw);
    }

    (bytes.len() / T::SIZE).min(out.len())
}

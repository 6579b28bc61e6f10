//! A word-frequency map built from projected ASCII bytes.

use anyhow::{Context, Result};
use hashbrown::{HashMap, hash_map};

use crate::{
    Count, DoubleBufferedReader, Input, Word,
    options::Options,
    reader::ReadStats,
};

/// Byte every non-letter projects to.
const SEPARATOR: u8 = b' ';

/// Maps `A-Z` to `a-z`, keeps `a-z`, and turns every other byte into a separator.
static PROJECTION: [u8; 256] = projection_table();

#[allow(clippy::cast_possible_truncation)]
const fn projection_table() -> [u8; 256] {
    let mut table = [SEPARATOR; 256];
    let mut index = 0;
    while index < table.len() {
        let byte = index as u8;
        table[index] = match byte {
            b'A'..=b'Z' => byte.to_ascii_lowercase(),
            b'a'..=b'z' => byte,
            _ => SEPARATOR,
        };
        index += 1;
    }
    table
}

/// Projects a byte to its lowercase letter, or `None` for a word boundary.
///
/// # Examples
///
/// ```
/// use word_dict::dictionary::project;
///
/// assert_eq!(project(b'Q'), Some(b'q'));
/// assert_eq!(project(b'q'), Some(b'q'));
/// assert_eq!(project(b'7'), None);
/// assert_eq!(project(0xE9), None);
/// ```
#[inline]
pub fn project(byte: u8) -> Option<u8> {
    match PROJECTION[usize::from(byte)] {
        SEPARATOR => None,
        letter => Some(letter),
    }
}

/// Map for tracking word counts with non-deterministic iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    inner: HashMap<Word, Count>,
}

impl Dictionary {
    /// Creates a new empty `Dictionary`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `Dictionary` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a dictionary from `input` using the configured I/O strategy.
    ///
    /// Streamed reads also return the reader's diagnostics.
    ///
    /// # Errors
    ///
    /// An error will be returned if:
    /// - The input file cannot be opened
    /// - A chunk read fails partway through the file
    /// - The prefetch thread cannot be started
    pub fn from_input(input: &Input, options: &Options) -> Result<(Self, Option<ReadStats>)> {
        let performance = options.performance();
        let mut dictionary = Self::with_capacity(performance.capacity(input.size()));

        match input {
            Input::File(path) => {
                let mut reader =
                    DoubleBufferedReader::<u8>::open(path, performance.chunk_size())?;
                dictionary.add_bytes(reader.by_ref());

                if let Some(err) = reader.take_error() {
                    return Err(err)
                        .with_context(|| format!("failed to read: {}", path.display()));
                }

                Ok((dictionary, Some(reader.stats())))
            }
            Input::Mmap(mmap, _) => {
                dictionary.add_bytes(mmap.iter().copied());
                Ok((dictionary, None))
            }
            Input::Bytes(bytes) => {
                dictionary.add_bytes(bytes.iter().copied());
                Ok((dictionary, None))
            }
        }
    }

    /// Builds a dictionary from bytes already in memory.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        let bytes = bytes.as_ref();
        let mut dictionary = Self::with_capacity(
            Options::default()
                .performance()
                .capacity(Some(bytes.len() as u64)),
        );
        dictionary.add_bytes(bytes.iter().copied());
        dictionary
    }

    /// Counts every word in `bytes`.
    ///
    /// A word is a maximal run of ASCII letters, lowercased. Input ends the
    /// last word, so a trailing word without a separator still counts.
    pub fn add_bytes<I: IntoIterator<Item = u8>>(&mut self, bytes: I) {
        let mut word = String::new();

        for byte in bytes {
            match project(byte) {
                Some(letter) => word.push(char::from(letter)),
                None if word.is_empty() => {}
                None => {
                    self.increment(&word);
                    word.clear();
                }
            }
        }

        if !word.is_empty() {
            self.increment(&word);
        }
    }

    /// Returns the number of unique words in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the map contains no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the count for `word`, if present.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<Count> {
        self.inner.get(word).copied()
    }

    /// Returns an iterator over the counts.
    pub fn values(&self) -> impl Iterator<Item = &Count> {
        self.inner.values()
    }

    /// Consumes the map into unordered `(word, count)` pairs.
    #[must_use]
    pub fn into_entries(self) -> Box<[(Word, Count)]> {
        self.inner.into_iter().collect()
    }

    /// Increments a word's count by reference to avoid duplicate allocation.
    #[inline]
    fn increment(&mut self, word: &str) {
        match self.inner.entry_ref(word) {
            hash_map::EntryRef::Vacant(entry) => {
                entry.insert(1);
            }
            hash_map::EntryRef::Occupied(mut entry) => {
                *entry.get_mut() += 1;
            }
        }
    }
}

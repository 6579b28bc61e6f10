//! A word-frequency dictionary built on a double-buffered prefetching reader.
//!
//! The heart of the crate is [`DoubleBufferedReader`], which hands out one
//! element at a time from a [`BlockSource`] while a background thread loads the
//! next chunk. Disk latency overlaps with whatever the consumer does per
//! element, and memory use stays at two chunks however large the input is.
//!
//! [`WordDict`] uses the reader to count every run of ASCII letters in a file,
//! case-folded to lowercase, and sorts the result by frequency.
//!
//! ## Module structure
//!
//! - `dictionary.rs`: Byte projection and the word-count map
//! - `element.rs`: Fixed-size element decoding
//! - `error.rs`: Error types
//! - `exit_code.rs`: Exit code definitions and handling
//! - `input.rs`: Input source management strategies
//! - `options/`: Configuration (sort, serialization, I/O, performance)
//! - `output.rs`: Output formatting and display
//! - `reader.rs`: The double-buffered reader
//! - `source/`: Block sources for files and bytes
//!
//! # Reading elements
//!
//! ```
//! use word_dict::{BytesSource, DoubleBufferedReader};
//!
//! # fn example() -> Result<(), word_dict::WordDictError> {
//! let bytes: Vec<u8> = [1_u32, 2, 3].iter().flat_map(|n| n.to_ne_bytes()).collect();
//! let mut reader = DoubleBufferedReader::new(BytesSource::<u32>::new(bytes), 2)?;
//!
//! assert_eq!(reader.next(), Some(1));
//! assert_eq!(reader.try_next()?, Some(2));
//! assert_eq!(reader.next(), Some(3));
//! assert_eq!(reader.next(), None);
//! # Ok(())
//! # }
//! ```
//!
//! # Building a dictionary
//!
//! ```
//! use word_dict::{Input, Options, WordDict};
//!
//! # fn example() -> anyhow::Result<()> {
//! let options = Options::default();
//! let input = Input::from_bytes("The cat saw the other cat. THE END");
//! let dict = WordDict::new(&input, &options)?;
//!
//! assert_eq!(dict.count(), 8);
//! assert_eq!(dict.tally()[0], ("the".into(), 3));
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use serde::Serialize;

pub mod dictionary;
pub mod element;
pub mod error;
pub mod exit_code;
pub mod input;
pub mod options;
pub mod output;
pub mod reader;
pub mod source;

pub use dictionary::Dictionary;
pub use element::Element;
pub use error::Error as WordDictError;
pub use input::Input;
pub use options::{
    Options,
    io::Io,
    performance::Performance,
    serialization::{Format, Serialization},
    sort::Sort,
};
pub use output::Output;
pub use reader::{DoubleBufferedReader, LoadState, ReadStats};
pub use source::{BlockSource, BytesSource, FileSource};

pub type Count = usize;
pub type Word = Box<str>;
pub type Tally = Box<[(Word, Count)]>;

/// A sorted dictionary of word frequencies, along with the options that built it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct WordDict<'a> {
    /// Ordered pairs of words and the count of times they appear.
    tally: Tally,

    /// All of the options specified for how to build and write the dictionary.
    options: &'a Options,

    /// The sum of all words counted.
    count: Count,

    /// The number of distinct words.
    uniq_count: Count,

    /// Reader diagnostics, present for streamed input.
    stats: Option<ReadStats>,
}

/// Serializes the tally and totals of a `WordDict` to JSON.
impl Serialize for WordDict<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("WordDict", 5)?;
        state.serialize_field("tally", &self.tally)?;
        state.serialize_field("options", &self.options)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("uniqueCount", &self.uniq_count)?;
        state.serialize_field("stats", &self.stats)?;
        state.end()
    }
}

/// A `tally` can also be iterated over directly from a `WordDict`.
impl<'i> IntoIterator for &'i WordDict<'_> {
    type Item = &'i (Word, Count);
    type IntoIter = std::slice::Iter<'i, (Word, Count)>;
    fn into_iter(self) -> Self::IntoIter {
        self.tally.iter()
    }
}

/// `WordDict` fields are eagerly populated upon construction and exposed by getter methods.
impl<'a> WordDict<'a> {
    /// Constructs a `WordDict` from an input source and options.
    ///
    /// # Errors
    ///
    /// An error will be returned if:
    /// - The input file cannot be opened
    /// - An I/O error occurs while reading from the source
    pub fn new(input: &Input, options: &'a Options) -> Result<Self> {
        let (dictionary, stats) = Dictionary::from_input(input, options)?;

        Ok(Self::from_dictionary(dictionary, options, stats))
    }

    /// Creates a `WordDict` from a finished `Dictionary`.
    pub fn from_dictionary(
        dictionary: Dictionary,
        options: &'a Options,
        stats: Option<ReadStats>,
    ) -> Self {
        let count = dictionary.values().sum();
        let mut tally = dictionary.into_entries();
        let uniq_count = tally.len();
        options.sort().apply(&mut tally);

        Self {
            tally,
            options,
            count,
            uniq_count,
            stats,
        }
    }

    /// Gets the `tally` field.
    pub fn tally(&self) -> &[(Word, Count)] {
        &self.tally
    }

    /// Gets a reference to the `options`.
    pub const fn options(&self) -> &Options {
        self.options
    }

    /// Gets the `uniq_count` field.
    pub const fn uniq_count(&self) -> Count {
        self.uniq_count
    }

    /// Gets the `count` field.
    pub const fn count(&self) -> Count {
        self.count
    }

    /// Reader diagnostics, if the input was streamed.
    pub const fn stats(&self) -> Option<ReadStats> {
        self.stats
    }

    /// Consumes the `tally` field.
    pub fn into_tally(self) -> Tally {
        self.tally
    }
}

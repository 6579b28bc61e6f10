//! Sorting options for dictionary entries.

use core::{
    cmp::Reverse,
    fmt::{self, Display, Formatter},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Count, Word};

/// Sort order by count, ties broken alphabetically.
///
/// # Examples
///
/// ```
/// use word_dict::Sort;
///
/// assert_eq!(Sort::default(), Sort::Desc);
/// assert_eq!(Sort::Desc.to_string(), "desc");
/// assert_eq!(Sort::Asc.to_string(), "asc");
/// assert_eq!(Sort::Unsorted.to_string(), "unsorted");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum Sort {
    /// Sort by count descending.
    #[default]
    Desc,
    /// Sort by count ascending.
    Asc,
    /// No sorting applied.
    Unsorted,
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desc => write!(f, "desc"),
            Self::Asc => write!(f, "asc"),
            Self::Unsorted => write!(f, "unsorted"),
        }
    }
}

impl Sort {
    /// Sorts entries in place. Equal counts are ordered by word.
    pub fn apply(self, entries: &mut [(Word, Count)]) {
        match self {
            Self::Desc => {
                entries.sort_unstable_by(|(a_word, a_count), (b_word, b_count)| {
                    (Reverse(a_count), a_word).cmp(&(Reverse(b_count), b_word))
                });
            }
            Self::Asc => entries.sort_unstable_by(|(a_word, a_count), (b_word, b_count)| {
                (a_count, a_word).cmp(&(b_count, b_word))
            }),
            Self::Unsorted => {}
        }
    }
}

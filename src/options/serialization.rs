//! Serialization format options and settings.

use core::fmt::{self, Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format.
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
pub enum Format {
    /// `count word` lines.
    #[default]
    Text,
    /// An array of `[word, count]` pairs.
    Json,
    /// A `word,count` table with a header row.
    Csv,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Output format plus the delimiter used between fields of text output.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Serialization {
    format: Format,
    delimiter: String,
}

impl Default for Serialization {
    fn default() -> Self {
        Self {
            format: Format::default(),
            delimiter: Self::DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Serialization {
    /// Delimiter between count and word in text output.
    pub const DEFAULT_DELIMITER: &str = " ";

    /// Creates serialization settings for `format` with `delimiter`.
    pub fn new(format: Format, delimiter: impl Into<String>) -> Self {
        Self {
            format,
            delimiter: delimiter.into(),
        }
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the text delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Get the output format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the text delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Display for Serialization {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Text => write!(f, "text[delimiter={:?}]", self.delimiter),
            format => write!(f, "{format}"),
        }
    }
}

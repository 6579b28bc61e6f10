//! Verbose diagnostics for dictionary runs.

use anyhow::{Context, Result};
use serde::Serialize;
use word_dict::{Format, Output, ReadStats, WordDict, WordDictError};

/// Writes run details and reader diagnostics, to stderr by default.
#[derive(Debug)]
pub(crate) struct Verbose {
    output: Output,
}

impl Default for Verbose {
    /// Default verbose logger writes to stderr.
    fn default() -> Self {
        Self {
            output: Output::stderr(),
        }
    }
}

/// Verbose data that can be serialized to both JSON and CSV.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerboseData<'a> {
    source: &'a str,
    total_words: usize,
    unique_words: usize,
    delimiter: String,
    order: String,
    io: String,
    chunk_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    swaps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elements: Option<u64>,
}

impl<'a> VerboseData<'a> {
    /// Create from `WordDict` and source.
    fn from_dict(word_dict: &'a WordDict<'a>, source: &'a str) -> Self {
        let options = word_dict.options();
        let stats = word_dict.stats();

        Self {
            source,
            total_words: word_dict.count(),
            unique_words: word_dict.uniq_count(),
            delimiter: format!("{:?}", options.serialization().delimiter()),
            order: options.sort().to_string(),
            io: options.io().to_string(),
            chunk_size: options.performance().chunk_size(),
            wait_ms: stats.map(|ReadStats { wait, .. }| wait.as_secs_f64() * 1000.0),
            swaps: stats.map(|stats| stats.swaps),
            elements: stats.map(|stats| stats.elements),
        }
    }

    /// Get all fields as name-value pairs, omitting reader stats when absent.
    fn field_pairs(&self) -> Vec<(&str, String)> {
        let mut pairs = vec![
            ("source", self.source.to_string()),
            ("total-words", self.total_words.to_string()),
            ("unique-words", self.unique_words.to_string()),
            ("delimiter", self.delimiter.clone()),
            ("order", self.order.clone()),
            ("io", self.io.clone()),
            ("chunk-size", self.chunk_size.to_string()),
        ];

        if let Some(wait_ms) = self.wait_ms {
            pairs.push(("wait-ms", format!("{wait_ms:.3}")));
        }
        if let Some(swaps) = self.swaps {
            pairs.push(("swaps", swaps.to_string()));
        }
        if let Some(elements) = self.elements {
            pairs.push(("elements", elements.to_string()));
        }

        pairs
    }
}

impl Verbose {
    /// Writes verbose information for the dictionary.
    pub(crate) fn write_verbose_info(
        &mut self,
        word_dict: &WordDict<'_>,
        source: &str,
    ) -> Result<()> {
        let data = VerboseData::from_dict(word_dict, source);
        let serialization = word_dict.options().serialization();

        match serialization.format() {
            Format::Json => self.write_json(&data),
            Format::Csv => self.write_csv(&data),
            Format::Text => self.write_text(&data, serialization.delimiter()),
        }
    }

    /// Write verbose info in JSON format.
    fn write_json(&mut self, data: &VerboseData<'_>) -> Result<()> {
        let json = serde_json::to_string(data).map_err(WordDictError::Json)?;

        self.output
            .write_chunk(&format!("{json}\n\n"))
            .context("failed to write JSON output")
    }

    /// Write verbose info in CSV format.
    fn write_csv(&mut self, data: &VerboseData<'_>) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let field_pairs = data.field_pairs();

        writer
            .write_record(field_pairs.iter().map(|(name, _)| *name))
            .map_err(WordDictError::Csv)?;
        writer
            .write_record(field_pairs.iter().map(|(_, value)| value))
            .map_err(WordDictError::Csv)?;

        let output =
            String::from_utf8(writer.into_inner()?).context("failed to convert output to UTF-8")?;
        self.output
            .write_chunk(&format!("{output}\n"))
            .context("failed to write output")
    }

    /// Write verbose info in text format.
    fn write_text(&mut self, data: &VerboseData<'_>, delimiter: &str) -> Result<()> {
        data.field_pairs()
            .into_iter()
            .try_for_each(|(field_name, value)| {
                self.output
                    .write_chunk(&format!("{field_name}{delimiter}{value}\n"))
            })?;

        if data.total_words > 0 {
            self.output.write_chunk("\n")?;
        }

        self.output.flush()
    }
}

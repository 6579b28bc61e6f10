//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use word_dict::{Format, Io, Options, Serialization, Sort};

#[derive(Debug, Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// Text file to build the dictionary from.
    #[arg(value_name = "INPUT")]
    pub(crate) input: PathBuf,

    /// Write the dictionary to this file rather than stdout ("-").
    #[arg(value_name = "OUTPUT")]
    pub(crate) output: Option<PathBuf>,

    /// Sort order.
    #[arg(short, long, default_value_t, value_enum, value_name = "ORDER")]
    sort: Sort,

    /// Output format.
    #[arg(short, long, default_value_t, value_enum, value_name = "FORMAT")]
    format: Format,

    /// Delimiter between count and word in text output.
    #[arg(short, long, default_value = " ", value_name = "VALUE")]
    delimiter: String,

    /// I/O strategy [env: WORD_DICT_IO] [default: streamed]
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    io: Option<Io>,

    /// Bytes loaded per chunk when streaming [env: WORD_DICT_CHUNK_SIZE] [default: 262144]
    #[arg(short, long, value_name = "BYTES", value_parser = parse_chunk_size)]
    chunk_size: Option<usize>,

    /// Print verbose details.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
}

impl Args {
    /// Builds `Options` from flags, falling back to environment variables.
    pub(crate) fn to_options(&self) -> Options {
        let env = Options::from_env();
        let performance = self
            .chunk_size
            .map_or(*env.performance(), |size| {
                env.performance().with_chunk_size(size)
            });

        Options::new(
            self.sort,
            Serialization::new(self.format, self.delimiter.as_str()),
            self.io.unwrap_or_else(|| env.io()),
            performance,
        )
    }
}

/// Parses a chunk size of at least one byte.
fn parse_chunk_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("chunk size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(err) => Err(err.to_string()),
    }
}

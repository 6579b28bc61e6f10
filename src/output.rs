//! Write trait abstractions for stdout and file serialization.

use std::{
    fmt::{self, Debug, Formatter},
    fs::File,
    io::{self, BufWriter, ErrorKind::BrokenPipe, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::{WordDict, WordDictError, options::serialization::Format};

/// `Writer` dynamic dispatches the `Write` trait.
pub type Writer = Box<dyn Write>;

/// `Output` writes to either a file or stream like stdout or stderr.
pub struct Output {
    writer: Writer,
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("writer", &"<dyn Write>")
            .finish()
    }
}

impl Default for Output {
    /// Default output is stdout
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Output {
    /// Creates an `Output` for an optional path, choosing between file or stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn new(output: Option<&Path>) -> Result<Self> {
        match output {
            Some(path) if path == Path::new("-") => Ok(Self::stdout()),
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Creates an `Output` that writes to a file with error context.
    ///
    /// # Errors
    ///
    /// Returns `WordDictError::Io` if the file cannot be created.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| WordDictError::Io {
            path: path.display().to_string(),
            message: "failed to create output file".to_string(),
            source,
        })?;

        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
        })
    }

    /// Creates an `Output` that writes to stdout.
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(BufWriter::new(io::stdout().lock())),
        }
    }

    /// Creates an `Output` that writes to stderr.
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr().lock()),
        }
    }

    /// Creates an `Output` from a writer.
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Writes a chunk of text, handling `BrokenPipe` errors gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error for any write failure other than a broken pipe.
    pub fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        Self::handle_broken_pipe(self.writer.write_all(chunk.as_bytes()))
    }

    /// Flushes the writer, ensuring all output is written.
    ///
    /// # Errors
    ///
    /// Returns an error for any flush failure other than a broken pipe.
    pub fn flush(&mut self) -> Result<()> {
        Self::handle_broken_pipe(self.writer.flush())
    }

    /// Writes the dictionary in the configured format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_formatted_dict(&mut self, word_dict: &WordDict<'_>) -> Result<()> {
        let serialization = word_dict.options().serialization();

        match serialization.format() {
            Format::Text => {
                let delimiter = serialization.delimiter();
                for (word, count) in word_dict {
                    self.write_chunk(&format!("{count}{delimiter}{word}\n"))?;
                }
            }
            Format::Json => {
                let pairs: Vec<_> = word_dict
                    .tally()
                    .iter()
                    .map(|(word, count)| (word.as_ref(), count))
                    .collect();
                let json = serde_json::to_string(&pairs).map_err(WordDictError::Json)?;
                self.write_chunk(&format!("{json}\n"))?;
            }
            Format::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer
                    .write_record(["word", "count"])
                    .map_err(WordDictError::Csv)?;
                for (word, count) in word_dict {
                    writer
                        .write_record([word.as_ref(), &count.to_string()])
                        .map_err(WordDictError::Csv)?;
                }
                let csv_data = String::from_utf8(writer.into_inner()?)
                    .context("failed to convert CSV output to UTF-8 string")?;
                self.write_chunk(&csv_data)?;
            }
        }

        self.flush()
    }

    /// Processes the result of a write, handling `BrokenPipe` errors gracefully.
    fn handle_broken_pipe(result: io::Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => match err.kind() {
                BrokenPipe => Ok(()),
                _ => Err(err.into()),
            },
        }
    }
}

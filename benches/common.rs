//! Shared benchmark utilities.

use std::{io::Write, path::PathBuf, time::Duration};

use criterion::Criterion;
use fake::{Fake, faker::lorem::en::Words};
use tempfile::NamedTempFile;

/// Generate random text for benchmarks.
#[must_use]
pub fn generate_sample_text(lines: usize, words_per_line: std::ops::Range<usize>) -> String {
    (0..lines)
        .map(|_| {
            Words(words_per_line.clone())
                .fake::<Vec<String>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Standard Criterion configuration.
#[must_use]
pub fn standard_criterion_config() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(15)
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
}

/// Create benchmark file of specified size in KB.
///
/// # Panics
///
/// Panics if the temporary file cannot be created or written.
#[must_use]
pub fn create_benchmark_file(size_kb: usize) -> (NamedTempFile, PathBuf) {
    let mut temp_file = NamedTempFile::new().expect("create temp file");

    let approx_chars_per_line = 80;
    let approx_lines = size_kb * 1024 / approx_chars_per_line;
    let content = generate_sample_text(approx_lines, 8..14);

    temp_file
        .write_all(content.as_bytes())
        .expect("write to temp file");
    temp_file.flush().expect("flush temp file");

    let path = temp_file.path().to_path_buf();
    (temp_file, path)
}

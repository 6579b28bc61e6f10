//! `word-dict` counts the words of a file and writes them sorted by frequency.

pub(crate) mod args;
pub(crate) mod verbose;

use std::{
    fs, io,
    path::Path,
    process,
};

use anyhow::Result;
use args::Args;
use clap::Parser;
use verbose::Verbose;
use word_dict::{Input, Output, WordDict, WordDictError, exit_code::ExitCode};

fn main() -> process::ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = ExitCode::from(&err);
            err.print().ok();
            return code.into();
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(&err).into()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    ensure_input_file(&args.input)?;
    let output_path = args
        .output
        .as_deref()
        .filter(|path| *path != Path::new("-"));
    if let Some(path) = output_path {
        remove_stale_output(path)?;
    }

    let options = args.to_options();
    let input = Input::new(&args.input, options.io())?;
    let word_dict = WordDict::new(&input, &options)?;

    if args.verbose {
        Verbose::default().write_verbose_info(&word_dict, &input.source())?;
    }

    let mut output = Output::new(output_path)?;
    output.write_formatted_dict(&word_dict)
}

/// Rejects anything but an existing regular file.
fn ensure_input_file(path: &Path) -> Result<(), WordDictError> {
    if path.is_file() {
        return Ok(());
    }

    Err(WordDictError::Io {
        path: path.display().to_string(),
        message: "input file not found".to_string(),
        source: io::Error::from(io::ErrorKind::NotFound),
    })
}

/// Removes an existing output file before the dictionary is written.
fn remove_stale_output(path: &Path) -> Result<(), WordDictError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(WordDictError::Io {
            path: path.display().to_string(),
            message: "cannot remove output file".to_string(),
            source,
        }),
    }
}

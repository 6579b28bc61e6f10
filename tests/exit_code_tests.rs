use std::io;

use clap::{CommandFactory, Parser};
use word_dict::{WordDictError, exit_code::ExitCode};

#[derive(Debug, Parser)]
#[command(name = "probe", version)]
struct Probe {}

#[test]
fn test_exit_code_values() {
    assert_eq!(ExitCode::Success as u8, 0);
    assert_eq!(ExitCode::Failure as u8, 1);
    assert_eq!(ExitCode::UsageError as u8, 64);
    assert_eq!(ExitCode::DataFormat as u8, 65);
    assert_eq!(ExitCode::InputNotFound as u8, 66);
    assert_eq!(ExitCode::InternalError as u8, 70);
    assert_eq!(ExitCode::OutputFailed as u8, 73);
    assert_eq!(ExitCode::IoError as u8, 74);
    assert_eq!(ExitCode::PermissionDenied as u8, 77);
}

#[test]
fn test_from_io_error() {
    let code = |kind| ExitCode::from(&io::Error::from(kind));

    assert_eq!(code(io::ErrorKind::NotFound), ExitCode::InputNotFound);
    assert_eq!(code(io::ErrorKind::PermissionDenied), ExitCode::PermissionDenied);
    assert_eq!(code(io::ErrorKind::AlreadyExists), ExitCode::OutputFailed);
    assert_eq!(code(io::ErrorKind::UnexpectedEof), ExitCode::IoError);
}

#[test]
fn test_from_word_dict_error() {
    assert_eq!(
        ExitCode::from(&WordDictError::Usage("bad".into())),
        ExitCode::UsageError
    );
    assert_eq!(ExitCode::from(&WordDictError::ChunkSize), ExitCode::UsageError);
    let allocation = WordDictError::Allocation {
        elements: usize::MAX,
        source: Vec::<u8>::new()
            .try_reserve_exact(usize::MAX)
            .expect_err("capacity overflow"),
    };
    assert_eq!(ExitCode::from(&allocation), ExitCode::UsageError);
    assert_eq!(
        ExitCode::from(&WordDictError::MutexPoisoned),
        ExitCode::InternalError
    );
    assert_eq!(
        ExitCode::from(&WordDictError::Source(io::Error::other("gone"))),
        ExitCode::IoError
    );

    let not_found = WordDictError::Io {
        path: "missing.txt".into(),
        message: "no such file".into(),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(not_found.to_string(), "no such file: missing.txt");
    assert_eq!(ExitCode::from(&not_found), ExitCode::InputNotFound);
}

#[test]
fn test_from_anyhow_error() {
    let wrapped = anyhow::Error::from(WordDictError::ChunkSize).context("while reading");
    assert_eq!(ExitCode::from(&wrapped), ExitCode::UsageError);

    let io_err = anyhow::Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(ExitCode::from(&io_err), ExitCode::PermissionDenied);

    assert_eq!(ExitCode::from(&anyhow::anyhow!("opaque")), ExitCode::Failure);
}

#[test]
fn test_from_clap_error() {
    let help = Probe::try_parse_from(["probe", "--help"]).expect_err("help exits early");
    assert_eq!(ExitCode::from(&help), ExitCode::Success);

    let version = Probe::try_parse_from(["probe", "--version"]).expect_err("version exits");
    assert_eq!(ExitCode::from(&version), ExitCode::Success);

    let unknown = Probe::try_parse_from(["probe", "--bogus"]).expect_err("unknown flag");
    assert_eq!(ExitCode::from(&unknown), ExitCode::UsageError);

    Probe::command().debug_assert();
}

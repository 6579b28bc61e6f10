//! Tests for building dictionaries.

use std::io::Write;

use tempfile::NamedTempFile;
use word_dict::{Dictionary, Input, Io, Options, WordDict, dictionary::project};

const TEXT: &str = "It was the best of times, it was the worst of times;\n\
                    it was the age of wisdom, IT WAS THE AGE OF FOOLISHNESS...";

fn temp_file_with(text: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("create temp file");
    temp_file.write_all(text.as_bytes()).expect("write test data");
    temp_file.flush().expect("flush test data");
    temp_file
}

#[test]
fn test_projection_table() {
    for byte in b'a'..=b'z' {
        assert_eq!(project(byte), Some(byte));
        assert_eq!(project(byte.to_ascii_uppercase()), Some(byte));
    }
    for byte in [b' ', b'\n', b'0', b'9', b'\'', b'-', b'_', 0, 0x7F, 0x80, 0xC3, 0xFF] {
        assert_eq!(project(byte), None, "byte {byte:#x}");
    }
}

#[test]
fn test_words_split_on_any_non_letter() {
    let dictionary = Dictionary::from_bytes("don't stop-me now2day");

    assert_eq!(dictionary.get("don"), Some(1));
    assert_eq!(dictionary.get("t"), Some(1));
    assert_eq!(dictionary.get("stop"), Some(1));
    assert_eq!(dictionary.get("me"), Some(1));
    assert_eq!(dictionary.get("now"), Some(1));
    assert_eq!(dictionary.get("day"), Some(1));
    assert_eq!(dictionary.len(), 6);
}

#[test]
fn test_trailing_word_without_separator_counts() {
    let dictionary = Dictionary::from_bytes("wombat wombat");
    assert_eq!(dictionary.get("wombat"), Some(2));
}

#[test]
fn test_empty_and_separator_only_input() {
    assert!(Dictionary::from_bytes("").is_empty());
    assert!(Dictionary::from_bytes(" \n\t 123 ... ").is_empty());
    assert!(Dictionary::new().is_empty());
}

#[test]
fn test_non_ascii_bytes_split_words() {
    let dictionary = Dictionary::from_bytes("café naïve");

    assert_eq!(dictionary.get("caf"), Some(1));
    assert_eq!(dictionary.get("na"), Some(1));
    assert_eq!(dictionary.get("ve"), Some(1));
}

#[test]
fn test_word_dict_sorts_by_count_then_word() {
    let options = Options::default();
    let input = Input::from_bytes(TEXT);
    let dict = WordDict::new(&input, &options).expect("build dictionary");

    let top: Vec<(&str, usize)> = dict
        .tally()
        .iter()
        .take(6)
        .map(|(word, count)| (word.as_ref(), *count))
        .collect();
    assert_eq!(
        top,
        vec![
            ("it", 4),
            ("of", 4),
            ("the", 4),
            ("was", 4),
            ("age", 2),
            ("times", 2),
        ]
    );
    assert_eq!(dict.count(), 24);
    assert_eq!(dict.uniq_count(), 10);
    assert!(dict.stats().is_none());
}

#[test]
fn test_streamed_and_mapped_inputs_agree_for_every_chunk_size() {
    let temp_file = temp_file_with(TEXT);
    let mapped_options = Options::default().with_io(Io::MemoryMapped);
    let mapped_input = Input::new(temp_file.path(), Io::MemoryMapped).expect("map input");
    let expected = WordDict::new(&mapped_input, &mapped_options)
        .expect("mapped dictionary")
        .into_tally();

    for chunk_size in [1, 2, 3, 7, 64, 1 << 16] {
        let options = Options::default().with_chunk_size(chunk_size);
        let input = Input::new(temp_file.path(), Io::Streamed).expect("streamed input");
        let dict = WordDict::new(&input, &options).expect("streamed dictionary");

        let stats = dict.stats().expect("streamed input reports stats");
        assert_eq!(stats.elements, TEXT.len() as u64);
        assert_eq!(dict.into_tally(), expected, "chunk size {chunk_size}");
    }
}

#[test]
fn test_streamed_missing_file_is_an_error() {
    let options = Options::default();
    let input = Input::new("/nonexistent/path/to/file.txt", Io::Streamed).expect("lazy input");
    let err = WordDict::new(&input, &options).expect_err("missing file");

    assert_eq!(err.to_string(), "no such file: /nonexistent/path/to/file.txt");
}

#[test]
fn test_bytes_io_requires_from_bytes() {
    assert!(Input::new("words.txt", Io::Bytes).is_err());
}

#[test]
fn test_input_source_and_size() {
    let temp_file = temp_file_with("four");
    let input = Input::new(temp_file.path(), Io::Streamed).expect("input");
    let file_name = temp_file
        .path()
        .file_name()
        .expect("file name")
        .to_string_lossy()
        .into_owned();

    assert_eq!(input.source(), file_name);
    assert_eq!(input.size(), Some(4));
    assert_eq!(Input::from_bytes("four").source(), "<bytes>");
}

#[test]
fn test_word_dict_iterates_tally() {
    let options = Options::default();
    let input = Input::from_bytes("b a b");
    let dict = WordDict::new(&input, &options).expect("build dictionary");

    let words: Vec<&str> = (&dict).into_iter().map(|(word, _)| word.as_ref()).collect();
    assert_eq!(words, vec!["b", "a"]);
}

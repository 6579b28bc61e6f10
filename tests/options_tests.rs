use word_dict::{Count, Format, Io, Options, Performance, Serialization, Sort, Word};

fn entries(pairs: &[(&str, Count)]) -> Vec<(Word, Count)> {
    pairs.iter().map(|&(word, count)| (word.into(), count)).collect()
}

#[test]
fn test_sort_desc_breaks_ties_by_word() {
    let mut tally = entries(&[("b", 1), ("c", 3), ("a", 1), ("d", 3)]);
    Sort::Desc.apply(&mut tally);
    assert_eq!(tally, entries(&[("c", 3), ("d", 3), ("a", 1), ("b", 1)]));
}

#[test]
fn test_sort_asc_breaks_ties_by_word() {
    let mut tally = entries(&[("b", 1), ("c", 3), ("a", 1), ("d", 3)]);
    Sort::Asc.apply(&mut tally);
    assert_eq!(tally, entries(&[("a", 1), ("b", 1), ("c", 3), ("d", 3)]));
}

#[test]
fn test_sort_unsorted_leaves_order() {
    let before = entries(&[("z", 1), ("a", 9)]);
    let mut tally = before.clone();
    Sort::Unsorted.apply(&mut tally);
    assert_eq!(tally, before);
}

#[test]
fn test_default_options() {
    let options = Options::default();

    assert_eq!(options.sort(), Sort::Desc);
    assert_eq!(options.serialization().format(), Format::Text);
    assert_eq!(options.serialization().delimiter(), " ");
    assert_eq!(options.io(), Io::Streamed);
    assert_eq!(options.performance().chunk_size(), 256 * 1024);
}

#[test]
fn test_builders() {
    let options = Options::default()
        .with_sort(Sort::Asc)
        .with_format(Format::Csv)
        .with_delimiter("\t")
        .with_io(Io::MemoryMapped)
        .with_chunk_size(17);

    assert_eq!(options.sort(), Sort::Asc);
    assert_eq!(options.serialization(), &Serialization::new(Format::Csv, "\t"));
    assert_eq!(options.io(), Io::MemoryMapped);
    assert_eq!(options.performance().chunk_size(), 17);
}

#[test]
fn test_options_display() {
    let options = Options::default().with_chunk_size(8);
    assert_eq!(
        options.to_string(),
        "Options { sort: desc, serialization: text[delimiter=\" \"], io: streamed, \
         performance: Performance { chunk: 8, base_capacity: 4096 } }"
    );
}

#[test]
fn test_options_json() {
    let options = Options::default().with_format(Format::Json);
    let json = serde_json::to_value(&options).expect("serialize options");

    assert_eq!(json["sort"], "Desc");
    assert_eq!(json["serialization"]["format"], "Json");
    assert_eq!(json["io"], "Streamed");
    assert_eq!(json["performance"]["chunkSize"], 262_144);

    let round: Options = serde_json::from_value(json).expect("deserialize options");
    assert_eq!(round, options);
}

#[test]
fn test_capacity_estimates() {
    let performance = Performance::default();

    assert_eq!(performance.capacity(None), 4096);
    assert_eq!(performance.capacity(Some(0)), 0);
    assert_eq!(performance.capacity(Some(64 * 100)), 100);
    assert_eq!(performance.capacity(Some(u64::MAX)), 1 << 20);
}

#[test]
fn test_format_and_io_display() {
    assert_eq!(Format::Text.to_string(), "text");
    assert_eq!(Format::Json.to_string(), "json");
    assert_eq!(Format::Csv.to_string(), "csv");
    assert_eq!(Io::Streamed.to_string(), "streamed");
    assert_eq!(Io::MemoryMapped.to_string(), "memory-mapped");
    assert_eq!(Io::Bytes.to_string(), "bytes");
}

//! Benchmarks comparing streamed, memory-mapped and in-memory dictionary builds,
//! and the raw throughput of the double-buffered reader across chunk sizes.

use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use word_dict::{DoubleBufferedReader, Input, Io, Options, WordDict};

#[path = "common.rs"]
pub mod common;
use self::common::{create_benchmark_file, standard_criterion_config};

const SIZES_KB: [usize; 3] = [64, 512, 4096];

/// Builds a dictionary from the same file with every I/O strategy.
fn bench_io_strategies(c: &mut Criterion) {
    for size_kb in SIZES_KB {
        let (temp_file, file_path) = create_benchmark_file(size_kb);
        let file_content = std::fs::read(&file_path).expect("read benchmark file");

        let mut group = c.benchmark_group(format!("dict_{size_kb}kb"));
        group.throughput(Throughput::Bytes(file_content.len() as u64));

        for (io, name) in [(Io::Streamed, "streamed"), (Io::MemoryMapped, "mmap")] {
            let options = Options::default().with_io(io);
            group.bench_function(name, |b| {
                b.iter_batched(
                    || Input::new(&file_path, io).expect("create input"),
                    |input| black_box(WordDict::new(&input, &options).expect("build dictionary")),
                    BatchSize::LargeInput,
                );
            });
        }

        let options = Options::default();
        group.bench_function("bytes", |b| {
            b.iter_batched(
                || Input::from_bytes(&file_content),
                |input| black_box(WordDict::new(&input, &options).expect("build dictionary")),
                BatchSize::LargeInput,
            );
        });

        group.finish();
        drop(temp_file);
    }
}

/// Drains the reader alone to show how chunk size trades swaps against memory.
fn bench_reader_chunk_sizes(c: &mut Criterion) {
    let (temp_file, file_path) = create_benchmark_file(4096);
    let len = std::fs::metadata(&file_path).expect("stat benchmark file").len();

    let mut group = c.benchmark_group("reader_chunk_size");
    group.throughput(Throughput::Bytes(len));

    for chunk_size in [512, 8 * 1024, 64 * 1024, 256 * 1024, 1024 * 1024] {
        group.bench_function(chunk_size.to_string(), |b| {
            b.iter(|| {
                let reader = DoubleBufferedReader::<u8>::open(&file_path, chunk_size)
                    .expect("open reader");
                black_box(reader.fold(0_u64, |sum, byte| sum + u64::from(byte)))
            });
        });
    }

    group.finish();
    drop(temp_file);
}

criterion_group! {
    name = benches;
    config = standard_criterion_config();
    targets = bench_io_strategies, bench_reader_chunk_sizes
}
criterion_main!(benches);

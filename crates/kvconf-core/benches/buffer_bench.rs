//! Criterion benchmarks for opening and flushing a [`ConfigBuffer`].
//!
//! Files are generated under the system temp directory with a mix of comments,
//! blank lines and pairs, roughly one comment and one blank run per ten keys.
//!
//! Run with:
//! ```bash
//! cargo bench --package kvconf-core --bench buffer_bench
//! ```

use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kvconf_core::{ConfigBuffer, Item};
use uuid::Uuid;

/// Writes a config file with `keys` pairs and returns its path.
fn make_file(keys: usize) -> PathBuf {
    let path = std::env::temp_dir().join(format!("kvconf_bench_{}.conf", Uuid::new_v4()));
    let mut out = ConfigBuffer::open_write(&path).expect("open for benchmark setup");
    for i in 0..keys {
        if i % 10 == 0 {
            out.put_comment(&format!(" section {}", i / 10));
        }
        out.put(&format!("key_{i}"), i as u64);
        if i % 10 == 9 {
            out.put_blank_lines(1);
        }
    }
    out.flush().expect("flush for benchmark setup");
    path
}

/// Benchmarks `open_read` (open + full parse).
fn bench_open_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_read");
    for keys in [10usize, 100, 1000] {
        let path = make_file(keys);
        group.bench_with_input(BenchmarkId::new("keys", keys), &path, |b, path| {
            b.iter(|| ConfigBuffer::open_read(black_box(path)).expect("open must succeed"))
        });
        std::fs::remove_file(&path).ok();
    }
    group.finish();
}

/// Benchmarks copying a file through iteration and `put_item`, then flushing.
fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");
    for keys in [10usize, 100, 1000] {
        let src_path = make_file(keys);
        let dst_path = std::env::temp_dir().join(format!("kvconf_bench_{}.conf", Uuid::new_v4()));
        let src = ConfigBuffer::open_read(&src_path).expect("open for benchmark setup");

        group.bench_with_input(BenchmarkId::new("keys", keys), &src, |b, src| {
            b.iter(|| {
                let mut dst = ConfigBuffer::open_write(&dst_path).expect("open must succeed");
                for item in src.iter() {
                    dst.put_item(black_box::<Item<'_>>(item));
                }
                dst.flush().expect("flush must succeed")
            })
        });

        std::fs::remove_file(&src_path).ok();
        std::fs::remove_file(&dst_path).ok();
    }
    group.finish();
}

criterion_group!(benches, bench_open_read, bench_copy);
criterion_main!(benches);

//! Criterion benchmarks for the kvconf line format.
//!
//! Measures line classification and list splitting/joining, the per-line work
//! done while loading and flushing a buffer.
//!
//! Run with:
//! ```bash
//! cargo bench --package kvconf-core --bench format_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kvconf_core::format::{join_list, parse_line, split_list};

// ── Benchmark groups ──────────────────────────────────────────────────────────

/// Benchmarks `parse_line` for each kind of line.
fn bench_parse_line(c: &mut Criterion) {
    let lines: &[(&str, &str)] = &[
        ("blank", ""),
        ("comment", "# the port the server listens on"),
        ("pair", "listen_port=8080"),
        ("pair_with_equals", "dsn=postgres://u:p@host/db?sslmode=require&x=y"),
        ("bare_key", "enable_feature_x"),
        ("crlf_pair", "name=Ada Lovelace\r"),
    ];

    let mut group = c.benchmark_group("parse_line");
    for (name, line) in lines {
        group.bench_with_input(BenchmarkId::new("line", name), line, |b, line| {
            b.iter(|| parse_line(black_box(line)))
        });
    }
    group.finish();
}

/// Benchmarks splitting and joining list values of increasing length.
fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");
    for len in [4usize, 64, 1024] {
        let values: Vec<i64> = (0..len as i64).collect();
        let joined = join_list(&values, ' ').expect("join must succeed for benchmark setup");

        group.bench_with_input(BenchmarkId::new("join", len), &values, |b, values| {
            b.iter(|| join_list(black_box(values), ' ').expect("join must succeed"))
        });
        group.bench_with_input(BenchmarkId::new("split", len), &joined, |b, joined| {
            b.iter(|| split_list(black_box(joined), ' ').count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_lists);
criterion_main!(benches);

//! Benchmark both engines run to completion, with `memchr::memmem` as an
//! ecosystem baseline for the same haystacks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use stepfind::{Algorithm, BadCharTable, LpsTable, Session};

criterion_main! { benches }
criterion_group! { benches, bench_run_to_end, bench_tables }

fn bench_run_to_end(c: &mut Criterion) {
    let text = benches::haystack(64 * 1024, b"abcd", 17);
    let pattern = benches::window(&text, 1000, 8);

    let mut g = c.benchmark_group("run_to_end");
    g.bench_function("kmp", |b| {
        b.iter(|| {
            let mut session = Session::new(&text, &pattern, Algorithm::Kmp).unwrap();
            black_box(session.run_to_end().len())
        });
    });
    g.bench_function("boyer_moore", |b| {
        b.iter(|| {
            let mut session = Session::new(&text, &pattern, Algorithm::BoyerMoore).unwrap();
            black_box(session.run_to_end().len())
        });
    });
    g.bench_function("memmem", |b| {
        b.iter(|| black_box(memchr::memmem::find_iter(&text, &pattern).count()));
    });
    g.finish();
}

fn bench_tables(c: &mut Criterion) {
    let text = benches::haystack(4 * 1024, b"ab", 31);
    let pattern = benches::window(&text, 100, 64);

    let mut g = c.benchmark_group("tables");
    g.bench_function("lps", |b| {
        b.iter(|| black_box(LpsTable::build(&pattern).unwrap()));
    });
    g.bench_function("bad_char", |b| {
        b.iter(|| black_box(BadCharTable::build(&pattern).unwrap()));
    });
    g.finish();
}

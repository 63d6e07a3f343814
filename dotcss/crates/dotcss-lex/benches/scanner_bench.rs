//! Scanner Benchmarks
//!
//! Measures scanner throughput on typical stylesheet text.
//! Run with: `cargo bench --package dotcss-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dotcss_lex::{tokenize, Scanner, ScannerOptions};

fn token_count(source: &str) -> usize {
    // Scanner implements Iterator, so we can count directly
    Scanner::new(source).count()
}

fn bench_scanner_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "a:hover { color: #ff0000; margin: 0 auto !important; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_rule", |b| {
        b.iter(|| token_count(black_box("a { color: red }")))
    });

    group.bench_function("rule_with_selector", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_stylesheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_stylesheet");

    let source = r#"
        @charset "utf-8";
        @import url(reset.css);

        /* Layout */
        .container {
            display: grid;
            grid-template-columns: 1fr 2fr;
            gap: 1.5em;
            max-width: 960px;
        }

        a[href^="https"], a[href$='.pdf'] {
            text-decoration: underline;
            transition: color 300ms ease-in;
        }

        @media screen and (min-resolution: 96dpi) {
            .icon { transform: rotate(45deg); width: 50%; }
        }

        <!-- .legacy { --main-color: #0a0b0c; } -->
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("default_options", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.bench_function("lossless", |b| {
        b.iter(|| tokenize(black_box(source), ScannerOptions::LOSSLESS).len())
    });

    group.finish();
}

fn bench_scanner_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("content: \"x\";")))
    });

    group.bench_function("long_string", |b| {
        let source = "font-family: \"A rather long font family name used for benchmarking\";";
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_numbers");

    group.bench_function("plain", |b| {
        b.iter(|| token_count(black_box("z-index: 100;")))
    });

    group.bench_function("dimensions", |b| {
        b.iter(|| token_count(black_box("margin: 1px 2em 3.5ex .25rem;")))
    });

    group.finish();
}

fn bench_scanner_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_comments");

    let comment = format!("/*{}*/ a {{}}", " lorem ipsum *".repeat(64));
    group.throughput(Throughput::Bytes(comment.len() as u64));

    group.bench_function("long_comment", |b| {
        b.iter(|| token_count(black_box(&comment)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scanner_rules,
    bench_scanner_stylesheet,
    bench_scanner_strings,
    bench_scanner_numbers,
    bench_scanner_comments
);
criterion_main!(benches);

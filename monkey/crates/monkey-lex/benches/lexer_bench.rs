//! Lexer Benchmarks
//!
//! Measures lexer throughput.
//! Run with: `cargo bench --package monkey-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use monkey_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let add = fn(x, y) { x + y; }; let result = add(five, ten);";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let five = 5;")))
    });

    group.bench_function("function_literal", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let unit = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        !-/*5;
        5 < 10 > 5;
    "#;
    let source = unit.repeat(200);

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_program", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_runs");

    let ident = "a".repeat(4096);
    let number = "7".repeat(4096);
    let spaces = format!("{}x", " \t\r\n".repeat(1024));

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box(&ident)))
    });

    group.bench_function("long_number", |b| {
        b.iter(|| lexer_token_count(black_box(&number)))
    });

    group.bench_function("whitespace", |b| {
        b.iter(|| lexer_token_count(black_box(&spaces)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_runs
);
criterion_main!(benches);

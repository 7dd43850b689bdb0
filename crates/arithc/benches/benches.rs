use arithc::{evaluate, lex, parse, to_postfix};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_main!(benches);
criterion_group!(benches, bench_pipeline, bench_deep_nesting);

const EXAMPLE: &str = "-9 * 2 / -(3 + 7) + ((-4 * 1/2) - -21)";

fn bench_pipeline(c: &mut Criterion) {
    let tokens = lex(EXAMPLE).unwrap();
    let tree = parse(&tokens).unwrap();

    let mut group = c.benchmark_group("example");
    group.bench_function("lex", |b| {
        b.iter(|| lex(black_box(EXAMPLE)));
    });
    group.bench_function("parse", |b| {
        b.iter(|| parse(black_box(&tokens)));
    });
    group.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(&tree)));
    });
    group.bench_function("postfix", |b| {
        b.iter(|| to_postfix(black_box(&tree)));
    });
    group.finish();
}

fn bench_deep_nesting(c: &mut Criterion) {
    let input = format!("{}1{}", "(".repeat(200), " + 1)".repeat(200));
    let tokens = lex(&input).unwrap();

    let mut group = c.benchmark_group("nested");
    group.bench_function("parse", |b| {
        b.iter(|| parse(black_box(&tokens)));
    });
    group.finish();
}

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use svgelm::{parse_svg, Svg};

const SIMPLE_SVG: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24"><path d="M1,1 L2,2z"/></svg>"#;
const NESTED_SVG: &str = r#"<svg width="59" height="59" viewBox="0 0 59 59"><g fill-rule="nonzero"><path d="M22 23.414L23.414 22 36.87 35.456l-1.414 1.414z"/><path d="M36.87 23.414L35.456 22 22 35.456l1.414 1.414z"/></g></svg>"#;

fn bench_simple(c: &mut Criterion) {
    c.bench_function("svgelm_parse_simple", |b| {
        b.iter(|| parse_svg(black_box(SIMPLE_SVG)))
    });
}

fn bench_nested(c: &mut Criterion) {
    c.bench_function("svgelm_parse_nested", |b| {
        b.iter(|| parse_svg(black_box(NESTED_SVG)))
    });
}

fn bench_emit(c: &mut Criterion) {
    let svg: Svg = parse_svg(NESTED_SVG).unwrap_or_else(|e| panic!("bench input should parse: {e}"));
    c.bench_function("svgelm_emit_view_body", |b| {
        b.iter(|| svgelm::elm::view_body(black_box(&svg)))
    });
}

criterion_group!(benches, bench_simple, bench_nested, bench_emit);
criterion_main!(benches);

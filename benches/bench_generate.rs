use criterion::{Criterion, criterion_group, criterion_main};

use hexpaint::color::Color;
use hexpaint::generate::render;
use hexpaint::size::Size;

fn bench_parse_hex(c: &mut Criterion) {
    c.bench_function("parse_hex_long_and_short", |b| {
        b.iter(|| {
            let _ = Color::parse("1a2b3c");
            let _ = Color::parse("abc");
            let _ = Color::parse("not-a-color");
        })
    });
}

fn bench_render_default_size(c: &mut Criterion) {
    let color = Color::parse("ff8000").expect("valid color");
    c.bench_function("render_800x600", |b| {
        b.iter(|| {
            let _ = render(&color, Size::default());
        })
    });
}

criterion_group!(benches, bench_parse_hex, bench_render_default_size);
criterion_main!(benches);

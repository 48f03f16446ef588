use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use himl::{from_str, to_string, Object};

fn sample_document() -> String {
    let mut root = Object::new();
    root.set("version", 3);
    root.set("title", "benchmark fixture");

    let mut server = Object::with_name("server");
    server.set("host", "localhost");
    server.set("port", 8080);
    server.set("motd", "hello \"world\"\nsecond line");
    root.add(server);

    let mut modes = Object::with_name("modes");
    for mode in ["fast", "safe", "verbose", "dry_run"] {
        modes.add(mode);
    }
    root.add(modes);

    to_string(&root)
}

fn flat_document(pairs: u32) -> String {
    let mut root = Object::new();
    for i in 0..pairs {
        root.set(format!("key_{i}"), format!("value_{i}"));
    }
    to_string(&root)
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = sample_document();

    c.bench_function("parse_simple_document", |b| {
        b.iter(|| from_str(black_box(&text)))
    });
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let tree = from_str(&sample_document()).unwrap();

    c.bench_function("serialize_simple_document", |b| {
        b.iter(|| to_string(black_box(&tree)))
    });
}

fn benchmark_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    for size in [10u32, 100, 1000].iter() {
        let text = flat_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serialize_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_flat");

    for size in [10u32, 100, 1000].iter() {
        let tree = from_str(&flat_document(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_quoted_strings(c: &mut Criterion) {
    let mut root = Object::new();
    for i in 0..100 {
        root.set(
            format!("key_{i}"),
            "needs \"quoting\"\tand\nescapes \\ everywhere",
        );
    }
    let text = to_string(&root);

    let mut group = c.benchmark_group("quoted_strings");
    group.bench_function("serialize", |b| b.iter(|| to_string(black_box(&root))));
    group.bench_function("parse", |b| b.iter(|| from_str(black_box(&text))));
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = sample_document();

    c.bench_function("roundtrip_simple", |b| {
        b.iter(|| {
            let tree = from_str(black_box(&text)).unwrap();
            to_string(black_box(&tree))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_serialize_simple,
    benchmark_parse_flat,
    benchmark_serialize_flat,
    benchmark_quoted_strings,
    benchmark_roundtrip
);
criterion_main!(benches);

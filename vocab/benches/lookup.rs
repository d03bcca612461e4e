//! Benchmarks for registry and catalog lookups.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rdf_vocab::{Catalog, Declaration, VocabularyRegistry};

fn bench_term_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("term_lookup");
    group.throughput(Throughput::Elements(1));

    let schema = Catalog::builtin().get("schema").expect("schema vocabulary");
    let ical = Catalog::builtin().get("ical").expect("ical vocabulary");

    group.bench_function("schema_person", |b| {
        b.iter(|| black_box(schema.term(black_box("Person"))));
    });

    group.bench_function("ical_dtend", |b| {
        b.iter(|| black_box(ical.term(black_box("dtend"))));
    });

    group.bench_function("strict_miss", |b| {
        b.iter(|| black_box(schema.term(black_box("Bogus"))));
    });

    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    group.throughput(Throughput::Elements(1));

    let catalog = Catalog::builtin();

    group.bench_function("expand", |b| {
        b.iter(|| black_box(catalog.expand(black_box("vcard:hasEmail"))));
    });

    group.bench_function("compact", |b| {
        b.iter(|| black_box(catalog.compact(black_box("http://purl.org/ontology/mo/MusicArtist"))));
    });

    group.bench_function("find_term", |b| {
        b.iter(|| black_box(catalog.find_term(black_box("http://rdfs.org/sioc/ns#has_container"))));
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_build");

    for size in [16, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        let declarations: Vec<Declaration> = (0..*size)
            .map(|i| Declaration::property(format!("p{i}")).with_label(format!("property {i}")))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(VocabularyRegistry::create(
                    "http://example.org/ns#",
                    declarations.iter().cloned(),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_term_lookup, bench_catalog, bench_build);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playset::dataset::DatasetKind;
use playset::sample::seeded_rng;
use playset::shuffle::shuffle;

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for kind in DatasetKind::ALL {
        let n = kind.problem().default_sample_count();
        group.bench_function(format!("{kind}_n{n}"), |b| {
            b.iter(|| {
                let mut rng = seeded_rng("42");
                kind.generate(black_box(n), black_box(0.25), &mut rng)
            })
        });
    }

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let data = DatasetKind::Circle.generate(1000, 0.1, &mut seeded_rng("42"));

    c.bench_function("shuffle_n1000", |b| {
        b.iter(|| {
            let mut items = data.clone();
            shuffle(black_box(&mut items), &mut seeded_rng("7"));
            items
        })
    });
}

criterion_group!(benches, bench_generators, bench_shuffle);
criterion_main!(benches);

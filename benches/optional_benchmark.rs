use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use inplace_optional::Optional;

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Optional vs Option: construct");

    group.bench_function("Option::Some", |b| {
        b.iter(|| {
            black_box(Some(black_box(42u64)));
        })
    });

    group.bench_function("Optional::some", |b| {
        b.iter(|| {
            let _ = black_box(Optional::some(black_box(42u64)));
        })
    });

    group.bench_function("Optional::from_fn", |b| {
        b.iter(|| {
            let _ = black_box(Optional::from_fn(|| black_box(42u64)));
        })
    });

    group.finish();
}

fn bench_emplace(c: &mut Criterion) {
    let mut group = c.benchmark_group("Optional vs Option: emplace");

    group.bench_function("Option::insert (String)", |b| {
        b.iter_batched(
            || Some(String::from("previous")),
            |mut opt| {
                black_box(opt.insert(String::from("next")));
                opt
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Optional::emplace (String)", |b| {
        b.iter_batched(
            || Optional::some(String::from("previous")),
            |mut opt| {
                black_box(opt.emplace(String::from("next")));
                opt
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("Optional vs Option: release");

    group.bench_function("Option::take", |b| {
        b.iter_batched(
            || Some(vec![0u8; 64]),
            |mut opt| black_box(opt.take()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Optional::release", |b| {
        b.iter_batched(
            || Optional::some(vec![0u8; 64]),
            |mut opt| black_box(opt.release()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Optional::value_or (inactive)", |b| {
        let empty: Optional<u64> = Optional::new();
        b.iter(|| black_box(empty.value_or(black_box(7))))
    });

    group.finish();
}

criterion_group!(benches, bench_construct, bench_emplace, bench_release);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_rs::{BirthInput, CivilDate, Gender, chart, daily_fortune, pillars};

fn rs_bench(c: &mut Criterion) {
    let input = BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male).with_city("Seoul");

    let mut group = c.benchmark_group("ganzhi_rs");
    group.bench_function("pillars", |b| b.iter(|| pillars(black_box(&input))));
    group.bench_function("chart", |b| b.iter(|| chart(black_box(&input))));
    group.bench_function("daily_fortune", |b| {
        b.iter(|| daily_fortune(black_box(&input), CivilDate::new(2024, 2, 10)))
    });
    group.finish();
}

criterion_group!(benches, rs_bench);
criterion_main!(benches);

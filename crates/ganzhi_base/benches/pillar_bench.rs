use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{
    Branch, ElementScores, Pillar, PillarConfig, branch_relation, complete_triads,
    day_pillar_for_date, four_pillars,
};
use ganzhi_time::{Location, NormalizeRequest, normalize};

fn pillar_bench(c: &mut Criterion) {
    let req = NormalizeRequest {
        year: 1990,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        is_lunar: false,
        is_leap_month: false,
        location: Location::new("ref", 127.0, 540),
    };
    let Ok(instant) = normalize(&req) else {
        return;
    };
    let config = PillarConfig::default();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("normalize", |b| b.iter(|| normalize(black_box(&req))));
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&instant), &config))
    });
    group.bench_function("day_pillar_for_date", |b| {
        b.iter(|| day_pillar_for_date(black_box(2024), black_box(2), black_box(10)))
    });
    group.finish();
}

fn scoring_bench(c: &mut Criterion) {
    let pillars = ganzhi_base::FourPillars {
        year: Pillar::from_cycle_index(5),
        month: Pillar::from_cycle_index(12),
        day: Pillar::from_cycle_index(1),
        hour: Pillar::from_cycle_index(24),
    };
    let branches = pillars.branches();

    let mut group = c.benchmark_group("scoring");
    group.bench_function("element_scores", |b| {
        b.iter(|| ElementScores::from_pillars(black_box(&pillars)))
    });
    group.bench_function("branch_relation", |b| {
        b.iter(|| branch_relation(black_box(Branch::Zi), black_box(Branch::Chou)))
    });
    group.bench_function("complete_triads", |b| {
        b.iter(|| complete_triads(black_box(&branches)))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, scoring_bench);
criterion_main!(benches);

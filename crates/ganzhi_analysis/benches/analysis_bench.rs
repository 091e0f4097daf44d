use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_analysis::{
    BirthInput, ChartConfig, FortuneConfig, Gender, RelationshipContext, chart_for_birth,
    compatibility, daily_fortune_range, major_fortune,
};
use ganzhi_time::CivilDate;

fn analysis_bench(c: &mut Criterion) {
    let cfg = ChartConfig::default();
    let input_a = BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male).with_city("Seoul");
    let input_b = BirthInput::solar(1992, 8, 21, 14, 5, Gender::Female).with_city("Busan");
    let (Ok(a), Ok(b)) = (chart_for_birth(&input_a, &cfg), chart_for_birth(&input_b, &cfg)) else {
        return;
    };
    let fortune_cfg = FortuneConfig::default();

    let mut group = c.benchmark_group("analysis");
    group.bench_function("chart_for_birth", |bn| {
        bn.iter(|| chart_for_birth(black_box(&input_a), &cfg))
    });
    group.bench_function("compatibility", |bn| {
        bn.iter(|| compatibility(black_box(&a), black_box(&b), RelationshipContext::Romantic))
    });
    group.bench_function("major_fortune", |bn| {
        bn.iter(|| major_fortune(black_box(&a), &fortune_cfg))
    });
    group.bench_function("daily_fortune_week", |bn| {
        bn.iter(|| {
            daily_fortune_range(
                black_box(&a),
                CivilDate::new(2024, 3, 1),
                CivilDate::new(2024, 3, 7),
                &fortune_cfg,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, analysis_bench);
criterion_main!(benches);

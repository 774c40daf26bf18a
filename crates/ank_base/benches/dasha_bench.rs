use ank_base::dasha::{TilerConfig, daily_timeline, find_active_period, monthly_timeline};
use ank_base::{
    ActiveLayers, DashaLevel, DashaTimelines, Language, RecurrenceOptions, RecurrenceTable,
    YogaCatalog, analyze_recurrences, build_grid, dynamic_yogas, evaluate_yogas,
};
use ank_time::{BirthDate, NaiveDate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn timeline_bench(c: &mut Criterion) {
    let dob = BirthDate::new(22, 4, 1987);
    let cfg = TilerConfig::default();

    let mut group = c.benchmark_group("timelines");
    group.bench_function("maha_yearly_120y", |b| {
        b.iter(|| DashaTimelines::build(black_box(&dob), &cfg))
    });
    group.bench_function("monthly_one_year", |b| {
        b.iter(|| monthly_timeline(black_box(&dob), 2025))
    });
    group.bench_function("daily_one_year", |b| {
        b.iter(|| daily_timeline(black_box(&dob), 2025))
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let dob = BirthDate::new(22, 4, 1987);
    let timelines = DashaTimelines::build(&dob, &TilerConfig::default());
    let daily = daily_timeline(&dob, 2025);
    let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap_or_default();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("yearly_find", |b| {
        b.iter(|| find_active_period(&timelines.yearly, black_box(date)))
    });
    group.bench_function("daily_find", |b| {
        b.iter(|| find_active_period(&daily, black_box(date)))
    });
    group.bench_function("snapshot", |b| {
        b.iter(|| timelines.snapshot(&dob, black_box(date)))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let yogas = YogaCatalog::from_json_str(
        r#"[{"numbers":[1,2]},{"activation_rules":{"allOf":[3,6,9]}},{"numbers":[4,8],"combo":{"destiny":[6]}}]"#,
    )
    .unwrap_or_default();
    let table = RecurrenceTable::from_json_str(r#"{"2":{"2":"x","3+":"y"},"4":{"default":"z"}}"#)
        .unwrap_or_default();
    let dob = BirthDate::new(22, 4, 1987);
    let grid = build_grid(&dob, false);
    let timelines = DashaTimelines::build(&dob, &TilerConfig::default());
    let snap = timelines.snapshot(&dob, NaiveDate::from_ymd_opt(2025, 11, 3).unwrap_or_default());
    let layers = ActiveLayers::for_view(&snap, DashaLevel::Daily);
    let opts = RecurrenceOptions::default();

    let mut group = c.benchmark_group("analysis");
    group.bench_function("grid", |b| b.iter(|| build_grid(black_box(&dob), false)));
    group.bench_function("yogas", |b| {
        b.iter(|| evaluate_yogas(&yogas, black_box(&grid.histogram), &grid.core, Language::English))
    });
    group.bench_function("recurrences", |b| {
        b.iter(|| analyze_recurrences(&table, black_box(&grid.histogram), &grid.core, &opts))
    });
    group.bench_function("dynamic_yogas", |b| {
        b.iter(|| {
            dynamic_yogas(&yogas, black_box(&grid.histogram), &layers, &grid.core, Language::English)
        })
    });
    group.finish();
}

criterion_group!(benches, timeline_bench, lookup_bench, analysis_bench);
criterion_main!(benches);

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use scene_chart::core::{PriceRecord, Viewport, aggregate_by_year, filter_by_year_range};
use scene_chart::{SceneController, SceneKind};
use std::hint::black_box;

// Roughly one century of weekday samples.
fn synthetic_dataset() -> Vec<PriceRecord> {
    let start = NaiveDate::from_ymd_opt(1927, 1, 3).expect("valid date");
    (0u64..24_000)
        .filter_map(|i| {
            let date = start.checked_add_days(chrono::Days::new(i * 7 / 5))?;
            let base = 20 + (i as i64) / 12;
            Some(PriceRecord::new(
                date,
                Decimal::from(base),
                Decimal::from(base + 2),
                Decimal::from(base - 2),
                Decimal::from(base + 1),
            ))
        })
        .collect()
}

fn bench_filter_by_year_range(c: &mut Criterion) {
    let dataset = synthetic_dataset();

    c.bench_function("filter_by_year_range_century", |b| {
        b.iter(|| filter_by_year_range(black_box(&dataset), black_box(1946), black_box(1999)))
    });
}

fn bench_aggregate_by_year(c: &mut Criterion) {
    let dataset = synthetic_dataset();

    c.bench_function("aggregate_by_year_century", |b| {
        b.iter(|| aggregate_by_year(black_box(&dataset)).expect("aggregate"))
    });
}

fn bench_line_render_plan(c: &mut Criterion) {
    let dataset = synthetic_dataset();
    let controller = SceneController::new(Viewport::default()).expect("controller");

    c.bench_function("line_render_plan_full_deck_scene", |b| {
        b.iter(|| {
            controller
                .render_plan(black_box(&dataset))
                .expect("line plan")
        })
    });
}

fn bench_bar_render_plan(c: &mut Criterion) {
    let dataset = synthetic_dataset();
    let mut controller = SceneController::new(Viewport::default()).expect("controller");
    while controller.current_scene().kind != SceneKind::Explore {
        controller.advance();
    }

    c.bench_function("bar_render_plan_exploration", |b| {
        b.iter(|| {
            controller
                .render_plan(black_box(&dataset))
                .expect("bar plan")
        })
    });
}

criterion_group!(
    benches,
    bench_filter_by_year_range,
    bench_aggregate_by_year,
    bench_line_render_plan,
    bench_bar_render_plan
);
criterion_main!(benches);

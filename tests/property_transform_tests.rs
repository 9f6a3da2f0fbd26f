use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use scene_chart::core::{PriceRecord, aggregate_by_year, filter_by_year_range};

fn arb_record() -> impl Strategy<Value = PriceRecord> {
    (
        1900i32..2030,
        1u32..=12,
        1u32..=28,
        1i64..10_000,
        0i64..5_000,
    )
        .prop_map(|(year, month, day, low, spread)| {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
            let low = Decimal::from(low);
            let high = low + Decimal::from(spread);
            PriceRecord::new(date, low, high, low, high)
        })
}

proptest! {
    #[test]
    fn filter_keeps_only_years_inside_the_bounds(
        records in proptest::collection::vec(arb_record(), 0..128),
        start in 1900i32..2030,
        span in 0i32..60
    ) {
        let end = start + span;
        let filtered = filter_by_year_range(&records, start, end);

        for record in &filtered {
            prop_assert!(record.year() >= start && record.year() <= end);
        }

        let expected = records
            .iter()
            .filter(|r| r.year() >= start && r.year() <= end)
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn filter_preserves_relative_order(
        records in proptest::collection::vec(arb_record(), 0..128),
        start in 1900i32..2030,
        span in 0i32..60
    ) {
        let filtered = filter_by_year_range(&records, start, start + span);

        let mut cursor = records.iter();
        for kept in &filtered {
            prop_assert!(cursor.any(|r| r == kept));
        }
    }

    #[test]
    fn aggregate_emits_distinct_ascending_years(
        records in proptest::collection::vec(arb_record(), 0..128)
    ) {
        let spans = aggregate_by_year(&records).expect("aggregate");

        for pair in spans.windows(2) {
            prop_assert!(pair[0].year < pair[1].year);
        }

        let mut input_years: Vec<i32> = records.iter().map(|r| r.year()).collect();
        input_years.sort_unstable();
        input_years.dedup();
        let output_years: Vec<i32> = spans.iter().map(|s| s.year).collect();
        prop_assert_eq!(output_years, input_years);
    }

    #[test]
    fn aggregate_span_matches_per_year_extrema(
        records in proptest::collection::vec(arb_record(), 1..128)
    ) {
        let spans = aggregate_by_year(&records).expect("aggregate");

        for span in &spans {
            let year_records: Vec<&PriceRecord> = records
                .iter()
                .filter(|r| r.date.year() == span.year)
                .collect();
            let max_high = year_records
                .iter()
                .map(|r| r.high)
                .max()
                .expect("non-empty year");
            let min_low = year_records
                .iter()
                .map(|r| r.low)
                .min()
                .expect("non-empty year");

            let expected = (max_high - min_low).to_f64().expect("fits f64");
            prop_assert!((span.range - expected).abs() <= 1e-9);
        }
    }
}

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::types::{PriceRecord, decimal_to_f64};
use crate::error::ChartResult;

/// Per-calendar-year trading span: `max(high) - min(low)` over that year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySpan {
    pub year: i32,
    pub range: f64,
}

/// Keeps records whose calendar year falls in `[start_year, end_year]`.
///
/// Input order is preserved. An inverted range simply matches nothing; the
/// caller-facing rejection policy for inverted ranges lives in the scene
/// controller.
#[must_use]
pub fn filter_by_year_range(
    records: &[PriceRecord],
    start_year: i32,
    end_year: i32,
) -> Vec<PriceRecord> {
    records
        .iter()
        .copied()
        .filter(|record| {
            let year = record.date.year();
            year >= start_year && year <= end_year
        })
        .collect()
}

/// Groups records by calendar year and emits one span per distinct year.
///
/// Years absent from the input are absent from the output (no zero-fill).
/// Output is ordered by ascending year regardless of input order.
pub fn aggregate_by_year(records: &[PriceRecord]) -> ChartResult<Vec<YearlySpan>> {
    let mut extrema: BTreeMap<i32, (Decimal, Decimal)> = BTreeMap::new();

    for record in records {
        extrema
            .entry(record.date.year())
            .and_modify(|(high, low)| {
                *high = (*high).max(record.high);
                *low = (*low).min(record.low);
            })
            .or_insert((record.high, record.low));
    }

    extrema
        .into_iter()
        .map(|(year, (high, low))| {
            Ok(YearlySpan {
                year,
                range: decimal_to_f64(high - low, "yearly range")?,
            })
        })
        .collect()
}

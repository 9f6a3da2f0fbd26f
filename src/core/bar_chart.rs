use serde::{Deserialize, Serialize};

use crate::core::band_scale::BandScale;
use crate::core::scale::LinearScale;
use crate::core::transform::YearlySpan;
use crate::core::types::PlotFrame;
use crate::error::{ChartError, ChartResult};

/// Hard floor for bar-chart years, independent of the requested filter.
pub const BAR_YEAR_FLOOR: i32 = 1923;
/// Hard ceiling for bar-chart years, independent of the requested filter.
pub const BAR_YEAR_CEILING: i32 = 2020;

const BAND_PADDING: f64 = 0.1;

/// Pixel-space rectangle for one aggregated year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Drops spans outside `[BAR_YEAR_FLOOR, BAR_YEAR_CEILING]`.
#[must_use]
pub fn clamp_bar_years(spans: &[YearlySpan]) -> Vec<YearlySpan> {
    spans
        .iter()
        .copied()
        .filter(|span| span.year >= BAR_YEAR_FLOOR && span.year <= BAR_YEAR_CEILING)
        .collect()
}

/// Fits bar-variant scales: year bands across the plot width, spans from zero
/// up to the maximum yearly range.
///
/// Returns `None` for the range scale when every yearly span is zero (a year
/// of rows with `high == low` aggregates to zero); the price domain is then
/// degenerate and bars sit flat on the baseline.
pub fn fit_bar_scales(
    spans: &[YearlySpan],
    frame: PlotFrame,
) -> ChartResult<(BandScale, Option<LinearScale>)> {
    let first = spans.first().ok_or_else(|| {
        ChartError::InvalidData("bar scales cannot be fitted to empty data".to_owned())
    })?;

    let mut max_range = first.range;
    for span in spans {
        if !span.range.is_finite() || span.range < 0.0 {
            return Err(ChartError::InvalidData(
                "yearly range must be finite and >= 0".to_owned(),
            ));
        }
        max_range = max_range.max(span.range);
    }

    let (x_start, x_end) = frame.x_range();
    let years = spans.iter().map(|span| span.year).collect();
    let band_scale = BandScale::new(years, x_start, x_end, BAND_PADDING)?;

    if max_range <= 0.0 {
        return Ok((band_scale, None));
    }

    let (y_bottom, y_top) = frame.bar_y_range();
    let range_scale = LinearScale::new(0.0, max_range, y_bottom, y_top)?;
    Ok((band_scale, Some(range_scale)))
}

/// Projects yearly spans into one rectangle per year, in span (ascending-year) order.
///
/// Without a range scale every bar anchors to the baseline with zero height.
pub fn project_year_bars(
    spans: &[YearlySpan],
    band_scale: &BandScale,
    range_scale: Option<LinearScale>,
    frame: PlotFrame,
) -> ChartResult<Vec<BarRect>> {
    let mut bars = Vec::with_capacity(spans.len());
    for span in spans {
        let x = band_scale.position(span.year).ok_or_else(|| {
            ChartError::InvalidData(format!("year {} is missing from the band scale", span.year))
        })?;
        let y = match range_scale {
            Some(scale) => scale.scale(span.range)?,
            None => frame.bar_inner_height,
        };
        bars.push(BarRect {
            x,
            y,
            width: band_scale.bandwidth(),
            height: frame.bar_inner_height - y,
        });
    }
    Ok(bars)
}

use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::time_scale::TimeScale;
use crate::core::types::{PlotFrame, PriceRecord, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Pixel-space vertex of the connected close-price polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Fits line-variant scales: time over the visible date extent, prices from
/// zero up to the maximum close.
///
/// Scales are recomputed fully on every call; nothing is retained between
/// renders. Returns `Ok(None)` when no close is positive: the price domain
/// is then degenerate and the record set has nothing drawable.
pub fn fit_line_scales(
    records: &[PriceRecord],
    frame: PlotFrame,
) -> ChartResult<Option<(TimeScale, LinearScale)>> {
    let first = records.first().ok_or_else(|| {
        ChartError::InvalidData("line scales cannot be fitted to empty data".to_owned())
    })?;

    let mut max_close = first.close;
    for record in records {
        max_close = max_close.max(record.close);
    }

    let max_close = decimal_to_f64(max_close, "close")?;
    if max_close <= 0.0 {
        return Ok(None);
    }

    let time_scale = TimeScale::from_records(records, frame.x_range())?;
    let (y_bottom, y_top) = frame.line_y_range();
    let price_scale = LinearScale::new(0.0, max_close, y_bottom, y_top)?;
    Ok(Some((time_scale, price_scale)))
}

/// Projects visible records into polyline vertices in input (chronological) order.
pub fn project_close_polyline(
    records: &[PriceRecord],
    time_scale: TimeScale,
    price_scale: LinearScale,
) -> ChartResult<Vec<PathPoint>> {
    let mut points = Vec::with_capacity(records.len());
    for record in records {
        points.push(PathPoint {
            x: time_scale.scale_date(record.date)?,
            y: price_scale.scale(decimal_to_f64(record.close, "close")?)?,
        });
    }
    Ok(points)
}

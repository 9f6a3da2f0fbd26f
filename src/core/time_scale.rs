use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{PriceRecord, date_to_unix_seconds};
use crate::error::{ChartError, ChartResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Time axis model over unix seconds, fitted to a visible date extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    /// Creates a scale over the inclusive date extent `[first, last]`.
    ///
    /// A single-day extent is widened by half a day on each side so the
    /// domain stays non-degenerate.
    pub fn from_dates(
        first: NaiveDate,
        last: NaiveDate,
        range_px: (f64, f64),
    ) -> ChartResult<Self> {
        let (mut start, mut end) = (date_to_unix_seconds(first), date_to_unix_seconds(last));
        if start > end {
            (start, end) = (end, start);
        }
        if start == end {
            start -= SECONDS_PER_DAY / 2.0;
            end += SECONDS_PER_DAY / 2.0;
        }

        Ok(Self {
            inner: LinearScale::new(start, end, range_px.0, range_px.1)?,
        })
    }

    /// Fits the scale to the date extent of a record slice.
    pub fn from_records(records: &[PriceRecord], range_px: (f64, f64)) -> ChartResult<Self> {
        let first = records.first().ok_or_else(|| {
            ChartError::InvalidData("time scale cannot be built from empty data".to_owned())
        })?;

        let mut min = first.date;
        let mut max = first.date;
        for record in records {
            min = min.min(record.date);
            max = max.max(record.date);
        }

        Self::from_dates(min, max, range_px)
    }

    #[must_use]
    pub fn domain_seconds(self) -> (f64, f64) {
        self.inner.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.inner.range()
    }

    pub fn scale_date(self, date: NaiveDate) -> ChartResult<f64> {
        self.inner.scale(date_to_unix_seconds(date))
    }

    pub fn scale_seconds(self, seconds: f64) -> ChartResult<f64> {
        self.inner.scale(seconds)
    }
}

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 400)
    }
}

/// One daily OHLC sample of the source series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl PriceRecord {
    #[must_use]
    pub fn new(date: NaiveDate, open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.date.year()
    }
}

/// Selector for the two geometry-building strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Line => Self::Bar,
            Self::Bar => Self::Line,
        }
    }
}

/// Pixel layout of the plot area inside a viewport.
///
/// The plot group sits at a fixed origin of (60, 20). Line charts keep a
/// bottom gutter for the time axis; bar charts keep a slightly taller one for
/// year tick labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub origin_x: f64,
    pub origin_y: f64,
    pub inner_width: f64,
    pub line_y_top: f64,
    pub line_y_bottom: f64,
    pub bar_inner_height: f64,
}

impl PlotFrame {
    pub fn from_viewport(viewport: Viewport) -> ChartResult<Self> {
        // The fixed margins need room: 80px horizontal, 60px vertical.
        if !viewport.is_valid() || viewport.width <= 80 || viewport.height <= 60 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        Ok(Self {
            origin_x: 60.0,
            origin_y: 20.0,
            inner_width: width - 80.0,
            line_y_top: 20.0,
            line_y_bottom: height - 40.0,
            bar_inner_height: height - 60.0,
        })
    }

    #[must_use]
    pub fn origin(self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.inner_width)
    }

    /// Inverted pixel range for the line-chart price axis.
    #[must_use]
    pub fn line_y_range(self) -> (f64, f64) {
        (self.line_y_bottom, self.line_y_top)
    }

    /// Inverted pixel range for the bar-chart range axis.
    #[must_use]
    pub fn bar_y_range(self) -> (f64, f64) {
        (self.bar_inner_height, 0.0)
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Maps a calendar date to unix seconds at midnight UTC.
#[must_use]
pub fn date_to_unix_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

//! Dataset-loading collaborator for hosts without their own parser.
//!
//! The core never performs I/O; hosts hand it a fully parsed record slice.
//! This module covers the common case of a `Date,Open,High,Low,Close,...`
//! CSV export: rows with an unparseable date or any non-numeric OHLC field
//! are skipped, matching the pre-filter the presentation applies upstream.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::PriceRecord;
use crate::error::{ChartError, ChartResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

struct ColumnLayout {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
}

impl ColumnLayout {
    fn from_header(header: &str) -> ChartResult<Self> {
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let index_of = |name: &str| {
            columns
                .iter()
                .position(|column| column.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    ChartError::InvalidData(format!("csv header is missing `{name}` column"))
                })
        };

        Ok(Self {
            date: index_of("Date")?,
            open: index_of("Open")?,
            high: index_of("High")?,
            low: index_of("Low")?,
            close: index_of("Close")?,
        })
    }

    fn parse_row(&self, row: &str) -> Option<PriceRecord> {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        let field = |index: usize| fields.get(index).copied();

        let date = NaiveDate::parse_from_str(field(self.date)?, DATE_FORMAT).ok()?;
        let open = Decimal::from_str(field(self.open)?).ok()?;
        let high = Decimal::from_str(field(self.high)?).ok()?;
        let low = Decimal::from_str(field(self.low)?).ok()?;
        let close = Decimal::from_str(field(self.close)?).ok()?;
        Some(PriceRecord::new(date, open, high, low, close))
    }
}

/// Parses CSV text into chronologically ordered records.
///
/// A missing or malformed header is fatal; malformed data rows are skipped.
pub fn parse_price_csv(input: &str) -> ChartResult<Vec<PriceRecord>> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| ChartError::InvalidData("csv input has no header row".to_owned()))?;
    let layout = ColumnLayout::from_header(header)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (line_number, row) in lines.enumerate() {
        if row.trim().is_empty() {
            continue;
        }

        match layout.parse_row(row) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                debug!(line = line_number + 2, "skipping unparseable csv row");
            }
        }
    }

    if skipped > 0 {
        debug!(parsed = records.len(), skipped, "csv load complete");
    }

    Ok(records)
}

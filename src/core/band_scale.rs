use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Categorical scale over ordered year keys with uniform padding.
///
/// Band layout follows the usual convention: `step = span / (n + padding)`,
/// `bandwidth = step * (1 - padding)`, bands centered inside the range.
/// Keys are expected to be distinct; the first occurrence wins on lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    keys: Vec<i32>,
    range_start: f64,
    range_end: f64,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    pub fn new(keys: Vec<i32>, range_start: f64, range_end: f64, padding: f64) -> ChartResult<Self> {
        if keys.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale requires at least one key".to_owned(),
            ));
        }

        if !range_start.is_finite() || !range_end.is_finite() || range_start >= range_end {
            return Err(ChartError::InvalidData(
                "band scale range must be finite and ascending".to_owned(),
            ));
        }

        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band scale padding must be in [0, 1)".to_owned(),
            ));
        }

        let n = keys.len() as f64;
        let span = range_end - range_start;
        let step = span / (n + padding);
        let bandwidth = step * (1.0 - padding);
        let offset = (span - step * (n - padding)) * 0.5;

        Ok(Self {
            keys,
            range_start,
            range_end,
            step,
            bandwidth,
            offset,
        })
    }

    #[must_use]
    pub fn keys(&self) -> &[i32] {
        &self.keys
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Left pixel edge of the band for `key`, or `None` for unknown keys.
    #[must_use]
    pub fn position(&self, key: i32) -> Option<f64> {
        let index = self.keys.iter().position(|candidate| *candidate == key)?;
        Some(self.range_start + self.offset + index as f64 * self.step)
    }
}

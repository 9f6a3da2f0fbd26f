//! Fixed historical-event annotations anchored to visible records.
//!
//! Events are keyed by `(year, month0, day)` in an insertion-ordered table so
//! placements are always emitted in table order, not match order. Month
//! values are zero-based, matching [`chrono::Datelike::month0`]; the default
//! table reproduces the source data literally under that convention.

use chrono::Datelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::types::decimal_to_f64;
use crate::core::{LinearScale, PriceRecord, TimeScale};
use crate::error::ChartResult;

/// One fixed historical event with its callout text and pixel offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationEvent {
    pub year: i32,
    /// Zero-based month (January = 0).
    pub month0: u32,
    pub day: u32,
    pub title: String,
    pub label: String,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl AnnotationEvent {
    #[must_use]
    pub fn new(
        year: i32,
        month0: u32,
        day: u32,
        title: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            year,
            month0,
            day,
            title: title.into(),
            label: label.into(),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_offsets(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    #[must_use]
    fn key(&self) -> (i32, u32, u32) {
        (self.year, self.month0, self.day)
    }
}

/// A labeled callout anchored to a specific record's projected position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPlacement {
    pub title: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Insertion-ordered lookup table of annotation events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationTable {
    events: IndexMap<(i32, u32, u32), AnnotationEvent>,
}

impl AnnotationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The five market events of the reference presentation.
    #[must_use]
    pub fn default_market_events() -> Self {
        Self::new()
            .with_event(
                AnnotationEvent::new(1929, 9, 29, "Black Tuesday", "1929 market crash")
                    .with_offsets(80.0, -40.0),
            )
            .with_event(
                AnnotationEvent::new(1987, 9, 19, "Black Monday", "1987: Largest one-day % drop")
                    .with_offsets(-90.0, -40.0),
            )
            .with_event(
                AnnotationEvent::new(2001, 2, 1, "Dot-Com Bubble", "2000–2002 tech crash")
                    .with_offsets(50.0, -50.0),
            )
            .with_event(
                AnnotationEvent::new(
                    2008,
                    8,
                    15,
                    "2008 Financial Crisis",
                    "Market fell after Lehman collapse",
                )
                .with_offsets(-15.0, 40.0),
            )
            .with_event(
                AnnotationEvent::new(
                    2020,
                    3,
                    15,
                    "2020 COVID-19 Pandemic",
                    "Market fell due to global pandemic",
                )
                .with_offsets(-60.0, -40.0),
            )
    }

    /// Inserts an event, replacing any existing event on the same date.
    pub fn insert(&mut self, event: AnnotationEvent) {
        self.events.insert(event.key(), event);
    }

    #[must_use]
    pub fn with_event(mut self, event: AnnotationEvent) -> Self {
        self.insert(event);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Resolves the table against the currently visible records.
    ///
    /// A single pass over `records` anchors each event to the first record
    /// whose `(year, month0, day)` matches; events without a visible match
    /// are silently dropped. Placements come out in table order.
    pub fn resolve(
        &self,
        records: &[PriceRecord],
        time_scale: TimeScale,
        price_scale: LinearScale,
    ) -> ChartResult<Vec<AnnotationPlacement>> {
        if self.events.is_empty() {
            return Ok(Vec::new());
        }

        let mut anchors: SmallVec<[Option<PriceRecord>; 5]> = smallvec![None; self.events.len()];
        for record in records {
            let key = (
                record.date.year(),
                record.date.month0(),
                record.date.day(),
            );
            if let Some(index) = self.events.get_index_of(&key) {
                if anchors[index].is_none() {
                    anchors[index] = Some(*record);
                }
            }
        }

        let mut placements = Vec::new();
        for (event, anchor) in self.events.values().zip(anchors) {
            let Some(record) = anchor else {
                continue;
            };

            placements.push(AnnotationPlacement {
                title: event.title.clone(),
                label: event.label.clone(),
                x: time_scale.scale_date(record.date)?,
                y: price_scale.scale(decimal_to_f64(record.close, "close")?)?,
                offset_x: event.offset_x,
                offset_y: event.offset_y,
            });
        }

        Ok(placements)
    }
}

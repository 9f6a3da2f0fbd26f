use serde::{Deserialize, Serialize};

use crate::annotations::AnnotationPlacement;
use crate::core::{BarRect, ChartKind, PathPoint, PlotFrame};
use crate::error::{ChartError, ChartResult};

pub const RENDER_PLAN_JSON_SCHEMA_V1: u32 = 1;

/// Scale domain handed to the drawing layer for axis rendering.
///
/// `Empty` marks a render with no visible records; the drawing layer must
/// tolerate it and paint no axis content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisDomain {
    Time { start_seconds: f64, end_seconds: f64 },
    Linear { min: f64, max: f64 },
    Band { years: Vec<i32> },
    Empty,
}

/// Domain/pixel-range pair for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub domain: AxisDomain,
    pub range_px: (f64, f64),
}

/// Backend-agnostic output of one render dispatch.
///
/// All coordinates are relative to `origin_px` inside the viewport. Exactly
/// one of `polyline`/`bars` is populated, matching `kind`; both may be empty
/// when the filtered record set is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub kind: ChartKind,
    pub origin_px: (f64, f64),
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub polyline: Vec<PathPoint>,
    pub bars: Vec<BarRect>,
    pub annotations: Vec<AnnotationPlacement>,
    pub description: String,
}

impl RenderPlan {
    /// A well-formed plan for a render with no visible records.
    #[must_use]
    pub fn empty(kind: ChartKind, frame: PlotFrame, description: String) -> Self {
        let y_range = match kind {
            ChartKind::Line => frame.line_y_range(),
            ChartKind::Bar => frame.bar_y_range(),
        };

        Self {
            kind,
            origin_px: frame.origin(),
            x_axis: AxisSpec {
                domain: AxisDomain::Empty,
                range_px: frame.x_range(),
            },
            y_axis: AxisSpec {
                domain: AxisDomain::Empty,
                range_px: y_range,
            },
            polyline: Vec::new(),
            bars: Vec::new(),
            annotations: Vec::new(),
            description,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.kind {
            ChartKind::Line if !self.bars.is_empty() => {
                return Err(ChartError::InvalidData(
                    "line plan must not carry bar rects".to_owned(),
                ));
            }
            ChartKind::Bar if !self.polyline.is_empty() || !self.annotations.is_empty() => {
                return Err(ChartError::InvalidData(
                    "bar plan must not carry polyline points or annotations".to_owned(),
                ));
            }
            _ => {}
        }

        for point in &self.polyline {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "polyline coordinates must be finite".to_owned(),
                ));
            }
        }

        for bar in &self.bars {
            if !bar.x.is_finite()
                || !bar.y.is_finite()
                || !bar.width.is_finite()
                || !bar.height.is_finite()
                || bar.width <= 0.0
                || bar.height < 0.0
            {
                return Err(ChartError::InvalidData(
                    "bar rects must be finite with width > 0 and height >= 0".to_owned(),
                ));
            }
        }

        for placement in &self.annotations {
            if !placement.x.is_finite()
                || !placement.y.is_finite()
                || !placement.offset_x.is_finite()
                || !placement.offset_y.is_finite()
            {
                return Err(ChartError::InvalidData(
                    "annotation placement must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderPlanJsonContractV1 {
            schema_version: RENDER_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render plan contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(plan) = serde_json::from_str::<RenderPlan>(input) {
            return Ok(plan);
        }
        let payload: RenderPlanJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render plan json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_PLAN_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}

/// Versioned JSON payload so hosts can persist or ship plans across a
/// process boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: RenderPlan,
}

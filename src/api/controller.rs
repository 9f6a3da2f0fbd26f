use tracing::{debug, trace};

use crate::annotations::AnnotationTable;
use crate::api::scenes::{Scene, SceneKind, default_scenes};
use crate::core::{
    ChartKind, LinearScale, PlotFrame, PriceRecord, Viewport, aggregate_by_year,
    bar_chart::{clamp_bar_years, fit_bar_scales, project_year_bars},
    filter_by_year_range,
    line_chart::{fit_line_scales, project_close_polyline},
};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisDomain, AxisSpec, RenderPlan};

const BAR_DESCRIPTION: &str =
    "Showing yearly trading Range (Highest Trading Value - Lowest Trading Value).";
const LINE_DESCRIPTION: &str = "Showing daily closing price.";

/// Viewer-controlled state of the exploration scene.
///
/// Fixed scenes never read it; only explicit toggle/range-change triggers
/// mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorationState {
    pub chart_kind: ChartKind,
    pub start_year: i32,
    pub end_year: i32,
}

/// The scene state machine and render dispatcher.
///
/// Owns the current scene index and the exploration state; every external
/// trigger funnels through here, and `render_plan` derives the active range,
/// runs the transforms, and builds the geometry for the drawing layer.
#[derive(Debug, Clone)]
pub struct SceneController {
    scenes: Vec<Scene>,
    current_index: usize,
    exploration: ExplorationState,
    annotations: AnnotationTable,
    viewport: Viewport,
}

impl SceneController {
    /// Creates a controller over the reference deck and annotation table.
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        Self::with_scenes(default_scenes(), viewport)
    }

    pub fn with_scenes(scenes: Vec<Scene>, viewport: Viewport) -> ChartResult<Self> {
        // Fails early on viewports too small for the fixed margins.
        PlotFrame::from_viewport(viewport)?;

        if scenes.is_empty() {
            return Err(ChartError::InvalidData(
                "scene deck must not be empty".to_owned(),
            ));
        }

        // The exploration range boots from the explore scene's own range.
        let explore = scenes.iter().find(|scene| scene.kind == SceneKind::Explore);
        let (start_year, end_year) = explore
            .map(|scene| (scene.start_year, scene.end_year))
            .unwrap_or((scenes[0].start_year, scenes[0].end_year));

        Ok(Self {
            scenes,
            current_index: 0,
            exploration: ExplorationState {
                chart_kind: ChartKind::Bar,
                start_year,
                end_year,
            },
            annotations: AnnotationTable::default_market_events(),
            viewport,
        })
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: AnnotationTable) -> Self {
        self.annotations = annotations;
        self
    }

    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_scene(&self) -> &Scene {
        &self.scenes[self.current_index]
    }

    #[must_use]
    pub fn exploration(&self) -> ExplorationState {
        self.exploration
    }

    /// Steps to the next scene, wrapping past the end of the deck.
    pub fn advance(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.scenes.len();
        debug!(index = self.current_index, "advance scene");
        self.current_index
    }

    /// Steps to the previous scene, wrapping past the start of the deck.
    pub fn retreat(&mut self) -> usize {
        self.current_index =
            (self.current_index + self.scenes.len() - 1) % self.scenes.len();
        debug!(index = self.current_index, "retreat scene");
        self.current_index
    }

    /// Flips bar/line on the exploration scene.
    ///
    /// A no-op returning `false` on fixed scenes.
    pub fn toggle_chart_kind(&mut self) -> bool {
        if self.current_scene().kind != SceneKind::Explore {
            trace!("ignoring chart kind toggle on fixed scene");
            return false;
        }

        self.exploration.chart_kind = self.exploration.chart_kind.toggled();
        debug!(kind = ?self.exploration.chart_kind, "toggle exploration chart kind");
        true
    }

    /// Updates the exploration year range.
    ///
    /// An inverted range (`start_year > end_year`) is rejected as a no-op
    /// returning `false`; prior state is retained.
    pub fn set_exploration_range(&mut self, start_year: i32, end_year: i32) -> bool {
        if start_year > end_year {
            trace!(start_year, end_year, "ignoring inverted exploration range");
            return false;
        }

        self.exploration.start_year = start_year;
        self.exploration.end_year = end_year;
        debug!(start_year, end_year, "set exploration range");
        true
    }

    /// The description string shown alongside the current render.
    #[must_use]
    pub fn description(&self) -> String {
        let scene = self.current_scene();
        match scene.kind {
            SceneKind::Fixed => scene.description.clone(),
            SceneKind::Explore => match self.exploration.chart_kind {
                ChartKind::Bar => BAR_DESCRIPTION.to_owned(),
                ChartKind::Line => LINE_DESCRIPTION.to_owned(),
            },
        }
    }

    /// Label for the chart-kind switch; `None` outside the exploration scene.
    #[must_use]
    pub fn toggle_label(&self) -> Option<&'static str> {
        if self.current_scene().kind != SceneKind::Explore {
            return None;
        }

        Some(match self.exploration.chart_kind {
            ChartKind::Bar => "Switch to Line Chart",
            ChartKind::Line => "Switch to Bar Chart",
        })
    }

    /// Runs the full pipeline for the current scene over `dataset`.
    ///
    /// Fixed scenes filter to their own range and always render the line
    /// variant; the exploration scene filters to the current exploration
    /// range and dispatches on the current chart kind.
    pub fn render_plan(&self, dataset: &[PriceRecord]) -> ChartResult<RenderPlan> {
        let scene = self.current_scene();
        match scene.kind {
            SceneKind::Fixed => {
                let filtered = filter_by_year_range(dataset, scene.start_year, scene.end_year);
                debug!(
                    scene = %scene.id,
                    visible = filtered.len(),
                    "render fixed scene"
                );
                self.build_line_plan(&filtered)
            }
            SceneKind::Explore => {
                let filtered = filter_by_year_range(
                    dataset,
                    self.exploration.start_year,
                    self.exploration.end_year,
                );
                debug!(
                    scene = %scene.id,
                    kind = ?self.exploration.chart_kind,
                    visible = filtered.len(),
                    "render exploration scene"
                );
                match self.exploration.chart_kind {
                    ChartKind::Line => self.build_line_plan(&filtered),
                    ChartKind::Bar => self.build_bar_plan(&filtered),
                }
            }
        }
    }

    fn build_line_plan(&self, records: &[PriceRecord]) -> ChartResult<RenderPlan> {
        let frame = PlotFrame::from_viewport(self.viewport)?;
        if records.is_empty() {
            return Ok(RenderPlan::empty(
                ChartKind::Line,
                frame,
                self.description(),
            ));
        }

        // No positive close leaves nothing to span a price domain; the
        // drawing layer gets an empty plan rather than an error.
        let Some((time_scale, price_scale)) = fit_line_scales(records, frame)? else {
            return Ok(RenderPlan::empty(
                ChartKind::Line,
                frame,
                self.description(),
            ));
        };
        let polyline = project_close_polyline(records, time_scale, price_scale)?;
        let annotations = self.annotations.resolve(records, time_scale, price_scale)?;

        let (start_seconds, end_seconds) = time_scale.domain_seconds();
        let (price_min, price_max) = price_scale.domain();
        Ok(RenderPlan {
            kind: ChartKind::Line,
            origin_px: frame.origin(),
            x_axis: AxisSpec {
                domain: AxisDomain::Time {
                    start_seconds,
                    end_seconds,
                },
                range_px: frame.x_range(),
            },
            y_axis: AxisSpec {
                domain: AxisDomain::Linear {
                    min: price_min,
                    max: price_max,
                },
                range_px: frame.line_y_range(),
            },
            polyline,
            bars: Vec::new(),
            annotations,
            description: self.description(),
        })
    }

    // The bar variant works on aggregated years, so date-exact annotation
    // anchoring is meaningless here; no placements are ever attached.
    fn build_bar_plan(&self, records: &[PriceRecord]) -> ChartResult<RenderPlan> {
        let frame = PlotFrame::from_viewport(self.viewport)?;
        let spans = clamp_bar_years(&aggregate_by_year(records)?);
        if spans.is_empty() {
            return Ok(RenderPlan::empty(ChartKind::Bar, frame, self.description()));
        }

        let (band_scale, range_scale) = fit_bar_scales(&spans, frame)?;
        let bars = project_year_bars(&spans, &band_scale, range_scale, frame)?;

        // All-zero spans collapse the y domain; bars come out flat.
        let (range_min, range_max) = range_scale
            .map(LinearScale::domain)
            .unwrap_or((0.0, 0.0));
        Ok(RenderPlan {
            kind: ChartKind::Bar,
            origin_px: frame.origin(),
            x_axis: AxisSpec {
                domain: AxisDomain::Band {
                    years: band_scale.keys().to_vec(),
                },
                range_px: frame.x_range(),
            },
            y_axis: AxisSpec {
                domain: AxisDomain::Linear {
                    min: range_min,
                    max: range_max,
                },
                range_px: frame.bar_y_range(),
            },
            polyline: Vec::new(),
            bars,
            annotations: Vec::new(),
            description: self.description(),
        })
    }
}

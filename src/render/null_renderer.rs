use crate::error::ChartResult;
use crate::render::{RenderPlan, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates plan content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_point_count: usize,
    pub last_bar_count: usize,
    pub last_annotation_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()> {
        plan.validate()?;
        self.last_point_count = plan.polyline.len();
        self.last_bar_count = plan.bars.len();
        self.last_annotation_count = plan.annotations.len();
        Ok(())
    }
}

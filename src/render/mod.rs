mod null_renderer;
mod plan;

pub use null_renderer::NullRenderer;
pub use plan::{
    AxisDomain, AxisSpec, RENDER_PLAN_JSON_SCHEMA_V1, RenderPlan, RenderPlanJsonContractV1,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic `RenderPlan`; they own
/// clearing prior output and painting, the plan owns everything else.
pub trait Renderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()>;
}

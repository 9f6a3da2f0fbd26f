//! scene-chart: scene-driven charting core for guided price-history narratives.
//!
//! This crate steps a viewer through a fixed deck of narrative scenes over a
//! historical OHLC series and computes, per render, a backend-agnostic
//! [`render::RenderPlan`]: scales, polyline/bar geometry, annotation
//! placements, and a description string. Painting is delegated to a host
//! [`render::Renderer`] implementation.

pub mod annotations;
pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Scene, SceneController, SceneKind, default_scenes};
pub use error::{ChartError, ChartResult};

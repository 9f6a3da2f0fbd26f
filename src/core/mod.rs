pub mod band_scale;
pub mod bar_chart;
pub mod line_chart;
pub mod scale;
pub mod time_scale;
pub mod transform;
pub mod types;

pub use band_scale::BandScale;
pub use bar_chart::{BAR_YEAR_CEILING, BAR_YEAR_FLOOR, BarRect};
pub use line_chart::PathPoint;
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use transform::{YearlySpan, aggregate_by_year, filter_by_year_range};
pub use types::{ChartKind, PlotFrame, PriceRecord, Viewport};

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Error surface of the charting core.
///
/// Policy no-ops (inverted exploration ranges, annotation dates outside the
/// visible filter, empty or degenerate filtered sets) are not errors; these
/// variants cover input the pipeline genuinely cannot work with.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("viewport {width}x{height} is too small for the fixed plot margins")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

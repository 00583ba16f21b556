//! Error module - Failures raised while validating or drawing a chart

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series `{series}` has no values to plot")]
    EmptySeries { series: String },

    #[error("series `{series}` has {values} values but its node axis has {axis}")]
    MismatchedLength {
        series: String,
        values: usize,
        axis: usize,
    },

    /// The drawing backend could not produce output (unwritable path, missing fonts, ...).
    #[error("drawing backend error: {0}")]
    Backend(String),

    #[error("invalid chart configuration: {0}")]
    Config(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

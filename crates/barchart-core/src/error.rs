// File: crates/barchart-core/src/error.rs
// Summary: Error kinds raised while resolving config, normalizing data, computing layout or mounting a surface.

use thiserror::Error;

/// Result alias for chart construction and surface mounting.
pub type ChartResult<T> = Result<T, ChartError>;

/// Every variant is a caller input error detected before the first draw call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Surface width or height is not a positive, finite number.
    #[error("invalid surface dimension {width}x{height}: both sides must be positive")]
    InvalidDimension { width: f64, height: f64 },

    /// The dataset has no points.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Margins leave no room for the plot area or the bars.
    #[error("degenerate layout: {0}")]
    DegenerateLayout(String),

    /// A data value the chart cannot draw (negative or non-finite).
    #[error("unsupported value {value} for `{label}` at index {index}")]
    UnsupportedValue { index: usize, label: String, value: f64 },

    /// A percentage ratio outside its accepted range.
    #[error("{name} must be in (0, 50), got {value}")]
    InvalidRatio { name: &'static str, value: f64 },

    /// A stroke width or font setting that cannot be drawn.
    #[error("invalid style `{name}`: {reason}")]
    InvalidStyle { name: &'static str, reason: String },

    /// A colour string that is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid colour `{0}`")]
    InvalidColor(String),

    /// The canvas provider could not allocate a surface.
    #[error("surface error: {0}")]
    Surface(String),
}

// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the bar chart construction, layout and render API.

pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod render;
pub mod surface;
pub mod types;
#[cfg(feature = "skia")]
pub mod raster;
#[cfg(feature = "skia")]
pub mod text;

pub use chart::{create_chart, BarChart, ChartHandle};
pub use color::{ColorProvider, FixedColors, RandomColors, Rgba};
pub use config::{ChartConfig, ChartOverrides, Style};
pub use data::{DataPoint, NormalizedData};
pub use error::{ChartError, ChartResult};
pub use layout::LayoutDescriptor;
pub use render::Stage;
pub use surface::{DrawCall, DrawingSurface, RecordingProvider, RecordingSurface, SurfaceProvider, TextAlign, TextBaseline};
pub use types::FontSpec;
#[cfg(feature = "skia")]
pub use raster::{SkiaProvider, SkiaSurface};
#[cfg(feature = "skia")]
pub use text::TextShaper;

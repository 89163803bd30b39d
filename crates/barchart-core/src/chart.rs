// File: crates/barchart-core/src/chart.rs
// Summary: Bar chart construction API; validates everything up front, then renders onto a borrowed surface.

use crate::color::{ColorProvider, RandomColors};
use crate::config::{ChartConfig, ChartOverrides};
use crate::data::{DataPoint, NormalizedData};
use crate::error::ChartResult;
use crate::layout::LayoutDescriptor;
use crate::render::{render, Frame};
use crate::surface::{DrawingSurface, SurfaceProvider};

/// A configured chart with its current dataset and layout.
///
/// Construction runs config resolution, data normalization and layout, so a
/// `BarChart` that exists can always be rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    config: ChartConfig,
    data: NormalizedData,
    layout: LayoutDescriptor,
}

impl BarChart {
    pub fn new(width: f64, height: f64, points: &[DataPoint], overrides: &ChartOverrides) -> ChartResult<Self> {
        let config = ChartConfig::resolve(width, height, overrides)?;
        let data = NormalizedData::from_points(points)?;
        let layout = LayoutDescriptor::compute(&config, &data)?;
        tracing::debug!(width, height, items = data.item_count(), "bar chart constructed");
        Ok(Self { config, data, layout })
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn data(&self) -> &NormalizedData { &self.data }
    pub fn layout(&self) -> &LayoutDescriptor { &self.layout }

    /// Replace the dataset. On error the chart keeps its previous data and layout.
    pub fn set_data(&mut self, points: &[DataPoint]) -> ChartResult<()> {
        let data = NormalizedData::from_points(points)?;
        let layout = LayoutDescriptor::compute(&self.config, &data)?;
        tracing::debug!(items = data.item_count(), "bar chart data replaced");
        self.data = data;
        self.layout = layout;
        Ok(())
    }

    /// Clear `surface` and draw the whole chart.
    pub fn render(&self, surface: &mut dyn DrawingSurface, colors: &mut dyn ColorProvider) {
        surface.clear();
        render(
            Frame { config: &self.config, data: &self.data, layout: &self.layout },
            surface,
            colors,
        );
    }
}

/// A chart mounted on a surface obtained from a [`SurfaceProvider`].
pub struct ChartHandle<S: DrawingSurface> {
    chart: BarChart,
    surface: S,
}

impl<S: DrawingSurface> ChartHandle<S> {
    pub fn chart(&self) -> &BarChart { &self.chart }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }

    /// Full redraw with fresh random bar colours.
    pub fn redraw(&mut self) {
        self.redraw_with(&mut RandomColors::new());
    }

    pub fn redraw_with(&mut self, colors: &mut dyn ColorProvider) {
        self.chart.render(&mut self.surface, colors);
    }

    /// Replace the dataset and redraw. Nothing is drawn if the new data is rejected.
    pub fn update_data(&mut self, points: &[DataPoint]) -> ChartResult<()> {
        self.chart.set_data(points)?;
        self.redraw();
        Ok(())
    }
}

/// Build a chart, mount a surface for `container`, and draw it with random bar colours.
///
/// All validation happens before the provider is asked for a surface, so a
/// rejected chart never mounts or draws anything.
pub fn create_chart<P: SurfaceProvider>(
    provider: &mut P,
    container: &str,
    width: f64,
    height: f64,
    points: &[DataPoint],
    overrides: &ChartOverrides,
) -> ChartResult<ChartHandle<P::Surface>> {
    let chart = BarChart::new(width, height, points, overrides)?;
    let surface = provider.mount(container, width, height)?;
    let mut handle = ChartHandle { chart, surface };
    handle.redraw();
    Ok(handle)
}

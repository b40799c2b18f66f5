//! Chart builders
//!
//! Each chart kind is a [`ChartBuilder`] implementation that shapes a
//! [`Frame`] into a configured [`Chart`]. The [`BuilderRegistry`] provides
//! discovery and selection by kind name.
//!
//! Builders all follow the same recipe: iterate the frame's columns into
//! series, seed the chart-level fragments the kind calls for (zoom type,
//! datetime axis), then fold in the caller's display options so the
//! caller's keys win.

mod bar;
mod column;
mod line;
mod scatter;
mod stock;

pub use bar::BarBuilder;
pub use column::ColumnBuilder;
pub use line::LineBuilder;
pub use scatter::ScatterBuilder;
pub use stock::StockBuilder;

use crate::chart::{Chart, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::ChartError;
use crate::frame::Frame;
use crate::options;
use std::collections::HashMap;

/// A named pair of frame columns plotted against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPair {
    /// Series name.
    pub name: String,
    /// Column supplying x values.
    pub x: String,
    /// Column supplying y values.
    pub y: String,
}

impl ScatterPair {
    pub fn new(name: impl Into<String>, x: impl Into<String>, y: impl Into<String>) -> Self {
        ScatterPair {
            name: name.into(),
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Display options and sizing shared by every builder.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildParams {
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Zoom type for column-wise kinds; scatter always zooms both axes.
    pub zoom: String,
    /// Column pairs for builders that plot columns against each other.
    pub pairs: Vec<ScatterPair>,
    /// Attach a fitted trend line to every data series.
    pub regression: bool,
}

impl Default for BuildParams {
    fn default() -> Self {
        BuildParams {
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: "x".to_string(),
            pairs: Vec::new(),
            regression: false,
        }
    }
}

impl BuildParams {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_titles(
        mut self,
        x: Option<impl Into<String>>,
        y: Option<impl Into<String>>,
    ) -> Self {
        self.x_axis_title = x.map(Into::into);
        self.y_axis_title = y.map(Into::into);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_zoom(mut self, zoom: impl Into<String>) -> Self {
        self.zoom = zoom.into();
        self
    }

    pub fn with_pairs(mut self, pairs: Vec<ScatterPair>) -> Self {
        self.pairs = pairs;
        self
    }

    pub fn with_regression(mut self, regression: bool) -> Self {
        self.regression = regression;
        self
    }
}

/// Trait for chart kinds
///
/// Implementors shape a frame into a configured chart. Builders must not
/// write files or touch the environment; they only assemble configuration.
pub trait ChartBuilder: Send + Sync + std::fmt::Debug {
    /// The kind name (e.g. "line", "scatter")
    fn name(&self) -> &str;

    /// Optional description of this kind
    fn description(&self) -> &str {
        ""
    }

    /// Build a chart from the frame with the given display options
    fn build(&self, frame: &Frame, params: &BuildParams) -> Result<Chart, ChartError>;
}

/// One series per frame column, zipped with the index.
///
/// Shared by the kinds that chart every column over the frame index. The
/// datetime axis is opt-in: only kinds that plot a time course set it.
pub(crate) fn columnwise_chart(
    frame: &Frame,
    params: &BuildParams,
    family: crate::chart::ChartFamily,
    kind: crate::series::SeriesKind,
    datetime_axis: bool,
) -> Result<Chart, ChartError> {
    if frame.is_empty() {
        return Err(ChartError::EmptyFrame);
    }

    let mut chart = Chart::new(family).with_size(params.width, params.height);
    for (name, values) in frame.columns() {
        let mut series = crate::series::Series::new(name, kind, frame.points_for(values));
        if params.regression {
            series = series.with_regression(crate::series::Regression::new());
        }
        chart.add_series(series);
    }

    chart.set_options(&options::zoom_type(&params.zoom));
    if datetime_axis && frame.index().is_temporal() {
        chart.set_options(&options::datetime_x_axis());
    }
    apply_display_options(&mut chart, params);
    Ok(chart)
}

/// Merge the caller's display fragments over the chart, after the builder's
/// own fragments, so caller-supplied keys win.
pub(crate) fn apply_display_options(chart: &mut Chart, params: &BuildParams) {
    if let Some(title) = &params.title {
        chart.set_options(&options::title(title));
    }
    if let Some(title) = &params.x_axis_title {
        chart.set_options(&options::x_axis_title(title));
    }
    if let Some(title) = &params.y_axis_title {
        chart.set_options(&options::y_axis_title(title));
    }
}

/// Registry of chart builders
///
/// Provides centralized discovery and selection of chart kinds.
pub struct BuilderRegistry {
    builders: HashMap<String, Box<dyn ChartBuilder>>,
}

impl BuilderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BuilderRegistry {
            builders: HashMap::new(),
        }
    }

    /// Register a builder
    ///
    /// If a builder with the same name already exists, it will be replaced.
    pub fn register<B: ChartBuilder + 'static>(&mut self, builder: B) {
        self.builders
            .insert(builder.name().to_string(), Box::new(builder));
    }

    /// Get a builder by kind name
    pub fn get(&self, name: &str) -> Result<&dyn ChartBuilder, ChartError> {
        self.builders
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| ChartError::KindNotFound(name.to_string()))
    }

    /// Check if a kind exists
    pub fn has(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// List all available kind names (sorted)
    pub fn list_kinds(&self) -> Vec<String> {
        let mut names: Vec<_> = self.builders.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build a chart using the named kind
    pub fn build(
        &self,
        kind: &str,
        frame: &Frame,
        params: &BuildParams,
    ) -> Result<Chart, ChartError> {
        self.get(kind)?.build(frame, params)
    }
}

impl Default for BuilderRegistry {
    /// Registry with all built-in kinds registered
    fn default() -> Self {
        let mut registry = BuilderRegistry::new();
        registry.register(LineBuilder);
        registry.register(BarBuilder);
        registry.register(ColumnBuilder);
        registry.register(StockBuilder);
        registry.register(ScatterBuilder);
        registry
    }
}

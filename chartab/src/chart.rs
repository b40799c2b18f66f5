//! Chart configuration objects
//!
//! A [`Chart`] owns an option tree plus a list of series, and serializes
//! both into the single configuration object the browser-side constructor
//! takes. The two families differ only in the JS constructor they call and
//! the script includes they need.

use crate::error::ChartError;
use crate::options;
use crate::regression;
use crate::scripts::ScriptSources;
use crate::series::Series;
use serde_json::{json, Map, Value};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_CONTAINER: &str = "container";

/// Which browser-side constructor renders the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFamily {
    /// `new Highcharts.Chart(...)`
    Chart,
    /// `new Highcharts.StockChart(...)`
    StockChart,
}

impl ChartFamily {
    pub fn constructor(&self) -> &'static str {
        match self {
            ChartFamily::Chart => "Chart",
            ChartFamily::StockChart => "StockChart",
        }
    }
}

/// One chart: a family, an option tree, and its series.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    family: ChartFamily,
    options: Value,
    series: Vec<Series>,
}

impl Chart {
    /// New chart seeded with the default container and size.
    pub fn new(family: ChartFamily) -> Self {
        Chart {
            family,
            options: json!({
                "chart": {
                    "renderTo": DEFAULT_CONTAINER,
                    "width": DEFAULT_WIDTH,
                    "height": DEFAULT_HEIGHT,
                }
            }),
            series: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.set_options(&json!({"chart": {"width": width, "height": height}}));
        self
    }

    pub fn family(&self) -> ChartFamily {
        self.family
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Deep-merge user options over the current tree. Later calls win.
    pub fn set_options(&mut self, overlay: &Value) {
        options::merge(&mut self.options, overlay);
    }

    /// Rewrite the container element id the chart renders into.
    pub fn set_render_to(&mut self, container: &str) {
        self.set_options(&json!({"chart": {"renderTo": container}}));
    }

    /// The container element id the chart renders into.
    pub fn render_to(&self) -> &str {
        self.options["chart"]["renderTo"]
            .as_str()
            .unwrap_or(DEFAULT_CONTAINER)
    }

    /// The full configuration object: the option tree with the serialized
    /// series folded in. Trend overlays land right after their source series.
    pub fn config(&self) -> Result<Value, ChartError> {
        let mut series_values = Vec::with_capacity(self.series.len());
        for series in &self.series {
            series_values.push(series.to_value());
            if series.regression.is_some() {
                series_values.push(regression::trend_series(series)?.to_value());
            }
        }

        let mut config = match self.options.clone() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        config.insert("series".to_string(), Value::Array(series_values));
        Ok(Value::Object(config))
    }

    /// The inline JS statement that constructs the chart in the browser.
    pub fn generate(&self) -> Result<String, ChartError> {
        let config = self.config()?;
        Ok(format!(
            "var chart_{} = new Highcharts.{}({});",
            js_identifier(self.render_to()),
            self.family.constructor(),
            config
        ))
    }

    /// The `<script>` includes this chart needs, from the default sources.
    pub fn needs(&self) -> Vec<String> {
        ScriptSources::default().tags_for(self.family)
    }
}

/// Container ids land in JS variable names; keep them identifier-safe.
fn js_identifier(container: &str) -> String {
    container
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

//! Series data: kinds, points, and per-series options

use crate::error::ChartError;
use crate::options;
use serde::Serialize;
use serde_json::{json, Value};

/// Series type names understood by Highcharts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Spline,
    Area,
    AreaSpline,
    Column,
    Bar,
    Pie,
    Scatter,
}

/// The x side of a point.
#[derive(Debug, Clone, PartialEq)]
pub enum PointX {
    /// Plain numeric x.
    Number(f64),
    /// Milliseconds since the Unix epoch, for datetime axes.
    Millis(i64),
    /// Category name from a label index.
    Name(String),
}

/// A single data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: Option<PointX>,
    pub y: f64,
}

impl Point {
    /// Point with only a y value; Highcharts positions it by index.
    pub fn y(y: f64) -> Self {
        Point { x: None, y }
    }

    /// Point with a numeric x.
    pub fn xy(x: f64, y: f64) -> Self {
        Point {
            x: Some(PointX::Number(x)),
            y,
        }
    }

    /// Serialize to the `data` entry Highcharts expects.
    pub fn to_value(&self) -> Value {
        match &self.x {
            None => json!(self.y),
            Some(PointX::Number(x)) => json!([x, self.y]),
            Some(PointX::Millis(ms)) => json!([ms, self.y]),
            Some(PointX::Name(name)) => json!([name, self.y]),
        }
    }
}

/// A fitted trend line request attached to a series.
///
/// An optional reference range narrows the x span the drawn line covers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Regression {
    pub(crate) reference: Option<(f64, f64)>,
}

impl Regression {
    /// Trend line over the full x span of the series.
    pub fn new() -> Self {
        Regression::default()
    }

    /// Trend line drawn over an explicit x range.
    ///
    /// The range must have exactly two values.
    pub fn with_reference(range: &[f64]) -> Result<Self, ChartError> {
        match range {
            [lo, hi] => Ok(Regression {
                reference: Some((*lo, *hi)),
            }),
            other => Err(ChartError::BadRegressionReference(other.len())),
        }
    }
}

/// One chart series: a named, typed run of points plus optional extras.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<Point>,
    /// Extra per-series options merged over the serialized object.
    pub extra: Option<Value>,
    /// Optional trend line request.
    pub regression: Option<Regression>,
}

impl Series {
    pub fn new(name: impl Into<String>, kind: SeriesKind, points: Vec<Point>) -> Self {
        Series {
            name: name.into(),
            kind,
            points,
            extra: None,
            regression: None,
        }
    }

    /// Merge extra options (e.g. color, marker settings) over the series object.
    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Request a fitted trend line companion series.
    pub fn with_regression(mut self, regression: Regression) -> Self {
        self.regression = Some(regression);
        self
    }

    /// Serialize to a Highcharts series object.
    pub fn to_value(&self) -> Value {
        let mut object = json!({
            "name": self.name,
            "type": self.kind,
            "data": self.points.iter().map(Point::to_value).collect::<Vec<_>>(),
        });
        if let Some(extra) = &self.extra {
            options::merge(&mut object, extra);
        }
        object
    }
}

//! Tabular input model
//!
//! A [`Frame`] is the charting input: an index plus ordered, named numeric
//! columns. Builders iterate the columns and zip each one with the index to
//! produce chart points. The index flavor decides the x side of each point:
//! positional indices count from zero, temporal indices become milliseconds
//! since the Unix epoch (the unit Highcharts uses for datetime axes), and
//! label indices become point names.

use crate::error::ChartError;
use crate::series::{Point, PointX};
use chrono::NaiveDateTime;

/// The index of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Index {
    /// Positional 0..n index; the length comes from the columns.
    Range,
    /// Numeric index values.
    Numbers(Vec<f64>),
    /// Temporal index values.
    Timestamps(Vec<NaiveDateTime>),
    /// Categorical index values.
    Labels(Vec<String>),
}

impl Index {
    /// Length of the index, if it carries its own values.
    pub fn len(&self) -> Option<usize> {
        match self {
            Index::Range => None,
            Index::Numbers(values) => Some(values.len()),
            Index::Timestamps(values) => Some(values.len()),
            Index::Labels(values) => Some(values.len()),
        }
    }

    /// Whether points built over this index should get a datetime x axis.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Index::Timestamps(_))
    }

    /// The x value for the given position.
    fn value_at(&self, pos: usize) -> PointX {
        match self {
            Index::Range => PointX::Number(pos as f64),
            Index::Numbers(values) => PointX::Number(values[pos]),
            Index::Timestamps(values) => {
                PointX::Millis(values[pos].and_utc().timestamp_millis())
            }
            Index::Labels(values) => PointX::Name(values[pos].clone()),
        }
    }
}

/// An index plus ordered named numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: Index,
    columns: Vec<(String, Vec<f64>)>,
}

impl Frame {
    /// Create a frame, checking every column against the index length.
    ///
    /// With a [`Index::Range`] index all columns must agree with the first
    /// column's length instead.
    pub fn new(index: Index, columns: Vec<(String, Vec<f64>)>) -> Result<Self, ChartError> {
        let expected = index
            .len()
            .or_else(|| columns.first().map(|(_, values)| values.len()));

        if let Some(expected) = expected {
            for (name, values) in &columns {
                if values.len() != expected {
                    return Err(ChartError::LengthMismatch {
                        column: name.clone(),
                        expected,
                        actual: values.len(),
                    });
                }
            }
        }

        Ok(Frame { index, columns })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index
            .len()
            .or_else(|| self.columns.first().map(|(_, values)| values.len()))
            .unwrap_or(0)
    }

    /// Whether the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Iterate `(name, values)` pairs in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&[f64], ChartError> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, values)| values.as_slice())
            .ok_or_else(|| ChartError::UnknownColumn(name.to_string()))
    }

    /// Zip a value slice with the index into chart points.
    pub fn points_for(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(pos, &y)| Point {
                x: Some(self.index.value_at(pos)),
                y,
            })
            .collect()
    }

    /// Points for a named column.
    pub fn column_points(&self, name: &str) -> Result<Vec<Point>, ChartError> {
        Ok(self.points_for(self.column(name)?))
    }
}

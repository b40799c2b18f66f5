//! Error types for chart building and page rendering

use std::fmt;

/// Errors that can occur while building charts or rendering pages
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Chart kind not found in registry
    KindNotFound(String),
    /// Column name not present in the frame
    UnknownColumn(String),
    /// Column length does not match the frame index length
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    /// Builder was given a frame with no columns
    EmptyFrame,
    /// Page render was requested with no charts
    EmptyPage,
    /// Builder requires column pairs but none were supplied
    MissingPairs(String),
    /// Regression reference range must have exactly two values
    BadRegressionReference(usize),
    /// Too few distinct x values to fit a trend line
    RegressionUnderdetermined(String),
    /// Error while parsing tabular input
    ParseError(String),
    /// Error writing the rendered page
    Io(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::KindNotFound(name) => write!(f, "Chart kind '{name}' not found"),
            ChartError::UnknownColumn(name) => write!(f, "Unknown column '{name}'"),
            ChartError::LengthMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "Column '{column}' has {actual} values, expected {expected}"
            ),
            ChartError::EmptyFrame => write!(f, "Frame has no columns to chart"),
            ChartError::EmptyPage => write!(f, "Page has no charts to render"),
            ChartError::MissingPairs(kind) => {
                write!(f, "Chart kind '{kind}' requires column pairs")
            }
            ChartError::BadRegressionReference(len) => write!(
                f,
                "Regression reference range must have exactly 2 values, got {len}"
            ),
            ChartError::RegressionUnderdetermined(series) => write!(
                f,
                "Series '{series}' has too few distinct x values for a trend line"
            ),
            ChartError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ChartError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ChartError {}

//! Column charts: one vertical column series per column.

use super::{columnwise_chart, BuildParams, ChartBuilder};
use crate::chart::{Chart, ChartFamily};
use crate::error::ChartError;
use crate::frame::Frame;
use crate::series::SeriesKind;

#[derive(Debug)]
pub struct ColumnBuilder;

impl ChartBuilder for ColumnBuilder {
    fn name(&self) -> &str {
        "column"
    }

    fn description(&self) -> &str {
        "One vertical column series per column"
    }

    fn build(&self, frame: &Frame, params: &BuildParams) -> Result<Chart, ChartError> {
        columnwise_chart(frame, params, ChartFamily::Chart, SeriesKind::Column, false)
    }
}

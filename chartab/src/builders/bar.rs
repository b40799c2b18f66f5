//! Bar charts: one horizontal bar series per column.

use super::{columnwise_chart, BuildParams, ChartBuilder};
use crate::chart::{Chart, ChartFamily};
use crate::error::ChartError;
use crate::frame::Frame;
use crate::series::SeriesKind;

#[derive(Debug)]
pub struct BarBuilder;

impl ChartBuilder for BarBuilder {
    fn name(&self) -> &str {
        "bar"
    }

    fn description(&self) -> &str {
        "One horizontal bar series per column"
    }

    fn build(&self, frame: &Frame, params: &BuildParams) -> Result<Chart, ChartError> {
        columnwise_chart(frame, params, ChartFamily::Chart, SeriesKind::Bar, false)
    }
}

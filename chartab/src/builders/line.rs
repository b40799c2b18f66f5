//! Line charts: one line series per column over the frame index.

use super::{columnwise_chart, BuildParams, ChartBuilder};
use crate::chart::{Chart, ChartFamily};
use crate::error::ChartError;
use crate::frame::Frame;
use crate::series::SeriesKind;

#[derive(Debug)]
pub struct LineBuilder;

impl ChartBuilder for LineBuilder {
    fn name(&self) -> &str {
        "line"
    }

    fn description(&self) -> &str {
        "One line series per column over the frame index"
    }

    fn build(&self, frame: &Frame, params: &BuildParams) -> Result<Chart, ChartError> {
        columnwise_chart(frame, params, ChartFamily::Chart, SeriesKind::Line, true)
    }
}

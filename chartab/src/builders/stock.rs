//! Stock charts: line series rendered by the StockChart constructor.

use super::{columnwise_chart, BuildParams, ChartBuilder};
use crate::chart::{Chart, ChartFamily};
use crate::error::ChartError;
use crate::frame::Frame;
use crate::series::SeriesKind;

#[derive(Debug)]
pub struct StockBuilder;

impl ChartBuilder for StockBuilder {
    fn name(&self) -> &str {
        "stock"
    }

    fn description(&self) -> &str {
        "Line series rendered with the StockChart constructor"
    }

    fn build(&self, frame: &Frame, params: &BuildParams) -> Result<Chart, ChartError> {
        columnwise_chart(frame, params, ChartFamily::StockChart, SeriesKind::Line, true)
    }
}

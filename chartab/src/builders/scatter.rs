//! Scatter charts: named column pairs plotted against each other.

use super::{apply_display_options, BuildParams, ChartBuilder};
use crate::chart::{Chart, ChartFamily};
use crate::error::ChartError;
use crate::frame::Frame;
use crate::options;
use crate::series::{Point, Regression, Series, SeriesKind};

#[derive(Debug)]
pub struct ScatterBuilder;

impl ChartBuilder for ScatterBuilder {
    fn name(&self) -> &str {
        "scatter"
    }

    fn description(&self) -> &str {
        "Column pairs plotted against each other"
    }

    fn build(&self, frame: &Frame, params: &BuildParams) -> Result<Chart, ChartError> {
        if params.pairs.is_empty() {
            return Err(ChartError::MissingPairs(self.name().to_string()));
        }

        let mut chart = Chart::new(ChartFamily::Chart).with_size(params.width, params.height);
        for pair in &params.pairs {
            let xs = frame.column(&pair.x)?;
            let ys = frame.column(&pair.y)?;
            let points = xs
                .iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Point::xy(x, y))
                .collect();

            let mut series = Series::new(pair.name.clone(), SeriesKind::Scatter, points);
            if params.regression {
                series = series.with_regression(Regression::new());
            }
            chart.add_series(series);
        }

        chart.set_options(&options::zoom_type("xy"));
        apply_display_options(&mut chart, params);
        Ok(chart)
    }
}

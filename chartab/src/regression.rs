//! Fitted trend overlays
//!
//! A series may request a least-squares line drawn as a companion series.
//! The fit solves an ordinary least squares problem over the series'
//! (x, y) points via SVD, which stays robust when the design matrix is
//! tall or nearly collinear. x values are centered before the solve so
//! epoch-millisecond axes do not wreck the conditioning.

use crate::error::ChartError;
use crate::series::{Point, PointX, Series, SeriesKind};
use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Numeric x for a point; points without an explicit x use their position.
fn numeric_x(point: &Point, pos: usize) -> f64 {
    match &point.x {
        Some(PointX::Number(x)) => *x,
        Some(PointX::Millis(ms)) => *ms as f64,
        Some(PointX::Name(_)) | None => pos as f64,
    }
}

/// Build the fitted trend line companion for a series.
///
/// The companion is a two-point line series named `"<name> fit"` spanning
/// the series' x range, or the regression reference range when one was
/// supplied.
pub fn trend_series(series: &Series) -> Result<Series, ChartError> {
    let xs: Vec<f64> = series
        .points
        .iter()
        .enumerate()
        .map(|(pos, point)| numeric_x(point, pos))
        .collect();
    let ys: Vec<f64> = series.points.iter().map(|point| point.y).collect();

    let underdetermined = || ChartError::RegressionUnderdetermined(series.name.clone());

    let (min_x, max_x) = match (
        xs.iter().cloned().reduce(f64::min),
        xs.iter().cloned().reduce(f64::max),
    ) {
        (Some(min), Some(max)) if min < max => (min, max),
        _ => return Err(underdetermined()),
    };

    // Center x so large axes (epoch millis) keep the design matrix well scaled.
    let mean_x = xs.iter().sum::<f64>() / xs.len() as f64;
    let design = DMatrix::from_fn(xs.len(), 2, |row, col| {
        if col == 0 {
            1.0
        } else {
            xs[row] - mean_x
        }
    });
    let observed = DVector::from_vec(ys);

    let beta = solve_least_squares(&design, &observed).ok_or_else(underdetermined)?;
    let (intercept, slope) = (beta[0], beta[1]);
    let at = |x: f64| intercept + slope * (x - mean_x);

    let (lo, hi) = match series.regression.as_ref().and_then(|r| r.reference) {
        Some(range) => range,
        None => (min_x, max_x),
    };

    Ok(Series::new(
        format!("{} fit", series.name),
        SeriesKind::Line,
        vec![Point::xy(lo, at(lo)), Point::xy(hi, at(hi))],
    ))
}

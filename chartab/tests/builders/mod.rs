//! Builder behavior through the registry (frame in, configured chart out).

use chartab::{BuildParams, BuilderRegistry, Frame, Index, ScatterPair};
use serde_json::{json, Value};

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn monthly_frame() -> Frame {
    Frame::new(
        Index::Labels(vec!["Jan".to_string(), "Feb".to_string(), "Mar".to_string()]),
        vec![
            ("sales".to_string(), vec![10.0, 12.0, 9.0]),
            ("returns".to_string(), vec![1.0, 2.0, 1.5]),
        ],
    )
    .unwrap()
}

#[test]
fn line_chart_one_series_per_column() {
    let registry = BuilderRegistry::default();
    let chart = registry
        .build("line", &monthly_frame(), &BuildParams::default())
        .unwrap();
    let config = chart.config().unwrap();
    let series = config["series"].as_array().unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["name"], "sales");
    assert_eq!(series[1]["name"], "returns");
    assert_eq!(series[0]["data"][0], json!(["Jan", 10.0]));
}

#[test]
fn display_options_land_in_the_config() {
    let registry = BuilderRegistry::default();
    let params = BuildParams::default()
        .with_title("Monthly sales")
        .with_axis_titles(Some("Month"), Some("Units"))
        .with_size(800, 400);

    let chart = registry.build("column", &monthly_frame(), &params).unwrap();
    let config = chart.config().unwrap();

    assert_eq!(config["title"]["text"], "Monthly sales");
    assert_eq!(config["xAxis"]["title"]["text"], "Month");
    assert_eq!(config["yAxis"]["title"]["text"], "Units");
    assert_eq!(config["chart"]["width"], 800);
    assert_eq!(config["chart"]["height"], 400);
}

#[test]
fn caller_options_win_over_builder_fragments() {
    let registry = BuilderRegistry::default();
    let mut chart = registry
        .build("line", &monthly_frame(), &BuildParams::default())
        .unwrap();

    // The builder seeds zoomType "x"; a later merge replaces it.
    chart.set_options(&json!({"chart": {"zoomType": "xy"}}));
    let config = chart.config().unwrap();

    assert_eq!(config["chart"]["zoomType"], "xy");
    // Untouched sibling keys survive the merge.
    assert_eq!(config["chart"]["renderTo"], "container");
}

#[test]
fn bar_and_column_emit_their_own_series_types() {
    let registry = BuilderRegistry::default();
    let frame = monthly_frame();

    let bar = registry.build("bar", &frame, &BuildParams::default()).unwrap();
    let column = registry
        .build("column", &frame, &BuildParams::default())
        .unwrap();

    assert_eq!(bar.config().unwrap()["series"][0]["type"], "bar");
    assert_eq!(column.config().unwrap()["series"][0]["type"], "column");
}

#[test]
fn regression_flag_adds_a_fit_per_series() {
    let registry = BuilderRegistry::default();
    let frame = Frame::new(
        Index::Numbers(vec![0.0, 1.0, 2.0]),
        vec![("a".to_string(), vec![1.0, 3.0, 5.0])],
    )
    .unwrap();
    let params = BuildParams::default().with_regression(true);

    let chart = registry.build("line", &frame, &params).unwrap();
    let config = chart.config().unwrap();
    let series = config["series"].as_array().unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[1]["name"], "a fit");
    assert_eq!(series[1]["type"], "line");
    // y = 1 + 2x over [0, 2]
    assert_close(&series[1]["data"][0][0], 0.0);
    assert_close(&series[1]["data"][0][1], 1.0);
    assert_close(&series[1]["data"][1][0], 2.0);
    assert_close(&series[1]["data"][1][1], 5.0);
}

#[test]
fn scatter_regression_fits_pair_points() {
    let registry = BuilderRegistry::default();
    let frame = Frame::new(
        Index::Range,
        vec![
            ("x".to_string(), vec![0.0, 1.0, 2.0]),
            ("y".to_string(), vec![0.0, 2.0, 4.0]),
        ],
    )
    .unwrap();
    let params = BuildParams::default()
        .with_pairs(vec![ScatterPair::new("fitme", "x", "y")])
        .with_regression(true);

    let chart = registry.build("scatter", &frame, &params).unwrap();
    let series = chart.config().unwrap()["series"].clone();

    assert_eq!(series[0]["type"], "scatter");
    assert_eq!(series[1]["name"], "fitme fit");
    assert_close(&series[1]["data"][0][1], 0.0);
    assert_close(&series[1]["data"][1][1], 4.0);
}

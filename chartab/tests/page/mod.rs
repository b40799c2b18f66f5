//! Document assembly invariants: one div and one script per chart, shared
//! head includes, even height split, file writing.

use chartab::{Chart, ChartFamily, Page, Point, Series, SeriesKind};
use tempfile::tempdir;

fn demo_chart(family: ChartFamily) -> Chart {
    let mut chart = Chart::new(family);
    chart.add_series(Series::new(
        "demo",
        SeriesKind::Line,
        vec![Point::xy(0.0, 1.0), Point::xy(1.0, 2.0)],
    ));
    chart
}

#[test]
fn one_container_and_one_script_per_chart() {
    let page = Page::new("Dashboard")
        .with_charts((0..3).map(|_| demo_chart(ChartFamily::Chart)));

    let html = page.render().unwrap();

    assert_eq!(html.matches("<div id=\"chart").count(), 3);
    assert_eq!(html.matches("<script type=\"text/javascript\">").count(), 3);
    for idx in 0..3 {
        assert!(html.contains(&format!("<div id=\"chart{idx}\"")));
        assert!(html.contains(&format!("\"renderTo\":\"chart{idx}\"")));
        assert!(html.contains(&format!("var chart_chart{idx} = new Highcharts.Chart(")));
    }
}

#[test]
fn heights_split_the_viewport_evenly() {
    let mut page = Page::new("Dashboard");
    page.add_chart(demo_chart(ChartFamily::Chart));
    page.add_chart(demo_chart(ChartFamily::Chart));
    page.add_chart(demo_chart(ChartFamily::Chart));

    let html = page.render().unwrap();
    assert_eq!(html.matches("height: 33%; width: 100%;").count(), 3);
}

#[test]
fn single_chart_takes_the_full_height() {
    let mut page = Page::new("Solo");
    page.add_chart(demo_chart(ChartFamily::Chart));

    let html = page.render().unwrap();
    assert!(html.contains("height: 100%; width: 100%;"));
}

#[test]
fn head_includes_are_the_deduplicated_union() {
    let mut page = Page::new("Mixed");
    page.add_chart(demo_chart(ChartFamily::Chart));
    page.add_chart(demo_chart(ChartFamily::StockChart));
    page.add_chart(demo_chart(ChartFamily::Chart));

    let html = page.render().unwrap();

    assert_eq!(
        html.matches("https://code.jquery.com/jquery-3.7.1.min.js").count(),
        1
    );
    assert_eq!(html.matches("/highcharts.js").count(), 1);
    assert_eq!(html.matches("/highstock.js").count(), 1);
}

#[test]
fn document_skeleton_is_complete() {
    let mut page = Page::new("Report & <summary>");
    page.add_chart(demo_chart(ChartFamily::Chart));

    let html = page.render().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<title>Report &amp; &lt;summary&gt;</title>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn write_to_uses_the_given_name() {
    let dir = tempdir().unwrap();
    let mut page = Page::new("Saved");
    page.add_chart(demo_chart(ChartFamily::Chart));

    let path = page.write_to(dir.path(), Some("report.html")).unwrap();

    assert_eq!(path, dir.path().join("report.html"));
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("new Highcharts.Chart("));
}

#[test]
fn write_to_defaults_to_a_random_hex_name() {
    let dir = tempdir().unwrap();
    let mut page = Page::new("Saved");
    page.add_chart(demo_chart(ChartFamily::Chart));

    let path = page.write_to(dir.path(), None).unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();

    assert!(name.ends_with(".html"));
    let stem = name.strip_suffix(".html").unwrap();
    assert_eq!(stem.len(), 6);
    assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(path.exists());
}

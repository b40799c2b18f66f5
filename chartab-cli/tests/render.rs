use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_prices_csv(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("prices.csv");
    fs::write(
        &path,
        "date,open,close\n2024-01-01,10.0,10.5\n2024-01-02,10.5,11.2\n2024-01-03,11.2,10.9\n",
    )
    .unwrap();
    path
}

#[test]
fn render_line_chart_to_stdout() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line")
        .arg("--title")
        .arg("Prices");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("new Highcharts.Chart("))
        .stdout(predicate::str::contains(r#""text":"Prices""#))
        .stdout(predicate::str::contains(r#""type":"datetime""#))
        .stdout(predicate::str::contains("<div id=\"chart0\""));
}

#[test]
fn render_is_the_default_subcommand() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg(input.as_os_str()).arg("--kind").arg("column");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"column""#));
}

#[test]
fn render_writes_output_file() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());
    let output = dir.path().join("out.html");

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("stock")
        .arg("-o")
        .arg(output.as_os_str());

    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("new Highcharts.StockChart("));
    assert!(html.contains("highstock.js"));
}

#[test]
fn scatter_requires_pairs() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("scatter");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("requires column pairs"));
}

#[test]
fn scatter_renders_named_pairs() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("scatter")
        .arg("--pair")
        .arg("open vs close=open:close");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"open vs close""#))
        .stdout(predicate::str::contains(r#""zoomType":"xy""#));
}

#[test]
fn extra_width_overrides_config() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line")
        .arg("--extra-width")
        .arg("900");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""width":900"#));
}

#[test]
fn config_file_sets_chart_size() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());
    let config_path = dir.path().join("chartab.toml");
    fs::write(
        &config_path,
        r#"[chart]
height = 250
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line")
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""height":250"#));
}

#[test]
fn options_json_merges_over_the_chart() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line")
        .arg("--options")
        .arg(r#"{"legend":{"enabled":false},"chart":{"zoomType":"xy"}}"#);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""legend":{"enabled":false}"#))
        .stdout(predicate::str::contains(r#""zoomType":"xy""#));
}

#[test]
fn regression_extra_adds_fit_series() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("linear.csv");
    fs::write(&input, "x,y\n0,1\n1,3\n2,5\n").unwrap();

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line")
        .arg("--extra-regression");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"y fit""#));
}

#[test]
fn save_writes_into_the_output_dir() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());
    let out_dir = dir.path().join("pages");
    fs::create_dir(&out_dir).unwrap();

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line")
        .arg("--save")
        .arg("--extra-output-dir")
        .arg(out_dir.to_str().unwrap());

    let output = cmd.assert().success().get_output().stdout.clone();
    let printed = String::from_utf8(output).unwrap();
    let path = std::path::Path::new(printed.trim());

    assert!(path.starts_with(&out_dir));
    assert!(path.extension().is_some_and(|ext| ext == "html"));
    assert!(path.exists());
}

#[test]
fn bad_number_reports_column_and_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "x,y\n1,2\n2,oops\n").unwrap();

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("column 'y', line 3"));
}

#[test]
fn unknown_extra_is_rejected() {
    let dir = tempdir().unwrap();
    let input = write_prices_csv(dir.path());

    let mut cmd = cargo_bin_cmd!("chartab");
    cmd.arg("render")
        .arg(input.as_os_str())
        .arg("--kind")
        .arg("line")
        .arg("--extra-frobnicate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown override"));
}

//! Multi-chart HTML assembly
//!
//! A [`Page`] stacks any number of charts into one static HTML document:
//! one container div and one inline script block per chart, in chart order,
//! with the script includes shared in the head. Container heights split the
//! viewport evenly.

use crate::chart::Chart;
use crate::error::ChartError;
use crate::scripts::ScriptSources;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// A multi-chart document: an ordered list of charts plus a title.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    title: String,
    charts: Vec<Chart>,
    scripts: ScriptSources,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Page {
            title: title.into(),
            charts: Vec::new(),
            scripts: ScriptSources::default(),
        }
    }

    /// Override where the head pulls jQuery and the charting library from.
    pub fn with_scripts(mut self, scripts: ScriptSources) -> Self {
        self.scripts = scripts;
        self
    }

    /// Append charts from an iterator, in order.
    pub fn with_charts(mut self, charts: impl IntoIterator<Item = Chart>) -> Self {
        self.charts.extend(charts);
        self
    }

    pub fn add_chart(&mut self, chart: Chart) {
        self.charts.push(chart);
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Render the full HTML document.
    ///
    /// Every chart's renderTo is rewritten to its container id (`chart0`,
    /// `chart1`, ...) before serialization, so div ids and script targets
    /// correspond pairwise.
    pub fn render(&self) -> Result<String, ChartError> {
        if self.charts.is_empty() {
            return Err(ChartError::EmptyPage);
        }

        // Union of includes across charts, deduplicated, first-seen order.
        let mut needs: Vec<String> = Vec::new();
        for chart in &self.charts {
            for tag in self.scripts.tags_for(chart.family()) {
                if !needs.contains(&tag) {
                    needs.push(tag);
                }
            }
        }

        let height = 100 / self.charts.len();
        let mut containers = String::new();
        let mut blocks = String::new();
        for (idx, chart) in self.charts.iter().enumerate() {
            let container = format!("chart{idx}");
            let mut chart = chart.clone();
            chart.set_render_to(&container);

            containers.push_str(&format!(
                "    <div id=\"{container}\" style=\"height: {height}%; width: 100%;\"></div>\n"
            ));
            blocks.push_str(&format!(
                "<script type=\"text/javascript\">\n    {}\n</script>\n",
                chart.generate()?
            ));
        }

        let escaped_title = html_escape(&self.title);
        let includes = needs.join("\n  ");

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{escaped_title}</title>
  {includes}
</head>
<body>
{containers}
{blocks}</body>
</html>
"#
        ))
    }

    /// Render and write the page under `dir`, returning the written path.
    ///
    /// Without a file name a random 6-hex-digit name is generated.
    pub fn write_to(
        &self,
        dir: impl AsRef<Path>,
        file_name: Option<&str>,
    ) -> Result<PathBuf, ChartError> {
        let html = self.render()?;
        let name = match file_name {
            Some(name) => name.to_string(),
            None => random_page_name(),
        };
        let path = dir.as_ref().join(name);
        fs::write(&path, html)
            .map_err(|e| ChartError::Io(format!("failed to write '{}': {e}", path.display())))?;
        Ok(path)
    }
}

/// Random page name over `16^5 ..= 16^6 - 1`, so always six hex digits.
fn random_page_name() -> String {
    let value: u32 = rand::thread_rng().gen_range(0x10_0000..=0xFF_FFFF);
    format!("{value:x}.html")
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

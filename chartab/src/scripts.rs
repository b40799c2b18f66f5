//! Script includes required by the browser-side library

use crate::chart::ChartFamily;

pub const JQUERY_URL: &str = "https://code.jquery.com/jquery-3.7.1.min.js";
pub const HIGHCHARTS_URL: &str = "https://code.highcharts.com/highcharts.js";
pub const HIGHSTOCK_URL: &str = "https://code.highcharts.com/stock/highstock.js";

/// Where the page loads jQuery and the charting library from.
///
/// Defaults point at the public CDNs; deployments pinning versions or
/// self-hosting override these through configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptSources {
    pub jquery: String,
    pub highcharts: String,
    pub highstock: String,
}

impl Default for ScriptSources {
    fn default() -> Self {
        ScriptSources {
            jquery: JQUERY_URL.to_string(),
            highcharts: HIGHCHARTS_URL.to_string(),
            highstock: HIGHSTOCK_URL.to_string(),
        }
    }
}

impl ScriptSources {
    /// The `<script>` tags a chart family needs, in load order.
    ///
    /// highstock.js bundles the Highcharts core, so stock charts do not
    /// also pull highcharts.js.
    pub fn tags_for(&self, family: ChartFamily) -> Vec<String> {
        let library = match family {
            ChartFamily::Chart => &self.highcharts,
            ChartFamily::StockChart => &self.highstock,
        };
        vec![script_tag(&self.jquery), script_tag(library)]
    }
}

fn script_tag(src: &str) -> String {
    format!(r#"<script type="text/javascript" src="{src}"></script>"#)
}

//! Option trees and merging
//!
//! Chart configuration objects are untyped `serde_json::Value` trees that
//! follow the Highcharts schema. This module owns the merge rule used
//! everywhere options are combined, plus constructors for the handful of
//! fragments every builder needs (titles, axis titles, zoom type).
//!
//! Merge semantics: objects merge key-by-key, anything else (scalars and
//! arrays alike) is replaced wholesale. Options merge right-to-left, so the
//! later overlay always wins.

use serde_json::{json, Value};

/// Deep-merge `overlay` into `base`.
///
/// Object values merge recursively; every other value in `overlay` replaces
/// the corresponding slot in `base`.
pub fn merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                merge(base_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (base_slot, overlay) => *base_slot = overlay.clone(),
    }
}

/// `{"title": {"text": <text>}}`
pub fn title(text: &str) -> Value {
    json!({"title": {"text": text}})
}

/// `{"xAxis": {"title": {"text": <text>}}}`
pub fn x_axis_title(text: &str) -> Value {
    json!({"xAxis": {"title": {"text": text}}})
}

/// `{"yAxis": {"title": {"text": <text>}}}`
pub fn y_axis_title(text: &str) -> Value {
    json!({"yAxis": {"title": {"text": text}}})
}

/// `{"chart": {"zoomType": <zoom>}}`
pub fn zoom_type(zoom: &str) -> Value {
    json!({"chart": {"zoomType": zoom}})
}

/// `{"xAxis": {"type": "datetime"}}` for frames with a temporal index.
pub fn datetime_x_axis() -> Value {
    json!({"xAxis": {"type": "datetime"}})
}

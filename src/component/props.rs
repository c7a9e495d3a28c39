//! Prop type and default value synthesis.

use crate::svg::AttributeSet;

/// Prop type literal plus per-attribute default expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropTypes {
    /// `{ fill?: string; stroke?: string[] }`, or empty when no attribute is present.
    pub type_literal: String,
    /// Default for `fill`: `"#fff"` or `["#000","#fff"]`.
    pub fill_default: Option<String>,
    /// Default for `stroke`, same shapes as `fill_default`.
    pub stroke_default: Option<String>,
}

impl PropTypes {
    pub fn synthesize(fill: &AttributeSet, stroke: &AttributeSet) -> Self {
        let fields: Vec<String> = [fill, stroke]
            .into_iter()
            .filter(|set| !set.is_empty())
            .map(|set| format!("{}?: {}", set.attr().name(), ts_type(set)))
            .collect();

        let type_literal = if fields.is_empty() {
            String::new()
        } else {
            format!("{{ {} }}", fields.join("; "))
        };

        Self {
            type_literal,
            fill_default: default_value(fill),
            stroke_default: default_value(stroke),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.type_literal.is_empty()
    }
}

/// `string` for one distinct value, `string[]` for more.
fn ts_type(set: &AttributeSet) -> &'static str {
    if set.is_multi() { "string[]" } else { "string" }
}

/// Quoted value, or a JSON array of values in placeholder-index order.
fn default_value(set: &AttributeSet) -> Option<String> {
    let values = set.values();
    match values.len() {
        0 => None,
        1 => Some(json_string(values[0])),
        _ => Some(serde_json::Value::from(values).to_string()),
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

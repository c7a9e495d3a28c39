//! Template substitution variables for one icon.

use serde::Serialize;

use super::props::PropTypes;
use crate::svg::{AttributeSet, IconSource, SemanticAttr, optimize::format_dimension, rewrite_markup};

/// Height default for icons whose aspect ratio is not 1:1.
const NON_SQUARE_HEIGHT: &str = "'auto'";

/// Everything a template can reference, by field name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentPayload {
    pub component_name: String,
    /// Rewritten markup with prop placeholders.
    pub svg: String,
    pub width: String,
    pub height: String,
    pub square: bool,
    /// `width` for square icons, `'auto'` otherwise.
    pub height_default: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    /// Empty when the icon has no colorable attributes.
    pub prop_type: String,
    /// Source file, for the provenance comment.
    pub path: String,
}

impl ComponentPayload {
    /// Extract, synthesize and rewrite one icon into a payload.
    pub fn build(icon: &IconSource, component_name: &str) -> Self {
        let fill = AttributeSet::extract(&icon.markup, SemanticAttr::Fill);
        let stroke = AttributeSet::extract(&icon.markup, SemanticAttr::Stroke);

        let props = PropTypes::synthesize(&fill, &stroke);
        let svg = rewrite_markup(&icon.markup, &fill, &stroke);

        let square = icon.is_square();
        let height_default = if square {
            "width".to_string()
        } else {
            NON_SQUARE_HEIGHT.to_string()
        };

        Self {
            component_name: component_name.to_string(),
            svg,
            width: format_dimension(icon.width),
            height: format_dimension(icon.height),
            square,
            height_default,
            fill: props.fill_default,
            stroke: props.stroke_default,
            prop_type: props.type_literal,
            path: icon.path.to_string_lossy().replace('\\', "/"),
        }
    }
}

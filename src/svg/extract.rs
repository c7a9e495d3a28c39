//! Attribute extraction from minified SVG markup.
//!
//! Extraction works on text, not on a parsed tree: icons are flat enough that
//! `name="value"` patterns find every colorable attribute.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_FILL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"fill="([^"]*)""#).unwrap());

static RE_STROKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"stroke="([^"]*)""#).unwrap());

/// Hyphenated or namespaced attribute names (`stroke-width`, `xlink:href`).
///
/// Group 1 is the whitespace before the name, group 2 the name itself. Requiring
/// the leading whitespace keeps matches out of attribute values.
pub(crate) static RE_DASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s)([A-Za-z][A-Za-z0-9_]*(?:[-:][A-Za-z0-9_]+)+)=").unwrap()
});

/// Value marking the absence of paint.
const SENTINEL: &str = "none";

/// Presentation attributes promoted to component props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticAttr {
    Fill,
    Stroke,
}

impl SemanticAttr {
    pub const ALL: [Self; 2] = [Self::Fill, Self::Stroke];

    /// Attribute name as written in markup, also used as the prop name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Fill => &RE_FILL,
            Self::Stroke => &RE_STROKE,
        }
    }
}

/// Distinct occurrences of one semantic attribute, sorted.
///
/// Occurrences are the raw matched text (`fill="#fff"`), so uniqueness and order
/// are decided on exactly what the rewriter will later search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    attr: SemanticAttr,
    occurrences: Vec<String>,
}

impl AttributeSet {
    /// Collect every `attr="value"` in `markup`, skipping `none` values.
    pub fn extract(markup: &str, attr: SemanticAttr) -> Self {
        let occurrences: BTreeSet<&str> = attr
            .pattern()
            .captures_iter(markup)
            .filter(|caps| !caps[1].starts_with(SENTINEL))
            .filter_map(|caps| caps.get(0).map(|m| m.as_str()))
            .collect();

        Self {
            attr,
            occurrences: occurrences.into_iter().map(str::to_string).collect(),
        }
    }

    pub const fn attr(&self) -> SemanticAttr {
        self.attr
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// More than one distinct value: the prop becomes an array.
    pub fn is_multi(&self) -> bool {
        self.occurrences.len() > 1
    }

    /// Raw occurrences in placeholder-index order.
    pub fn occurrences(&self) -> &[String] {
        &self.occurrences
    }

    /// Attribute values (without name and quotes) in placeholder-index order.
    pub fn values(&self) -> Vec<&str> {
        self.occurrences
            .iter()
            .filter_map(|occurrence| {
                self.attr
                    .pattern()
                    .captures(occurrence)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str())
            })
            .collect()
    }
}

/// Distinct dashed attribute names found in `markup`, sorted.
pub fn dashed_attributes(markup: &str) -> Vec<String> {
    let names: BTreeSet<&str> = RE_DASHED
        .captures_iter(markup)
        .filter_map(|caps| caps.get(2).map(|m| m.as_str()))
        .collect();
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sorted_and_deduplicated() {
        let svg = r##"<svg><path fill="#fff" d="M0 0"/><path fill="#000" d="M1 1"/><path fill="#fff" d="M2 2"/></svg>"##;
        let set = AttributeSet::extract(svg, SemanticAttr::Fill);
        assert_eq!(set.occurrences(), [r##"fill="#000""##, r##"fill="#fff""##]);
        assert_eq!(set.values(), ["#000", "#fff"]);
        assert!(set.is_multi());
    }

    #[test]
    fn test_extract_is_deterministic() {
        let svg = r##"<svg><path fill="#b00"/><path fill="#a00"/><path fill="#c00"/></svg>"##;
        let first = AttributeSet::extract(svg, SemanticAttr::Fill);
        let second = AttributeSet::extract(svg, SemanticAttr::Fill);
        assert_eq!(first, second);
        assert_eq!(first.values(), ["#a00", "#b00", "#c00"]);
    }

    #[test]
    fn test_extract_empty() {
        let set = AttributeSet::extract(r#"<svg><path d="M0 0"/></svg>"#, SemanticAttr::Stroke);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.is_multi());
        assert!(set.values().is_empty());
    }

    #[test]
    fn test_extract_skips_sentinel() {
        let svg = r##"<svg><path fill="none" stroke="#111"/><path fill="none-ish" stroke="none"/><path fill="#222"/></svg>"##;
        let fill = AttributeSet::extract(svg, SemanticAttr::Fill);
        assert_eq!(fill.values(), ["#222"]);
        let stroke = AttributeSet::extract(svg, SemanticAttr::Stroke);
        assert_eq!(stroke.values(), ["#111"]);
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let svg = r##"<svg><path FILL="#fff" Stroke="#000"/></svg>"##;
        assert!(AttributeSet::extract(svg, SemanticAttr::Fill).is_empty());
        assert!(AttributeSet::extract(svg, SemanticAttr::Stroke).is_empty());
    }

    #[test]
    fn test_stroke_ignores_stroke_width() {
        let svg = r##"<svg><path stroke-width="2" stroke-linecap="round" stroke="#123"/></svg>"##;
        let stroke = AttributeSet::extract(svg, SemanticAttr::Stroke);
        assert_eq!(stroke.occurrences(), [r##"stroke="#123""##]);
    }

    #[test]
    fn test_value_does_not_run_into_next_attribute() {
        let svg = r##"<svg><path d="M0 0" fill="#fff"/><path fill="#000" d="M1 1"/></svg>"##;
        let fill = AttributeSet::extract(svg, SemanticAttr::Fill);
        assert_eq!(fill.values(), ["#000", "#fff"]);
    }

    #[test]
    fn test_dashed_attributes() {
        let svg = r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><path stroke-width="2" fill-rule="evenodd" d="M0 0"/><path stroke-width="3"/><a href="x?a-b=1"/></svg>"##;
        assert_eq!(
            dashed_attributes(svg),
            ["fill-rule", "stroke-width", "xmlns:xlink"]
        );
    }

    #[test]
    fn test_semantic_attr_names() {
        let names: Vec<_> = SemanticAttr::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["fill", "stroke"]);
    }
}

//! Markup rewriting: literal attribute values become prop references.
//!
//! Passes run in a fixed order (see [`rewrite_markup`]):
//! 1. strip `width`/`height` from the root tag
//! 2. replace fill and stroke values with placeholders
//! 3. rename dashed attributes to camelCase

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::extract::{AttributeSet, RE_DASHED};

/// Opening root `<svg>` tag.
static RE_ROOT_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").unwrap());

/// `width="…"`/`height="…"` as whole attributes (never `stroke-width`).
static RE_DIMENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s(?:width|height)="[^"]*""#).unwrap());

/// Run every rewriting pass over minified markup.
pub fn rewrite_markup(markup: &str, fill: &AttributeSet, stroke: &AttributeSet) -> String {
    let markup = strip_root_dimensions(markup);
    let markup = rewrite_attribute(&markup, fill);
    let markup = rewrite_attribute(&markup, stroke);
    camelize_dashed(&markup).into_owned()
}

/// Remove the natural size from the root tag so the component controls it.
///
/// Child elements keep their own `width`/`height`.
pub fn strip_root_dimensions(markup: &str) -> String {
    let Some(root) = RE_ROOT_TAG.find(markup) else {
        return markup.to_string();
    };

    let stripped = RE_DIMENSION.replace_all(root.as_str(), "");

    let mut out = String::with_capacity(markup.len());
    out.push_str(&markup[..root.start()]);
    out.push_str(&stripped);
    out.push_str(&markup[root.end()..]);
    out
}

/// Replace every occurrence in `set` with its prop placeholder.
///
/// Single value: `fill={fill}`. Several: `fill={fill[i]}`, `i` being the
/// occurrence's index in the set.
pub fn rewrite_attribute(markup: &str, set: &AttributeSet) -> String {
    let name = set.attr().name();
    let mut out = markup.to_string();

    for (index, occurrence) in set.occurrences().iter().enumerate() {
        let placeholder = if set.is_multi() {
            format!("{name}={{{name}[{index}]}}")
        } else {
            format!("{name}={{{name}}}")
        };
        out = out.replace(occurrence.as_str(), &placeholder);
    }

    out
}

/// Rename dashed attribute names to camelCase (`stroke-width` → `strokeWidth`).
pub fn camelize_dashed(markup: &str) -> Cow<'_, str> {
    RE_DASHED.replace_all(markup, |caps: &regex::Captures<'_>| {
        format!("{}{}=", &caps[1], to_camel_case(&caps[2]))
    })
}

/// `stroke-linecap` → `strokeLinecap`, `xlink:href` → `xlinkHref`.
fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for ch in name.chars() {
        if ch == '-' || ch == ':' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

//! SVG minification using usvg.
//!
//! usvg resolves styles and writes a compact, flat document. Internal ids are
//! prefixed so icons bundled side by side never collide.
//!
//! Two things usvg would otherwise lose are restored around it:
//!
//! - `currentColor` is resolved to a concrete color during parsing, so it is
//!   masked with a color the icon does not use and unmasked after writing.
//! - The viewBox is baked into a root transform, so the written root gets a
//!   `viewBox` matching its size again.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::GenerateError;

/// `currentColor` is a CSS keyword, so any casing is valid.
static RE_CURRENT_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcurrentcolor\b").unwrap());

/// Minified icon, ready for the component pipeline.
#[derive(Debug, Clone)]
pub struct IconSource {
    /// Minified SVG markup.
    pub markup: String,
    /// Natural width in pixels.
    pub width: f32,
    /// Natural height in pixels.
    pub height: f32,
    /// Path of the source file.
    pub path: PathBuf,
}

impl IconSource {
    /// Whether the icon's natural width equals its natural height.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Minify SVG using usvg.
///
/// Every `id` (and every reference to it) gets `id_prefix` prepended.
/// Invalid markup yields [`GenerateError::Minification`] carrying usvg's message.
pub fn minify_svg(content: &[u8], path: &Path, id_prefix: &str) -> Result<IconSource, GenerateError> {
    let usvg_options = usvg::Options::default();

    let masked = mask_current_color(content);
    let data = masked.as_ref().map_or(content, |(text, _)| text.as_bytes());

    let tree = usvg::Tree::from_data(data, &usvg_options).map_err(|err| {
        GenerateError::Minification {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    let write_options = usvg::WriteOptions {
        id_prefix: (!id_prefix.is_empty()).then(|| id_prefix.to_string()),
        indent: usvg::Indent::None,
        attributes_indent: usvg::Indent::None,
        ..Default::default()
    };

    let size = tree.size();

    let mut markup = tree.to_string(&write_options);
    if let Some((_, sentinel)) = &masked {
        markup = markup.replace(sentinel.as_str(), "currentColor");
    }
    let markup = ensure_viewbox(markup, size.width(), size.height());

    Ok(IconSource {
        markup,
        width: size.width(),
        height: size.height(),
        path: path.to_path_buf(),
    })
}

/// Replace `currentColor` with a hex color absent from the source.
///
/// Returns the masked source and the color used, or `None` when the source
/// never mentions `currentColor`.
fn mask_current_color(content: &[u8]) -> Option<(String, String)> {
    let text = std::str::from_utf8(content).ok()?;
    if !RE_CURRENT_COLOR.is_match(text) {
        return None;
    }

    let lower = text.to_ascii_lowercase();
    let sentinel = (0..=u8::MAX)
        .map(|n| format!("#fe{n:02x}fe"))
        .find(|color| !lower.contains(color.as_str()))?;

    let masked = RE_CURRENT_COLOR.replace_all(text, sentinel.as_str()).into_owned();
    Some((masked, sentinel))
}

/// Insert `viewBox="0 0 {width} {height}"` into the root tag if it has none.
fn ensure_viewbox(markup: String, width: f32, height: f32) -> String {
    let Some(start) = markup.find("<svg") else {
        return markup;
    };
    let tag_end = markup[start..].find('>').map_or(markup.len(), |end| start + end);
    if markup[start..tag_end].contains("viewBox=\"") {
        return markup;
    }

    let insert_pos = start + 4; // len of "<svg"
    format!(
        "{} viewBox=\"0 0 {} {}\"{}",
        &markup[..insert_pos],
        format_dimension(width),
        format_dimension(height),
        &markup[insert_pos..]
    )
}

/// Format a natural dimension for generated code (`24.0` → `24`).
pub fn format_dimension(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.3}");
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

//! Icon template rendering using Handlebars.
//!
//! Templates see the [`ComponentPayload`] fields by name. After rendering, the
//! template's root `<svg>` tag is located and the icon markup is spliced into it.
//!
//! # Splicing
//!
//! ```text
//! template:  <svg className="icon" {...rest} />
//! icon:      <svg viewBox="0 0 24 24"><path fill={fill}/></svg>
//! result:    <svg viewBox="0 0 24 24" className="icon" {...rest}><path fill={fill}/></svg>
//! ```
//!
//! A template whose root tag is not self-closing embeds `{{svg}}` itself and is
//! left untouched.

use handlebars::Handlebars;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::payload::ComponentPayload;
use crate::embed::ICON_TEMPLATE;
use crate::error::GenerateError;

const TEMPLATE_NAME: &str = "icon";

/// First `<svg …>` or `<svg … />` tag. Group 1: attributes, group 2: `/` if self-closing.
static RE_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b([^>]*?)\s*(/?)>").unwrap());

/// Compiled icon template.
#[derive(Debug)]
pub struct IconTemplate {
    handlebars: Handlebars<'static>,
}

impl IconTemplate {
    /// Compile a template from source.
    ///
    /// Strict mode is on: referencing a field the payload does not have fails
    /// at render time instead of silently producing empty text.
    pub fn new(source: &str) -> Result<Self, GenerateError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(GenerateError::template)?;

        Ok(Self { handlebars })
    }

    /// The template embedded in the binary.
    pub fn builtin() -> Result<Self, GenerateError> {
        Self::new(ICON_TEMPLATE)
    }

    /// Render the component source for one icon.
    pub fn render(&self, payload: &ComponentPayload) -> Result<String, GenerateError> {
        let rendered = self
            .handlebars
            .render(TEMPLATE_NAME, payload)
            .map_err(GenerateError::template)?;

        splice_root(&rendered, payload)
    }
}

/// Merge the icon into the template's self-closing root tag.
fn splice_root(rendered: &str, payload: &ComponentPayload) -> Result<String, GenerateError> {
    let Some(root) = RE_ROOT.captures(rendered) else {
        return Err(GenerateError::TemplateStructure {
            component: payload.component_name.clone(),
        });
    };

    if root[2].is_empty() {
        return Ok(rendered.to_string());
    }

    let whole = root.get(0).map_or(0..0, |m| m.range());
    let spliced = merge_into_icon(&payload.svg, &root[1]);

    let mut out = String::with_capacity(rendered.len() + spliced.len());
    out.push_str(&rendered[..whole.start]);
    out.push_str(&spliced);
    out.push_str(&rendered[whole.end..]);
    Ok(out)
}

/// Append `extra` attributes to the icon's own root tag.
fn merge_into_icon(icon: &str, extra: &str) -> String {
    let mut merged = false;
    let out = RE_ROOT.replacen(icon, 1, |caps: &Captures<'_>| {
        merged = true;
        format!("<svg{}{}{}>", &caps[1], extra, &caps[2])
    });

    if merged {
        out.into_owned()
    } else {
        format!("<svg{extra}>{icon}</svg>")
    }
}

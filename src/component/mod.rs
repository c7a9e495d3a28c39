//! Component synthesis: icon → payload → rendered source → file.
//!
//! # Modules
//!
//! - [`name`]: component names from file names
//! - [`props`]: prop type literal and default values
//! - [`payload`]: template variables for one icon
//! - [`template`]: Handlebars rendering and root-tag splicing

pub mod name;
pub mod payload;
pub mod props;
pub mod template;

pub use name::{component_name, is_identifier, kebab_case};
pub use payload::ComponentPayload;
pub use template::IconTemplate;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::svg::IconSource;

/// Produce the final component source for a minified icon.
pub fn synthesize(
    icon: &IconSource,
    component_name: &str,
    template: &IconTemplate,
) -> Result<String, GenerateError> {
    let payload = ComponentPayload::build(icon, component_name);
    template.render(&payload)
}

/// Write component source to `<output>/<component_name><extension>`.
///
/// Whether overwriting is allowed is decided by the caller.
pub fn write_component(
    output: &Path,
    component_name: &str,
    extension: &str,
    content: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let path = output.join(format!("{component_name}{extension}"));
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_synthesize_and_write() {
        let icon = IconSource {
            markup: r##"<svg width="16" height="16" viewBox="0 0 16 16"><path stroke="#000" stroke-width="2" d="M0 0"/></svg>"##.into(),
            width: 16.0,
            height: 16.0,
            path: PathBuf::from("icons/line.svg"),
        };
        let template = IconTemplate::builtin().unwrap();
        let content = synthesize(&icon, "Line", &template).unwrap();

        assert!(content.contains(r##"const DEFAULT_STROKE_VALUE = "#000";"##));
        assert!(content.contains(r#"<svg viewBox="0 0 16 16" className="#));
        assert!(content.contains(r#"<path stroke={stroke} strokeWidth="2" d="M0 0"/>"#));
        assert!(!content.contains(r#"width="16""#));

        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("nested/icons");
        let path = write_component(&out_dir, "Line", ".tsx", &content).unwrap();
        assert_eq!(path, out_dir.join("Line.tsx"));
        assert_eq!(fs::read_to_string(path).unwrap(), content);
    }
}

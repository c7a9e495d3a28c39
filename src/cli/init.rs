//! Init command: starter config and editable template.
//!
//! Creates `icongen.toml` and `templates/icon.tsx.hbs` (a copy of the built-in
//! template). Existing files are left untouched.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::CONFIG_FILE;
use crate::embed::{ConfigVars, ICON_TEMPLATE};
use crate::log;

/// Template path written by init, relative to the project root.
const TEMPLATE_FILE: &str = "templates/icon.tsx.hbs";

/// Initialize an icon project in `root`.
pub fn init_project(root: &Path) -> Result<()> {
    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;

    let config = ConfigVars {
        entry: "icons/**/*.svg",
        output: "src/icons",
        template: TEMPLATE_FILE,
    }
    .render();

    write_if_missing(&root.join(CONFIG_FILE), &config)?;
    write_if_missing(&root.join(TEMPLATE_FILE), ICON_TEMPLATE)?;

    log!("init"; "ready, run `icongen generate` in {}", root.display());
    Ok(())
}

/// Write `content` to `path` unless the file already exists.
fn write_if_missing(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        log!("init"; "{} exists, skipped", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))?;
    log!("init"; "created {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconConfig;
    use tempfile::TempDir;

    #[test]
    fn test_init_project() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-icons");
        init_project(&root).unwrap();

        let config = fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        let parsed = IconConfig::from_str(&config).unwrap();
        assert_eq!(parsed.entry, "icons/**/*.svg");
        assert_eq!(parsed.template.as_deref(), Some(Path::new(TEMPLATE_FILE)));

        let template = fs::read_to_string(root.join(TEMPLATE_FILE)).unwrap();
        assert_eq!(template, ICON_TEMPLATE);
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "entry = \"mine/*.svg\"").unwrap();

        init_project(temp.path()).unwrap();

        let config = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, "entry = \"mine/*.svg\"");
        assert!(temp.path().join(TEMPLATE_FILE).exists());
    }

    #[test]
    fn test_write_if_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b.txt");
        assert!(write_if_missing(&path, "one").unwrap());
        assert!(!write_if_missing(&path, "two").unwrap());
        assert_eq!(fs::read_to_string(path).unwrap(), "one");
    }
}

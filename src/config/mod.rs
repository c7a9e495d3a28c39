//! Generator configuration for `icongen.toml`.
//!
//! Every key is optional. Values are layered:
//!
//! 1. built-in defaults
//! 2. `icongen.toml` (searched upward from cwd), paths relative to its directory
//! 3. command-line flags, paths relative to cwd
//!
//! ```toml
//! entry = "icons/**/*.svg"
//! output = "src/icons"
//! rewrite = false
//! prefix = ""
//! postfix = "Icon"
//! extension = ".tsx"
//! template = "templates/icon.tsx.hbs"
//! ```

mod error;
mod util;

pub use error::ConfigError;
pub use util::{find_config_file, normalize_path};

use crate::cli::GenerateArgs;
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "icongen.toml";

/// Default extension of generated components
pub const DEFAULT_EXTENSION: &str = ".tsx";

/// Root configuration structure representing icongen.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IconConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Glob pattern selecting SVG files.
    pub entry: String,

    /// Output directory for generated components.
    pub output: PathBuf,

    /// Overwrite components that already exist in `output`.
    pub rewrite: bool,

    /// Prefix for component names.
    pub prefix: String,

    /// Postfix for component names.
    pub postfix: String,

    /// Extension of generated files, always starting with `.`.
    pub extension: String,

    /// Custom Handlebars template. `None` uses the built-in one.
    pub template: Option<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            entry: String::new(),
            output: PathBuf::new(),
            rewrite: false,
            prefix: String::new(),
            postfix: String::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            template: None,
        }
    }
}

impl IconConfig {
    /// Load configuration for the generate command.
    ///
    /// A missing config file is not an error: defaults and flags are enough.
    pub fn load(config_name: &Path, args: &GenerateArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(config_name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                config.resolve_paths(&root);
                config.config_path = Some(normalize_path(&path));
                config
            }
            None => {
                let mut config = Self::default();
                config.resolve_paths(&cwd);
                config
            }
        };

        config.apply_args(args, &cwd);
        config.normalize_extension();

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    // ========================================================================
    // path resolution
    // ========================================================================

    /// Resolve file-relative paths against `root`.
    fn resolve_paths(&mut self, root: &Path) {
        self.entry = Self::resolve_pattern(&self.entry, root);
        self.output = normalize_path(&root.join(&self.output));
        if let Some(template) = self.template.take() {
            self.template = Some(Self::resolve_template(&template, root));
        }
    }

    /// Join a relative glob pattern onto `root`. Blank patterns stay as given.
    fn resolve_pattern(pattern: &str, root: &Path) -> String {
        if pattern.trim().is_empty() || Path::new(pattern).is_absolute() {
            return pattern.to_string();
        }
        root.join(pattern).to_string_lossy().into_owned()
    }

    /// Template path with tilde expansion.
    fn resolve_template(path: &Path, root: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        let full_path = if path.is_relative() {
            root.join(&path)
        } else {
            path
        };
        normalize_path(&full_path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply generate arguments from CLI. Paths are relative to `cwd`.
    fn apply_args(&mut self, args: &GenerateArgs, cwd: &Path) {
        crate::logger::set_verbose(args.verbose);

        if let Some(entry) = &args.entry {
            self.entry = Self::resolve_pattern(entry, cwd);
        }
        if let Some(output) = &args.output {
            self.output = normalize_path(&cwd.join(output));
        }
        if let Some(template) = &args.template {
            self.template = Some(Self::resolve_template(template, cwd));
        }

        Self::update_option(&mut self.rewrite, args.rewrite.as_ref());
        Self::update_option(&mut self.prefix, args.prefix.as_ref());
        Self::update_option(&mut self.postfix, args.postfix.as_ref());
        Self::update_option(&mut self.extension, args.extension.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// `tsx` → `.tsx`; empty falls back to the default.
    fn normalize_extension(&mut self) {
        let trimmed = self.extension.trim();
        self.extension = if trimmed.is_empty() {
            DEFAULT_EXTENSION.to_string()
        } else if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{trimmed}")
        };
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = IconConfig::from_str("").unwrap();
        assert_eq!(config, IconConfig::default());
        assert_eq!(config.extension, ".tsx");
        assert!(!config.rewrite);
        assert_eq!(config.template, None);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = IconConfig::from_str(
            r#"
entry = "icons/*.svg"
output = "src/icons"
rewrite = true
prefix = "Icon"
postfix = "Svg"
extension = ".jsx"
template = "tpl/icon.hbs"
"#,
        )
        .unwrap();
        assert_eq!(config.entry, "icons/*.svg");
        assert_eq!(config.output, PathBuf::from("src/icons"));
        assert!(config.rewrite);
        assert_eq!(config.prefix, "Icon");
        assert_eq!(config.postfix, "Svg");
        assert_eq!(config.extension, ".jsx");
        assert_eq!(config.template, Some(PathBuf::from("tpl/icon.hbs")));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (config, ignored) =
            IconConfig::parse_with_ignored("entry = \"a/*.svg\"\ncolour = \"red\"").unwrap();
        assert_eq!(config.entry, "a/*.svg");
        assert_eq!(ignored, ["colour"]);
    }

    #[test]
    fn test_invalid_toml() {
        let err = IconConfig::from_str("rewrite = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_resolve_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let mut config = IconConfig::from_str(
            "entry = \"icons/*.svg\"\noutput = \"out\"\ntemplate = \"icon.hbs\"",
        )
        .unwrap();
        config.resolve_paths(root);

        assert_eq!(config.entry, root.join("icons/*.svg").to_string_lossy());
        assert!(config.output.ends_with("out"));
        assert!(config.output.is_absolute());
        assert!(config.template.unwrap().ends_with("icon.hbs"));
    }

    #[test]
    fn test_resolve_keeps_empty_and_absolute_entry() {
        let root = Path::new("/project");
        assert_eq!(IconConfig::resolve_pattern("", root), "");
        assert_eq!(IconConfig::resolve_pattern("   ", root), "   ");
        assert_eq!(IconConfig::resolve_pattern("/abs/*.svg", root), "/abs/*.svg");
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config =
            IconConfig::from_str("prefix = \"File\"\npostfix = \"Icon\"\nrewrite = true").unwrap();
        let args = GenerateArgs {
            prefix: Some("Cli".into()),
            rewrite: Some(false),
            extension: Some("vue".into()),
            ..Default::default()
        };
        config.apply_args(&args, Path::new("/work"));
        config.normalize_extension();

        assert_eq!(config.prefix, "Cli");
        assert_eq!(config.postfix, "Icon");
        assert!(!config.rewrite);
        assert_eq!(config.extension, ".vue");
    }

    #[test]
    fn test_normalize_extension() {
        for (input, expected) in [("tsx", ".tsx"), (".jsx", ".jsx"), ("", ".tsx"), (" js ", ".js")] {
            let mut config = IconConfig {
                extension: input.to_string(),
                ..Default::default()
            };
            config.normalize_extension();
            assert_eq!(config.extension, expected, "failed for {input:?}");
        }
    }
}

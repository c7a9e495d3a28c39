//! Generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant is fatal: the run is all-or-nothing once generation begins.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Bad run parameters (empty entry, unparsable glob).
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to minify `{}`: {message}", .path.display())]
    Minification { path: PathBuf, message: String },

    /// Template output carries no `<svg>` root to splice the icon into.
    #[error("template output for `{component}` has no root <svg> element")]
    TemplateStructure { component: String },

    #[error("icon template error: {message}")]
    Template { message: String },
}

impl GenerateError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn template(err: impl std::fmt::Display) -> Self {
        Self::Template {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_error_display() {
        let err = GenerateError::configuration("entry should not be empty");
        assert_eq!(
            err.to_string(),
            "configuration error: entry should not be empty"
        );

        let err = GenerateError::Minification {
            path: PathBuf::from("icons/broken.svg"),
            message: "unexpected end of stream".into(),
        };
        let display = err.to_string();
        assert!(display.contains("icons/broken.svg"));
        assert!(display.contains("unexpected end of stream"));

        let err = GenerateError::TemplateStructure {
            component: "TimeFast".into(),
        };
        assert!(err.to_string().contains("TimeFast"));

        let err = GenerateError::template("unknown variable `colour`");
        assert!(err.to_string().contains("colour"));
    }
}

//! Generate command: SVG icons → component files.
//!
//! Runs sequentially and fails fast. A partially generated library is not a
//! useful result, so the first error aborts the run. Icons whose component
//! already exists are skipped unless `rewrite` is set.

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::component::{self, IconTemplate, component_name, is_identifier, kebab_case};
use crate::config::IconConfig;
use crate::error::GenerateError;
use crate::logger::{ProgressLine, is_verbose};
use crate::svg::{extract::dashed_attributes, minify_svg};
use crate::{debug, log};

/// Outcome of a generate run.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Written component files, in processing order.
    pub generated: Vec<PathBuf>,
    /// Component names skipped because they already existed.
    pub skipped: Vec<String>,
}

/// Generate components for every icon matched by `config.entry`.
pub fn generate_icons(config: &IconConfig) -> Result<GenerateSummary> {
    if config.entry.trim().is_empty() {
        return Err(GenerateError::configuration("entry should not be empty").into());
    }

    log!("generate"; "looking for svgs in {}", config.entry);
    let files = resolve_entry(&config.entry)?;

    let mut summary = GenerateSummary::default();
    if files.is_empty() {
        log!("generate"; "no svg files matched");
        return Ok(summary);
    }

    let template = load_template(config.template.as_deref())?;
    let mut existing = existing_stems(&config.output)?;

    let mut progress = ProgressLine::new("icons", files.len());
    for file in &files {
        let name = component_name(file, &config.prefix, &config.postfix);
        if !is_identifier(&name) {
            log!("warning"; "{} is not a valid component identifier", name);
        }

        if !config.rewrite && existing.contains(&name) {
            debug!("generate"; "skip {} (already exists)", name);
            summary.skipped.push(name);
            progress.inc();
            continue;
        }

        debug!("generate"; "processing {}", name);
        let path = generate_icon(file, &name, &template, config)?;

        existing.insert(name);
        summary.generated.push(path);
        progress.inc();
    }
    progress.finish();

    log!(
        "generate";
        "done: {} generated, {} skipped",
        summary.generated.len(),
        summary.skipped.len()
    );
    Ok(summary)
}

/// Minify one icon, synthesize its component and write it.
fn generate_icon(
    file: &Path,
    name: &str,
    template: &IconTemplate,
    config: &IconConfig,
) -> Result<PathBuf> {
    let content = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let icon = minify_svg(&content, file, &format!("{}-", kebab_case(name)))?;

    if is_verbose() {
        let dashed = dashed_attributes(&icon.markup);
        if !dashed.is_empty() {
            debug!("generate"; "{}: camelCase {}", name, dashed.join(", "));
        }
    }

    let source = component::synthesize(&icon, name, template)?;
    component::write_component(&config.output, name, &config.extension, &source)
}

/// Expand the entry glob into a sorted list of files.
fn resolve_entry(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|err| {
        GenerateError::configuration(format!("invalid entry pattern `{pattern}`: {err}"))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read entry match")?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Names of files already present in `output`, up to their first `.`.
fn existing_stems(output: &Path) -> Result<FxHashSet<String>> {
    let mut stems = FxHashSet::default();
    if !output.is_dir() {
        return Ok(stems);
    }

    let entries =
        fs::read_dir(output).with_context(|| format!("Failed to read {}", output.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read {}", output.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if let Some(stem) = file_name.split('.').next() {
            stems.insert(stem.to_string());
        }
    }
    Ok(stems)
}

/// Compile the configured template, or the built-in one.
fn load_template(path: Option<&Path>) -> Result<IconTemplate> {
    let template = match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            IconTemplate::new(&source)?
        }
        None => IconTemplate::builtin()?,
    };
    Ok(template)
}

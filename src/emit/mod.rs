//! Rendering generated documents into project files.

mod ignore;
mod manifest;
mod sink;

pub use ignore::{invalid_patterns, render_ignore_file};
pub use manifest::{patch_manifest, ESLINT_CONFIG_KEY};
pub use sink::{FileSink, FsSink, MemorySink};

use regex_lite::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

use crate::document::{EslintConfig, GeneratedConfig};
use crate::settings::ConfigOutputKind;

pub const DOTFILE: &str = ".eslintrc";
pub const SCRIPT_FILE: &str = ".eslintrc.js";
pub const MANIFEST_FILE: &str = "package.json";
pub const IGNORE_FILE: &str = ".eslintignore";

/// Errors while rendering or writing files
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("package.json is not valid JSON: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("package.json must contain a JSON object")]
    ManifestNotObject,
}

/// A file ready to be written, path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Pretty JSON for `.eslintrc`.
pub fn render_dotfile(config: &EslintConfig) -> Result<String, EmitError> {
    let mut text = serde_json::to_string_pretty(config).map_err(EmitError::Serialize)?;
    text.push('\n');
    Ok(text)
}

/// `module.exports = {...};` for `.eslintrc.js`.
///
/// Keys that are plain identifiers lose their quotes; keys such as
/// `no-unused-expressions` stay quoted.
pub fn render_script(config: &EslintConfig) -> Result<String, EmitError> {
    let json = serde_json::to_string_pretty(config).map_err(EmitError::Serialize)?;
    let literal = identifier_key_regex().replace_all(&json, "${1}:");
    Ok(format!("module.exports = {};\n", literal))
}

fn identifier_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([a-zA-Z0-9_$]+)":"#).expect("static pattern compiles"))
}

/// Every file produced by one run, in write order.
///
/// `existing_manifest` is the current `package.json`, if any.
pub fn render_files(
    generated: &GeneratedConfig,
    existing_manifest: Option<&str>,
    lint_script: &str,
) -> Result<Vec<GeneratedFile>, EmitError> {
    let mut files = Vec::new();
    let mut embedded = None;

    match generated.output_kind {
        ConfigOutputKind::Dotfile => {
            files.push(GeneratedFile::new(DOTFILE, render_dotfile(&generated.config)?));
        }
        ConfigOutputKind::Javascript => {
            files.push(GeneratedFile::new(SCRIPT_FILE, render_script(&generated.config)?));
        }
        ConfigOutputKind::Package => embedded = Some(&generated.config),
    }

    if let Some(test_config) = &generated.test_config {
        files.push(GeneratedFile::new(
            test_config.path(),
            render_dotfile(&test_config.config)?,
        ));
    }

    files.push(GeneratedFile::new(
        MANIFEST_FILE,
        patch_manifest(existing_manifest, lint_script, embedded)?,
    ));

    files.push(GeneratedFile::new(
        IGNORE_FILE,
        render_ignore_file(&generated.ignore_patterns),
    ));

    Ok(files)
}

/// Persist rendered files through a sink.
pub fn write_files(sink: &mut dyn FileSink, files: &[GeneratedFile]) -> Result<(), EmitError> {
    for file in files {
        sink.write(&file.path, &file.contents)?;
    }
    Ok(())
}

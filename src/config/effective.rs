//! Effective defaults with provenance
//!
//! Built-in defaults overlaid with an optional project file
//! (`.eslintgen.toml`), plus a record of which files contributed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use super::defaults::Defaults;
use super::merge::merge_layers;

/// Project defaults file looked up in the destination directory
pub const PROJECT_CONFIG_FILE: &str = ".eslintgen.toml";

/// Origin of a defaults layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    Project,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    /// Origin of this source
    pub origin: ConfigOrigin,

    /// File path (None for builtin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Defaults in effect for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveDefaults {
    /// The merged defaults
    pub defaults: Defaults,

    /// Contributing sources in precedence order
    pub sources: Vec<ConfigSource>,
}

impl EffectiveDefaults {
    /// Build from the built-in layer and an optional project file.
    ///
    /// A path that does not exist is skipped; a file that exists but cannot
    /// be read or parsed is an error.
    pub fn build(project_config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();
        let mut sources = Vec::new();

        layers.push(Defaults::default().to_value());
        sources.push(ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        });

        if let Some(path) = project_config_path {
            if path.exists() {
                let (value, digest) = Self::load_toml_file(path)?;
                tracing::debug!(path = %path.display(), %digest, "loaded project defaults");
                layers.push(value);
                sources.push(ConfigSource {
                    origin: ConfigOrigin::Project,
                    path: Some(path.to_string_lossy().to_string()),
                    digest: Some(digest),
                });
            }
        }

        let merged = merge_layers(layers);
        let defaults: Defaults = serde_json::from_value(merged)
            .map_err(|e| ConfigError::ParseError(format!("invalid defaults: {}", e)))?;

        Self::validate(&defaults)?;

        Ok(Self { defaults, sources })
    }

    /// Built-in defaults only.
    pub fn builtin() -> Self {
        Self {
            defaults: Defaults::default(),
            sources: vec![ConfigSource {
                origin: ConfigOrigin::Builtin,
                path: None,
                digest: None,
            }],
        }
    }

    /// Load and parse a TOML file, returning the value and digest
    fn load_toml_file(path: &Path) -> Result<(Value, String), ConfigError> {
        let bytes = fs::read(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)
            .map_err(|e| ConfigError::ParseError(format!("Invalid UTF-8: {}", e)))?;

        Ok((parse_toml(&contents)?, digest))
    }

    fn validate(defaults: &Defaults) -> Result<(), ConfigError> {
        if defaults.lint_script.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "lint_script must not be empty".to_string(),
            ));
        }

        if defaults.test_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "test_dir must not be empty".to_string(),
            ));
        }

        if Path::new(&defaults.test_dir).is_absolute() {
            return Err(ConfigError::ValidationError(format!(
                "test_dir must be relative to the project, got {}",
                defaults.test_dir
            )));
        }

        Ok(())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse TOML text into a JSON value.
pub fn parse_toml(contents: &str) -> Result<Value, ConfigError> {
    let toml_value: toml::Value = toml::from_str(contents)
        .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
    Ok(toml_to_json(toml_value))
}

/// Convert TOML Value to JSON Value
fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            Value::Object(map)
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

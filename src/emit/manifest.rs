//! `package.json` patching.

use serde_json::{json, Map, Value};

use super::EmitError;
use crate::config::deep_merge;
use crate::document::EslintConfig;

/// Key that holds an embedded ESLint config.
pub const ESLINT_CONFIG_KEY: &str = "eslintConfig";

/// Add the lint script (and optionally the config) to a manifest.
///
/// Existing keys keep their position. `eslintConfig` is replaced, not
/// merged, so stale keys from an older config do not survive.
pub fn patch_manifest(
    existing: Option<&str>,
    lint_script: &str,
    embedded: Option<&EslintConfig>,
) -> Result<String, EmitError> {
    let base = match existing {
        Some(text) if !text.trim().is_empty() => {
            let value: Value = serde_json::from_str(text).map_err(EmitError::Manifest)?;
            if !value.is_object() {
                return Err(EmitError::ManifestNotObject);
            }
            value
        }
        _ => Value::Object(Map::new()),
    };

    let mut patched = deep_merge(base, json!({"scripts": {"lint": lint_script}}));

    if let (Some(config), Some(map)) = (embedded, patched.as_object_mut()) {
        map.insert(
            ESLINT_CONFIG_KEY.to_string(),
            serde_json::to_value(config).map_err(EmitError::Serialize)?,
        );
    }

    let mut text = serde_json::to_string_pretty(&patched).map_err(EmitError::Serialize)?;
    text.push('\n');
    Ok(text)
}

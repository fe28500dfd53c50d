//! Resolution inputs: what kind of name is being resolved and how prefixes are stripped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The caller's declared intent for a raw name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    /// A shareable config named by `extends`.
    Config,
    /// A plugin named by `plugins` (or a plugin-style `extends`).
    Plugin,
}

impl NameKind {
    /// The package segment used in `eslint-{kind}-{name}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Config => "config",
            NameKind::Plugin => "plugin",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameKind {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "config" | "extends" => Ok(NameKind::Config),
            "plugin" | "plugins" => Ok(NameKind::Plugin),
            other => Err(NameError::UnknownKind(other.to_string())),
        }
    }
}

/// How ecosystem prefixes are removed from a raw name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripMode {
    /// Remove `eslint-` then `config-`/`plugin-` only at the start of the name.
    #[default]
    Anchored,

    /// Remove `eslint-`, `config-` and `plugin-` wherever they occur.
    ///
    /// Mangles names such as `my-eslint-plugin-helper`; only used when a
    /// project opts in explicitly.
    Global,
}

impl FromStr for StripMode {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anchored" => Ok(StripMode::Anchored),
            "global" => Ok(StripMode::Global),
            other => Err(NameError::UnknownStripMode(other.to_string())),
        }
    }
}

/// Errors parsing resolution inputs from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("unknown name kind '{0}' (expected config or plugin)")]
    UnknownKind(String),

    #[error("unknown strip mode '{0}' (expected anchored or global)")]
    UnknownStripMode(String),
}

//! Resolution result type.

use crate::mode::NameKind;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one raw `extends` or plugin name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedName {
    /// Prefix-stripped name to embed in the emitted config.
    pub canonical_name: String,

    /// Package to install, `None` for built-in configs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_identifier: Option<String>,

    /// The name refers to a config bundled with ESLint (`eslint:recommended`).
    pub is_built_in: bool,

    /// The name refers to a config shipped inside a plugin.
    pub is_plugin_reference: bool,

    /// Kind used to build the install identifier.
    pub effective_kind: NameKind,
}

impl ResolvedName {
    /// A built-in config: nothing to install, name kept verbatim.
    pub fn built_in(raw: &str, kind: NameKind) -> Self {
        Self {
            canonical_name: raw.to_string(),
            install_identifier: None,
            is_built_in: true,
            is_plugin_reference: false,
            effective_kind: kind,
        }
    }

    /// Whether resolving this name adds a package to the install list.
    pub fn needs_install(&self) -> bool {
        self.install_identifier.is_some()
    }
}

//! Canonical names for ESLint shareable configs and plugins.
//!
//! Users type names in whatever form they remember (`shopify`,
//! `eslint-config-shopify`, `plugin:shopify/default`, `eslint-plugin-react`).
//! The resolver turns each into the short name ESLint expects in a config
//! file plus the npm package that has to be installed for it.

mod mode;
mod resolved;

pub use mode::{NameError, NameKind, StripMode};
pub use resolved::ResolvedName;

use regex_lite::Regex;
use std::sync::OnceLock;

/// Marker that names a config bundled with ESLint itself.
const BUILT_IN_MARKER: &str = "eslint:";

/// Marker for configs exported by a plugin.
const PLUGIN_MARKER: &str = "plugin:";

/// Package prefix that also identifies a plugin-style `extends` target.
const PLUGIN_PACKAGE_PREFIX: &str = "eslint-plugin-";

/// Ecosystem prefixes stripped by [`StripMode::Global`].
const GLOBAL_PREFIX_PATTERN: &str = r"(eslint|config|plugin)-";

/// Resolves raw names under a fixed [`StripMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver {
    mode: StripMode,
}

impl NameResolver {
    /// Create a resolver with the given stripping mode.
    pub fn new(mode: StripMode) -> Self {
        Self { mode }
    }

    /// The stripping mode in use.
    pub fn mode(&self) -> StripMode {
        self.mode
    }

    /// Resolve one raw name.
    ///
    /// `kind` is the caller's intent: [`NameKind::Config`] for `extends`,
    /// [`NameKind::Plugin`] for `plugins`. An `extends` target written as a
    /// plugin reference is promoted to [`NameKind::Plugin`] for installation.
    pub fn resolve(&self, raw: &str, kind: NameKind) -> ResolvedName {
        let raw = raw.trim();

        if is_built_in(raw) {
            return ResolvedName::built_in(raw, kind);
        }

        let is_plugin_reference = kind == NameKind::Config && is_plugin_reference(raw);
        let effective_kind = if is_plugin_reference {
            NameKind::Plugin
        } else {
            kind
        };

        let unmarked = raw.strip_prefix(PLUGIN_MARKER).unwrap_or(raw);
        let stripped = strip_prefixes(unmarked, self.mode);

        let canonical_name = if is_plugin_reference {
            format!("{}{}", PLUGIN_MARKER, stripped)
        } else {
            stripped.clone()
        };

        ResolvedName {
            canonical_name,
            install_identifier: Some(package_name(&stripped, effective_kind)),
            is_built_in: false,
            is_plugin_reference,
            effective_kind,
        }
    }
}

/// Resolve with the default anchored stripping.
pub fn resolve(raw: &str, kind: NameKind) -> ResolvedName {
    NameResolver::default().resolve(raw, kind)
}

/// Whether `name` is a config shipped with ESLint (`eslint:recommended`).
pub fn is_built_in(name: &str) -> bool {
    name.contains(BUILT_IN_MARKER)
}

/// Whether an `extends` target points at a config inside a plugin.
pub fn is_plugin_reference(name: &str) -> bool {
    name.starts_with(PLUGIN_MARKER) || name.starts_with(PLUGIN_PACKAGE_PREFIX)
}

/// Remove ecosystem prefixes from a name that has no `plugin:` marker.
pub fn strip_prefixes(name: &str, mode: StripMode) -> String {
    match mode {
        StripMode::Anchored => {
            let name = name.strip_prefix("eslint-").unwrap_or(name);
            name.strip_prefix("config-")
                .or_else(|| name.strip_prefix("plugin-"))
                .unwrap_or(name)
                .to_string()
        }
        StripMode::Global => global_prefix_regex().replace_all(name, "").into_owned(),
    }
}

/// The part of a canonical name before the first `:` or `/`.
pub fn first_segment(name: &str) -> &str {
    name.split([':', '/']).next().unwrap_or(name)
}

/// `eslint-{kind}-{first segment}` for an already stripped name.
pub fn package_name(stripped: &str, kind: NameKind) -> String {
    format!("eslint-{}-{}", kind, first_segment(stripped))
}

fn global_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GLOBAL_PREFIX_PATTERN).expect("static pattern compiles"))
}

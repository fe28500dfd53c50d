//! Generator settings
//!
//! Raw inputs (explicit options and prompt answers) share one shape,
//! [`RawSettings`]. [`merge`] reconciles them with the project defaults into
//! the [`Settings`] record every output is derived from.

mod list;
mod merger;

pub use list::{comma_separated, ListInput};
pub use merger::{
    merge, ConfigMerger, Field, MergeStrategy, BASE_IGNORE_PATTERNS, TEST_IGNORE_PATTERNS,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Supported test frameworks. Each one is also an ESLint environment name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    #[serde(alias = "Mocha", alias = "MOCHA")]
    Mocha,
    #[serde(alias = "Jasmine", alias = "JASMINE")]
    Jasmine,
    #[serde(alias = "Jest", alias = "JEST")]
    Jest,
}

impl TestFramework {
    pub const ALL: [TestFramework; 3] =
        [TestFramework::Mocha, TestFramework::Jasmine, TestFramework::Jest];

    /// The ESLint environment enabled for this framework.
    pub fn env_name(&self) -> &'static str {
        match self {
            TestFramework::Mocha => "mocha",
            TestFramework::Jasmine => "jasmine",
            TestFramework::Jest => "jest",
        }
    }

    /// Parse a framework name in any letter case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|framework| framework.env_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_name())
    }
}

/// Where the generated configuration is written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOutputKind {
    /// `.eslintrc` (JSON).
    #[default]
    Dotfile,
    /// `.eslintrc.js` exporting an object literal.
    Javascript,
    /// `eslintConfig` key of `package.json`.
    Package,
}

impl ConfigOutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigOutputKind::Dotfile => "dotfile",
            ConfigOutputKind::Javascript => "javascript",
            ConfigOutputKind::Package => "package",
        }
    }

    /// Parse a kind name in any letter case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        [Self::Dotfile, Self::Javascript, Self::Package]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ConfigOutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit options or prompt answers, before merging.
///
/// Keys follow the command-line option names; answer-only keys
/// (`needsTests`, `usePackage`) and the older `env`/`testingFramework`/
/// `testingDir` spellings are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, alias = "env", skip_serializing_if = "Option::is_none")]
    pub envs: Option<ListInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<ListInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel: Option<bool>,

    #[serde(
        default,
        alias = "testingFramework",
        skip_serializing_if = "Option::is_none"
    )]
    pub test_framework: Option<TestFramework>,

    #[serde(default, alias = "testingDir", skip_serializing_if = "Option::is_none")]
    pub test_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<ListInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_rules: Option<ListInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_type: Option<ConfigOutputKind>,

    /// Answer to "Do you want to lint your tests?".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_tests: Option<bool>,

    /// Answer to "Do you want to put your configuration in package.json?".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_package: Option<bool>,
}

impl RawSettings {
    /// `extends`, treating an empty string as absent.
    pub fn extends_value(&self) -> Option<&str> {
        non_empty(self.extends.as_deref())
    }

    /// `testDir`, treating an empty string as absent.
    pub fn test_dir_value(&self) -> Option<&str> {
        non_empty(self.test_dir.as_deref())
    }

    /// Whether a test framework or test directory was given.
    pub fn names_test_setup(&self) -> bool {
        self.test_framework.is_some() || self.test_dir_value().is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fully merged generator settings.
///
/// Only `extends_target`, `test_framework` and `test_directory` may be unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends_target: Option<String>,

    pub environments: BTreeSet<String>,

    /// Raw plugin names in the order given; duplicates are kept.
    pub plugins: Vec<String>,

    pub uses_babel: bool,

    pub ignore_patterns: Vec<String>,

    pub disabled_rules: BTreeSet<String>,

    pub needs_test_linting: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_framework: Option<TestFramework>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_directory: Option<String>,

    pub config_output_kind: ConfigOutputKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_parse_any_case() {
        assert_eq!(TestFramework::parse("Mocha"), Some(TestFramework::Mocha));
        assert_eq!(TestFramework::parse("jest"), Some(TestFramework::Jest));
        assert_eq!(TestFramework::parse("tap"), None);
    }

    #[test]
    fn test_framework_deserialize_capitalized() {
        let framework: TestFramework = serde_json::from_str("\"Jasmine\"").unwrap();
        assert_eq!(framework, TestFramework::Jasmine);
    }

    #[test]
    fn test_raw_settings_from_option_keys() {
        let raw: RawSettings = serde_json::from_value(serde_json::json!({
            "extends": "shopify",
            "envs": "node, browser",
            "babel": false,
            "testFramework": "mocha",
            "testDir": "test/",
            "disableRules": ["no-console"],
            "configType": "javascript"
        }))
        .unwrap();

        assert_eq!(raw.extends_value(), Some("shopify"));
        assert_eq!(raw.envs, Some(ListInput::Text("node, browser".into())));
        assert_eq!(raw.babel, Some(false));
        assert_eq!(raw.test_framework, Some(TestFramework::Mocha));
        assert_eq!(raw.config_type, Some(ConfigOutputKind::Javascript));
        assert!(raw.names_test_setup());
    }

    #[test]
    fn test_raw_settings_legacy_aliases() {
        let raw: RawSettings = serde_json::from_value(serde_json::json!({
            "env": ["node"],
            "testingFramework": "Jest",
            "testingDir": "spec"
        }))
        .unwrap();

        assert_eq!(raw.envs, Some(ListInput::Items(vec!["node".into()])));
        assert_eq!(raw.test_framework, Some(TestFramework::Jest));
        assert_eq!(raw.test_dir_value(), Some("spec"));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let raw = RawSettings {
            extends: Some("  ".into()),
            test_dir: Some(String::new()),
            ..Default::default()
        };
        assert!(raw.extends_value().is_none());
        assert!(!raw.names_test_setup());
    }
}

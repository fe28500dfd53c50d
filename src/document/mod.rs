//! The emitted ESLint configuration document.
//!
//! [`build`] turns merged [`Settings`] into the document, the optional
//! test-directory document and the install plan. Key order of the document
//! is fixed by the field order of [`EslintConfig`].

mod test_overrides;

pub use test_overrides::{test_globals, test_rules, TEST_GLOBALS, TEST_RULE_OVERRIDES};

use eslintgen_names::{NameKind, NameResolver, ResolvedName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::install::InstallPlan;
use crate::settings::{ConfigOutputKind, Settings};

/// Keys of an emitted config, in the order they are written.
pub const CONFIG_KEY_ORDER: [&str; 6] = ["extends", "parser", "plugins", "env", "globals", "rules"];

/// Parser used when Babel is enabled.
pub const BABEL_PARSER: &str = "babel-eslint";

/// Environment implied by the Babel parser.
pub const BABEL_ENV: &str = "es6";

/// The linter itself, always installed first.
pub const ESLINT_PACKAGE: &str = "eslint";

/// Rule level for a disabled rule.
pub const RULE_OFF: u8 = 0;

/// An ESLint configuration object.
///
/// Field order is [`CONFIG_KEY_ORDER`]; absent keys are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EslintConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, bool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<BTreeMap<String, bool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<BTreeMap<String, u8>>,
}

impl EslintConfig {
    /// Keys that will be serialized, in output order.
    pub fn present_keys(&self) -> Vec<&'static str> {
        let present = [
            self.extends.is_some(),
            self.parser.is_some(),
            self.plugins.is_some(),
            self.env.is_some(),
            self.globals.is_some(),
            self.rules.is_some(),
        ];

        CONFIG_KEY_ORDER
            .iter()
            .zip(present)
            .filter_map(|(key, is_present)| is_present.then_some(*key))
            .collect()
    }
}

/// Config written into the test directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfig {
    /// Test directory without a trailing slash.
    pub directory: String,

    pub config: EslintConfig,
}

impl TestConfig {
    /// `<directory>/.eslintrc`
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(".eslintrc")
    }
}

/// Everything derived from one settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedConfig {
    pub config: EslintConfig,

    pub output_kind: ConfigOutputKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_config: Option<TestConfig>,

    pub install: InstallPlan,

    pub ignore_patterns: Vec<String>,

    /// Resolution of the extends target followed by each plugin.
    pub resolved_names: Vec<ResolvedName>,
}

/// Derive the documents and install plan from merged settings.
pub fn build(settings: &Settings, resolver: &NameResolver) -> GeneratedConfig {
    let mut install = InstallPlan::new();
    let mut resolved_names = Vec::new();
    install.push(ESLINT_PACKAGE);

    let mut env: BTreeMap<String, bool> = settings
        .environments
        .iter()
        .map(|name| (name.clone(), true))
        .collect();

    let mut config = EslintConfig::default();

    if settings.uses_babel {
        install.push(BABEL_PARSER);
        config.parser = Some(BABEL_PARSER.to_string());
        env.insert(BABEL_ENV.to_string(), true);
    }

    if let Some(target) = settings.extends_target.as_deref().filter(|t| !t.is_empty()) {
        let resolved = resolver.resolve(target, NameKind::Config);
        tracing::debug!(raw = target, canonical = %resolved.canonical_name, "resolved extends");

        config.extends = Some(resolved.canonical_name.clone());
        if let Some(package) = &resolved.install_identifier {
            install.push(package.clone());
        }
        resolved_names.push(resolved);
    }

    let mut plugins = Vec::new();
    for raw in &settings.plugins {
        if raw.trim().is_empty() {
            tracing::warn!("skipping empty plugin name");
            continue;
        }

        let resolved = resolver.resolve(raw, NameKind::Plugin);
        tracing::debug!(raw = %raw, canonical = %resolved.canonical_name, "resolved plugin");

        plugins.push(resolved.canonical_name.clone());
        if let Some(package) = &resolved.install_identifier {
            install.push(package.clone());
        }
        resolved_names.push(resolved);
    }
    if !plugins.is_empty() {
        config.plugins = Some(plugins);
    }

    config.rules = Some(
        settings
            .disabled_rules
            .iter()
            .map(|rule| (rule.clone(), RULE_OFF))
            .collect(),
    );

    let test_config = build_test_config(settings, &env);
    config.env = Some(env);

    GeneratedConfig {
        config,
        output_kind: settings.config_output_kind,
        test_config,
        install,
        ignore_patterns: settings.ignore_patterns.clone(),
        resolved_names,
    }
}

fn build_test_config(settings: &Settings, env: &BTreeMap<String, bool>) -> Option<TestConfig> {
    if !settings.needs_test_linting {
        return None;
    }

    let raw = settings.test_directory.as_deref()?;
    let Some(directory) = normalize_test_dir(raw) else {
        tracing::warn!(
            directory = raw,
            "test directory is the project root or outside it; skipping test config"
        );
        return None;
    };

    let mut test_env = env.clone();
    if let Some(framework) = settings.test_framework {
        test_env.insert(framework.env_name().to_string(), true);
    }

    Some(TestConfig {
        directory,
        config: EslintConfig {
            env: Some(test_env),
            globals: Some(test_globals()),
            rules: Some(test_rules()),
            ..Default::default()
        },
    })
}

/// A test directory relative to the project root, `/`-separated.
///
/// `None` when the path names the root itself (`.`, `./`, `test/..`) or
/// leaves the project (absolute, or `..` past the root).
fn normalize_test_dir(raw: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();

    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (!parts.is_empty()).then(|| parts.join("/"))
}

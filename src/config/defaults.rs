//! Built-in generator defaults (layer 1)
//!
//! Also the prompt defaults: every question offers the value found here.

use eslintgen_names::StripMode;
use serde::{Deserialize, Serialize};

use crate::settings::ConfigOutputKind;

/// Default generator values, optionally overridden by a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Config to extend (default: "eslint:recommended")
    pub extends: Option<String>,

    /// Use the Babel parser and the es6 environment (default: true)
    pub babel: bool,

    /// Environments enabled when none are chosen (default: none)
    pub envs: Vec<String>,

    /// Plugins installed when none are chosen (default: none)
    pub plugins: Vec<String>,

    /// Extra ignore patterns (default: none)
    pub ignore: Vec<String>,

    /// Rules forced off (default: none)
    pub disable_rules: Vec<String>,

    /// Prompt default for "lint your tests?" (default: true)
    pub needs_tests: bool,

    /// Test directory when test linting is on (default: "test")
    pub test_dir: String,

    /// Prompt default for "configuration in package.json?" (default: false)
    pub use_package: bool,

    /// Output kind (default: dotfile)
    pub config_type: ConfigOutputKind,

    /// `scripts.lint` added to package.json (default: "eslint .")
    pub lint_script: String,

    /// Name prefix stripping (default: anchored)
    pub name_stripping: StripMode,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            extends: Some("eslint:recommended".to_string()),
            babel: true,
            envs: Vec::new(),
            plugins: Vec::new(),
            ignore: Vec::new(),
            disable_rules: Vec::new(),
            needs_tests: true,
            test_dir: "test".to_string(),
            use_package: false,
            config_type: ConfigOutputKind::Dotfile,
            lint_script: "eslint .".to_string(),
            name_stripping: StripMode::Anchored,
        }
    }
}

impl Defaults {
    /// Convert to JSON Value for layering
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "extends": self.extends,
            "babel": self.babel,
            "envs": self.envs,
            "plugins": self.plugins,
            "ignore": self.ignore,
            "disable_rules": self.disable_rules,
            "needs_tests": self.needs_tests,
            "test_dir": self.test_dir,
            "use_package": self.use_package,
            "config_type": self.config_type,
            "lint_script": self.lint_script,
            "name_stripping": self.name_stripping,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.extends.as_deref(), Some("eslint:recommended"));
        assert!(defaults.babel);
        assert!(defaults.needs_tests);
        assert!(!defaults.use_package);
        assert_eq!(defaults.test_dir, "test");
        assert_eq!(defaults.config_type, ConfigOutputKind::Dotfile);
        assert_eq!(defaults.name_stripping, StripMode::Anchored);
    }

    #[test]
    fn test_to_value_round_trips() {
        let defaults = Defaults::default();
        let value = defaults.to_value();

        assert_eq!(value["config_type"], "dotfile");
        assert_eq!(value["name_stripping"], "anchored");

        let parsed: Defaults = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, defaults);
    }

    #[test]
    fn test_partial_value_fills_defaults() {
        let parsed: Defaults = serde_json::from_value(serde_json::json!({
            "babel": false
        }))
        .unwrap();

        assert!(!parsed.babel);
        assert_eq!(parsed.lint_script, "eslint .");
    }
}

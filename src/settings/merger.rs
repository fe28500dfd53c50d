//! Merge of explicit options, prompt answers and defaults.
//!
//! - Scalars: explicit option, else answer, else default (replace)
//! - Lists: explicit entries followed by answered entries (concatenate);
//!   the default list only applies when neither source has the field
//! - Ignore patterns: always wrapped by the fixed base and test sets

use std::collections::BTreeSet;

use super::{ConfigOutputKind, ListInput, RawSettings, Settings};
use crate::config::Defaults;

/// Patterns every generated `.eslintignore` starts with.
pub const BASE_IGNORE_PATTERNS: [&str; 2] = ["node_modules/", "coverage/"];

/// Patterns appended when tests are not linted.
pub const TEST_IGNORE_PATTERNS: [&str; 2] = ["test/", "spec/"];

/// How the explicit and answered values of one field combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// The explicit value wins outright.
    Replace,
    /// Explicit entries first, then answered entries. No deduplication.
    Concatenate,
}

/// Fields of [`Settings`] that are sourced from options and answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Extends,
    Environments,
    Plugins,
    Babel,
    TestFramework,
    TestDirectory,
    IgnorePatterns,
    DisabledRules,
    ConfigOutputKind,
}

impl Field {
    /// The merge strategy used for this field.
    pub const fn strategy(self) -> MergeStrategy {
        match self {
            Field::Environments | Field::Plugins | Field::IgnorePatterns | Field::DisabledRules => {
                MergeStrategy::Concatenate
            }
            Field::Extends
            | Field::Babel
            | Field::TestFramework
            | Field::TestDirectory
            | Field::ConfigOutputKind => MergeStrategy::Replace,
        }
    }
}

impl MergeStrategy {
    /// Combine one field's explicit and answered values. `None` when neither
    /// source supplied the field.
    pub fn combine<T>(self, explicit: Option<Vec<T>>, answer: Option<Vec<T>>) -> Option<Vec<T>> {
        match (self, explicit, answer) {
            (MergeStrategy::Concatenate, Some(mut explicit), Some(answer)) => {
                explicit.extend(answer);
                Some(explicit)
            }
            (_, explicit, answer) => explicit.or(answer),
        }
    }

    /// Combine one scalar field. A scalar holds a single value, so the first
    /// entry of the combined list is kept.
    pub fn combine_scalar<T>(self, explicit: Option<T>, answer: Option<T>) -> Option<T> {
        self.combine(explicit.map(|v| vec![v]), answer.map(|v| vec![v]))
            .and_then(|values| values.into_iter().next())
    }
}

/// Merges raw inputs against a fixed set of defaults.
#[derive(Debug, Clone, Copy)]
pub struct ConfigMerger<'a> {
    defaults: &'a Defaults,
}

impl<'a> ConfigMerger<'a> {
    pub fn new(defaults: &'a Defaults) -> Self {
        Self { defaults }
    }

    /// Produce the settings record for one generator run.
    ///
    /// Never fails: every field has a default, and options that the prompt
    /// layer should have suppressed are merged instead of rejected.
    pub fn merge(&self, explicit: &RawSettings, answers: &RawSettings) -> Settings {
        let defaults = self.defaults;

        let needs_test_linting = explicit.names_test_setup()
            || explicit.needs_tests == Some(true)
            || answers.needs_tests == Some(true);

        let extends_target = self
            .scalar(Field::Extends, explicit.extends_value(), answers.extends_value())
            .or_else(|| defaults.extends.as_deref().filter(|e| !e.trim().is_empty()))
            .map(|e| e.trim().to_string());

        let environments = self
            .list(Field::Environments, &explicit.envs, &answers.envs, &defaults.envs)
            .into_iter()
            .filter(|env| !env.is_empty())
            .collect::<BTreeSet<_>>();

        let plugins = self.list(Field::Plugins, &explicit.plugins, &answers.plugins, &defaults.plugins);

        let uses_babel = self
            .scalar(Field::Babel, explicit.babel, answers.babel)
            .unwrap_or(defaults.babel);

        let disabled_rules = self
            .list(
                Field::DisabledRules,
                &explicit.disable_rules,
                &answers.disable_rules,
                &defaults.disable_rules,
            )
            .into_iter()
            .filter(|rule| !rule.is_empty())
            .collect::<BTreeSet<_>>();

        let test_framework = self
            .scalar(Field::TestFramework, explicit.test_framework, answers.test_framework)
            .filter(|_| needs_test_linting);

        let test_directory = self
            .scalar(Field::TestDirectory, explicit.test_dir_value(), answers.test_dir_value())
            .or_else(|| Some(defaults.test_dir.as_str()).filter(|d| !d.trim().is_empty()))
            .filter(|_| needs_test_linting)
            .map(|d| d.trim().to_string());

        let config_output_kind = self
            .scalar(Field::ConfigOutputKind, explicit.config_type, answers.config_type)
            .or_else(|| {
                let use_package = explicit.use_package.or(answers.use_package);
                (use_package == Some(true)).then_some(ConfigOutputKind::Package)
            })
            .unwrap_or(defaults.config_type);

        let ignore_patterns = self.ignore_patterns(explicit, answers, needs_test_linting);

        Settings {
            extends_target,
            environments,
            plugins,
            uses_babel,
            ignore_patterns,
            disabled_rules,
            needs_test_linting,
            test_framework,
            test_directory,
            config_output_kind,
        }
    }

    fn scalar<T>(&self, field: Field, explicit: Option<T>, answer: Option<T>) -> Option<T> {
        field.strategy().combine_scalar(explicit, answer)
    }

    fn list(
        &self,
        field: Field,
        explicit: &Option<ListInput>,
        answer: &Option<ListInput>,
        default: &[String],
    ) -> Vec<String> {
        let explicit = explicit.clone().map(ListInput::into_items);
        let answer = answer.clone().map(ListInput::into_items);

        field
            .strategy()
            .combine(explicit, answer)
            .unwrap_or_else(|| default.to_vec())
    }

    fn ignore_patterns(
        &self,
        explicit: &RawSettings,
        answers: &RawSettings,
        needs_test_linting: bool,
    ) -> Vec<String> {
        let user = self.list(
            Field::IgnorePatterns,
            &explicit.ignore,
            &answers.ignore,
            &self.defaults.ignore,
        );

        let mut patterns: Vec<String> =
            BASE_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect();
        patterns.extend(user.into_iter().filter(|p| !p.is_empty()));

        if !needs_test_linting {
            patterns.extend(TEST_IGNORE_PATTERNS.iter().map(|p| p.to_string()));
        }

        patterns
    }
}

/// Merge with the given defaults.
pub fn merge(explicit: &RawSettings, answers: &RawSettings, defaults: &Defaults) -> Settings {
    ConfigMerger::new(defaults).merge(explicit, answers)
}

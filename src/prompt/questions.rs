//! The question catalogue.
//!
//! Each question is asked only when its field was not given as an option,
//! mirroring the option/answer precedence of the merger.

use crate::config::Defaults;
use crate::settings::{ConfigOutputKind, RawSettings, TestFramework};

/// Choices for the environment question.
pub const ENV_CHOICES: &[&str] = &["browser", "node", "jquery"];

/// Choices for the configuration file question. `package` is chosen through
/// the `usePackage` question instead.
pub const CONFIG_TYPE_CHOICES: &[&str] = &["dotfile", "javascript"];

/// How a question is presented and what it answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text; list fields take comma-separated text.
    Text { default: String },
    /// Yes or no.
    Confirm { default: bool },
    /// Pick any number of choices.
    MultiSelect {
        choices: Vec<String>,
        defaults: Vec<String>,
    },
    /// Pick exactly one choice.
    Select { choices: Vec<String>, default: usize },
}

/// One question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Answer key, same spelling as the option key.
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    fn text(name: &'static str, message: &'static str, default: impl Into<String>) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Text {
                default: default.into(),
            },
        }
    }

    fn confirm(name: &'static str, message: &'static str, default: bool) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Confirm { default },
        }
    }

    /// The answer given when the user accepts the default.
    pub fn default_answer(&self) -> Answer {
        match &self.kind {
            QuestionKind::Text { default } => Answer::Text(default.clone()),
            QuestionKind::Confirm { default } => Answer::Bool(*default),
            QuestionKind::MultiSelect { defaults, .. } => Answer::List(defaults.clone()),
            QuestionKind::Select { choices, default } => {
                Answer::Text(choices.get(*default).cloned().unwrap_or_default())
            }
        }
    }
}

/// A raw answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

pub fn extends(defaults: &Defaults) -> Question {
    Question::text(
        "extends",
        "The ESLint configuration to extend.",
        defaults.extends.clone().unwrap_or_default(),
    )
}

pub fn babel(defaults: &Defaults) -> Question {
    Question::confirm("babel", "Would you like to use the Babel parser?", defaults.babel)
}

pub fn env(defaults: &Defaults) -> Question {
    Question {
        name: "env",
        message: "The ESLint environment(s) for this project.",
        kind: QuestionKind::MultiSelect {
            choices: ENV_CHOICES.iter().map(|c| c.to_string()).collect(),
            defaults: defaults.envs.clone(),
        },
    }
}

pub fn plugins(defaults: &Defaults) -> Question {
    Question::text(
        "plugins",
        "The ESLint plugins to install (comma-separated).",
        defaults.plugins.join(", "),
    )
}

pub fn ignore(defaults: &Defaults) -> Question {
    Question::text(
        "ignore",
        "The files and directories to ignore (comma-separated).",
        defaults.ignore.join(", "),
    )
}

pub fn disable_rules(defaults: &Defaults) -> Question {
    Question::text(
        "disableRules",
        "Any rules you would like to forcibly disable (comma-separated).",
        defaults.disable_rules.join(", "),
    )
}

pub fn needs_tests(defaults: &Defaults) -> Question {
    Question::confirm("needsTests", "Do you want to lint your tests?", defaults.needs_tests)
}

pub fn test_framework() -> Question {
    Question {
        name: "testFramework",
        message: "What testing framework do you use?",
        kind: QuestionKind::Select {
            choices: TestFramework::ALL.iter().map(|f| f.to_string()).collect(),
            default: 0,
        },
    }
}

pub fn test_dir(defaults: &Defaults) -> Question {
    Question::text("testDir", "What directory are your tests in?", defaults.test_dir.clone())
}

pub fn use_package(defaults: &Defaults) -> Question {
    Question::confirm(
        "usePackage",
        "Do you want to put your configuration in package.json?",
        defaults.use_package || defaults.config_type == ConfigOutputKind::Package,
    )
}

pub fn config_type(defaults: &Defaults) -> Question {
    let default = CONFIG_TYPE_CHOICES
        .iter()
        .position(|c| *c == defaults.config_type.as_str())
        .unwrap_or(0);

    Question {
        name: "configType",
        message: "What type of file would you like to create for configuration?",
        kind: QuestionKind::Select {
            choices: CONFIG_TYPE_CHOICES.iter().map(|c| c.to_string()).collect(),
            default,
        },
    }
}

/// Whether the test framework question applies.
pub fn wants_test_framework(explicit: &RawSettings, answers: &RawSettings) -> bool {
    explicit.test_framework.is_none()
        && (answers.needs_tests == Some(true) || explicit.test_dir_value().is_some())
}

/// Whether the test directory question applies.
pub fn wants_test_dir(explicit: &RawSettings, answers: &RawSettings) -> bool {
    explicit.test_dir_value().is_none()
        && (answers.needs_tests == Some(true) || explicit.test_framework.is_some())
}

/// Whether the file type question applies.
pub fn wants_config_type(explicit: &RawSettings, answers: &RawSettings) -> bool {
    explicit.config_type.is_none() && answers.use_package != Some(true)
}

//! Interactive answers
//!
//! Questions are plain data ([`questions`]); a [`Prompter`] answers them.
//! [`collect_answers`] walks the catalogue in order and turns the raw
//! answers into [`RawSettings`] for the merger.

pub mod questions;
mod scripted;
mod terminal;

pub use questions::{Answer, Question, QuestionKind};
pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Defaults;
use crate::settings::{ConfigOutputKind, ListInput, RawSettings, TestFramework};

/// Prompt errors
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt aborted")]
    Aborted,

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("invalid answer for {question}: {reason}")]
    InvalidAnswer { question: String, reason: String },

    #[error("failed to read answers from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse answers: {0}")]
    Parse(String),
}

/// Answers one question at a time.
pub trait Prompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError>;
}

/// Ask every applicable question and collect the answers.
///
/// A question is skipped when `explicit` already supplies its field.
pub fn collect_answers(
    prompter: &mut dyn Prompter,
    explicit: &RawSettings,
    defaults: &Defaults,
) -> Result<RawSettings, PromptError> {
    let mut answers = RawSettings::default();

    if explicit.extends.is_none() {
        answers.extends = Some(text(prompter, &questions::extends(defaults))?);
    }
    if explicit.babel.is_none() {
        answers.babel = Some(confirm(prompter, &questions::babel(defaults))?);
    }
    if explicit.envs.is_none() {
        answers.envs = Some(list(prompter, &questions::env(defaults))?);
    }
    if explicit.plugins.is_none() {
        answers.plugins = Some(list(prompter, &questions::plugins(defaults))?);
    }
    if explicit.ignore.is_none() {
        answers.ignore = Some(list(prompter, &questions::ignore(defaults))?);
    }
    if explicit.disable_rules.is_none() {
        answers.disable_rules = Some(list(prompter, &questions::disable_rules(defaults))?);
    }

    if !explicit.names_test_setup() && explicit.needs_tests.is_none() {
        answers.needs_tests = Some(confirm(prompter, &questions::needs_tests(defaults))?);
    } else if explicit.needs_tests == Some(true) {
        answers.needs_tests = Some(true);
    }

    if questions::wants_test_framework(explicit, &answers) {
        let question = questions::test_framework();
        let name = text(prompter, &question)?;
        let framework = TestFramework::parse(&name).ok_or_else(|| invalid(&question, &name))?;
        answers.test_framework = Some(framework);
    }
    if questions::wants_test_dir(explicit, &answers) {
        answers.test_dir = Some(text(prompter, &questions::test_dir(defaults))?);
    }

    if explicit.config_type.is_none() {
        if explicit.use_package.is_none() {
            answers.use_package = Some(confirm(prompter, &questions::use_package(defaults))?);
        }

        if questions::wants_config_type(explicit, &answers) && explicit.use_package != Some(true) {
            let question = questions::config_type(defaults);
            let name = text(prompter, &question)?;
            let kind = ConfigOutputKind::parse(&name).ok_or_else(|| invalid(&question, &name))?;
            answers.config_type = Some(kind);
        }
    }

    tracing::debug!(?answers, "collected answers");
    Ok(answers)
}

fn text(prompter: &mut dyn Prompter, question: &Question) -> Result<String, PromptError> {
    match prompter.ask(question)? {
        Answer::Text(value) => Ok(value),
        other => Err(mismatch(question, "text", &other)),
    }
}

fn confirm(prompter: &mut dyn Prompter, question: &Question) -> Result<bool, PromptError> {
    match prompter.ask(question)? {
        Answer::Bool(value) => Ok(value),
        other => Err(mismatch(question, "yes/no", &other)),
    }
}

fn list(prompter: &mut dyn Prompter, question: &Question) -> Result<ListInput, PromptError> {
    match prompter.ask(question)? {
        Answer::Text(value) => Ok(ListInput::Text(value)),
        Answer::List(items) => Ok(ListInput::Items(items)),
        other => Err(mismatch(question, "list", &other)),
    }
}

fn invalid(question: &Question, value: &str) -> PromptError {
    PromptError::InvalidAnswer {
        question: question.name.to_string(),
        reason: format!("unknown choice {:?}", value),
    }
}

fn mismatch(question: &Question, expected: &str, got: &Answer) -> PromptError {
    PromptError::InvalidAnswer {
        question: question.name.to_string(),
        reason: format!("expected {}, got {:?}", expected, got),
    }
}

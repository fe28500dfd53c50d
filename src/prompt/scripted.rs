//! Answers read from a mapping instead of a terminal.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::{Answer, PromptError, Prompter, Question, QuestionKind};
use crate::config::parse_toml;

/// Older spellings still accepted in answer files.
const ALIASES: &[(&str, &str)] = &[
    ("env", "envs"),
    ("testFramework", "testingFramework"),
    ("testDir", "testingDir"),
];

/// Answers questions from a fixed mapping keyed by question name.
///
/// Questions missing from the mapping take their default, so an empty
/// mapping accepts every default.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: Map<String, Value>,
}

impl ScriptedPrompter {
    pub fn new(answers: Map<String, Value>) -> Self {
        Self { answers }
    }

    /// Accept every default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load answers from a JSON file, or TOML when the extension is `.toml`.
    pub fn from_file(path: &Path) -> Result<Self, PromptError> {
        let contents = fs::read_to_string(path).map_err(|source| PromptError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let value = if path.extension().is_some_and(|ext| ext == "toml") {
            parse_toml(&contents).map_err(|e| PromptError::Parse(e.to_string()))?
        } else {
            serde_json::from_str(&contents).map_err(|e| PromptError::Parse(e.to_string()))?
        };

        match value {
            Value::Object(answers) => {
                tracing::debug!(path = %path.display(), count = answers.len(), "loaded answers");
                Ok(Self::new(answers))
            }
            _ => Err(PromptError::Parse(
                "answers must be a table of question names".to_string(),
            )),
        }
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        self.answers.get(name).or_else(|| {
            ALIASES
                .iter()
                .find(|(current, _)| *current == name)
                .and_then(|(_, old)| self.answers.get(*old))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        let Some(value) = self.lookup(question.name) else {
            return Ok(question.default_answer());
        };

        let answer = match (&question.kind, value) {
            (QuestionKind::Confirm { .. }, Value::Bool(b)) => Some(Answer::Bool(*b)),
            (QuestionKind::Text { .. } | QuestionKind::Select { .. }, Value::String(s)) => {
                Some(Answer::Text(s.clone()))
            }
            (QuestionKind::MultiSelect { .. }, Value::String(s)) => Some(Answer::Text(s.clone())),
            (QuestionKind::Text { .. } | QuestionKind::MultiSelect { .. }, Value::Array(items)) => {
                string_items(items).map(Answer::List)
            }
            _ => None,
        };

        answer.ok_or_else(|| PromptError::InvalidAnswer {
            question: question.name.to_string(),
            reason: format!("unexpected value {}", value),
        })
    }
}

fn string_items(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

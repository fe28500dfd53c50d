//! Interactive prompting on the terminal.

use inquire::{Confirm, InquireError, MultiSelect, Select, Text};

use super::{Answer, PromptError, Prompter, Question, QuestionKind};

/// Asks each question on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        let answer = match &question.kind {
            QuestionKind::Text { default } => {
                let mut prompt = Text::new(question.message);
                if !default.is_empty() {
                    prompt = prompt.with_default(default);
                }
                Answer::Text(prompt.prompt().map_err(from_inquire)?)
            }
            QuestionKind::Confirm { default } => Answer::Bool(
                Confirm::new(question.message)
                    .with_default(*default)
                    .prompt()
                    .map_err(from_inquire)?,
            ),
            QuestionKind::MultiSelect { choices, defaults } => {
                let selected: Vec<usize> = choices
                    .iter()
                    .enumerate()
                    .filter(|(_, choice)| defaults.contains(choice))
                    .map(|(index, _)| index)
                    .collect();
                Answer::List(
                    MultiSelect::new(question.message, choices.clone())
                        .with_default(&selected)
                        .prompt()
                        .map_err(from_inquire)?,
                )
            }
            QuestionKind::Select { choices, default } => Answer::Text(
                Select::new(question.message, choices.clone())
                    .with_starting_cursor(*default)
                    .prompt()
                    .map_err(from_inquire)?,
            ),
        };

        Ok(answer)
    }
}

fn from_inquire(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Aborted
        }
        other => PromptError::Terminal(other.to_string()),
    }
}

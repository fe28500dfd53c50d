//! List-valued inputs.
//!
//! Options arrive as comma-separated text (`--plugins "one, plugin-two"`),
//! answers may arrive either as text or as an already split list.

use serde::{Deserialize, Serialize};

/// A list field as supplied by an option or an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListInput {
    /// Already split into entries.
    Items(Vec<String>),
    /// Comma-separated text.
    Text(String),
}

impl ListInput {
    /// Normalize into entries, splitting text on commas.
    pub fn into_items(self) -> Vec<String> {
        match self {
            ListInput::Items(items) => items,
            ListInput::Text(text) => comma_separated(&text),
        }
    }
}

impl From<&str> for ListInput {
    fn from(text: &str) -> Self {
        ListInput::Text(text.to_string())
    }
}

impl From<Vec<String>> for ListInput {
    fn from(items: Vec<String>) -> Self {
        ListInput::Items(items)
    }
}

/// Split on `,` with optional surrounding whitespace.
///
/// Whitespace-only text yields no entries. Empty entries between two commas
/// are kept; callers drop them before resolving names.
pub fn comma_separated(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|entry| entry.trim().to_string()).collect()
}

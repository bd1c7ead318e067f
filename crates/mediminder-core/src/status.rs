//! Status enums for messages and doses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category attached to an assistant reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Practical advice.
    Suggestion,
    /// Something that may need medical attention.
    Warning,
    /// General information.
    Info,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Suggestion => "suggestion",
            Category::Warning => "warning",
            Category::Info => "info",
        }
    }

    /// Short marker the renderer shows next to an assistant message.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Warning => "⚠️",
            Category::Suggestion => "💡",
            Category::Info => "🧠",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// State of a single scheduled dose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoseStatus {
    /// Not taken yet.
    #[default]
    Pending,
    /// Taken. Terminal for the day.
    Taken,
}

impl DoseStatus {
    /// Returns true if the dose is in its terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Taken)
    }
}

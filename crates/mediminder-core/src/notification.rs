//! Events handed to the notification collaborator (toasts, alerts).

use serde::Serialize;

use crate::MessageId;

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// An assistant reply was appended to the log.
    ReplyReady { message_id: MessageId },
    /// A dose flipped to taken.
    DoseTaken { name: String },
}

impl Notification {
    pub fn reply_ready(message_id: MessageId) -> Self {
        Self::ReplyReady { message_id }
    }

    pub fn dose_taken(name: impl Into<String>) -> Self {
        Self::DoseTaken { name: name.into() }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ReplyReady { .. } => "AI Response Ready! 🤖",
            Self::DoseTaken { .. } => "Medication Taken! 💊",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::ReplyReady { .. } => {
                "I've provided some helpful information for you.".to_string()
            }
            Self::DoseTaken { name } => format!("Great job taking your {}!", name),
        }
    }
}

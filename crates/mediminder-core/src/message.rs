//! Chat message types for the assistant conversation log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, MessageId, Sender};

/// Opening line every session starts with.
pub const GREETING: &str = "Hello! I'm your AI Health Assistant. I can help you with medication reminders, health tips, and answer questions about your conditions. How can I assist you today?";

/// One turn in the conversation. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Sequence number within the session.
    pub id: MessageId,
    /// Literal content.
    pub text: String,
    /// Who wrote it.
    pub sender: Sender,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Reply category, assistant messages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Message {
    /// Create a user message.
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            category: None,
        }
    }

    /// Create an assistant message.
    pub fn assistant(id: MessageId, text: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            category: Some(category),
        }
    }

    /// The assistant's opening message.
    pub fn greeting(id: MessageId) -> Self {
        Self::assistant(id, GREETING, Category::Info)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Marker the renderer puts in front of the text.
    pub fn icon(&self) -> &'static str {
        match (self.sender, self.category) {
            (Sender::User, _) => "👤",
            (Sender::Assistant, Some(category)) => category.icon(),
            (Sender::Assistant, None) => "🤖",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_has_no_category() {
        let msg = Message::user(MessageId::new(2), "hello");
        assert_eq!(msg.sender, Sender::User);
        assert!(msg.category.is_none());
        assert!(msg.is_user());
        assert_eq!(msg.icon(), "👤");
    }

    #[test]
    fn test_greeting_is_info() {
        let msg = Message::greeting(MessageId::new(1));
        assert_eq!(msg.sender, Sender::Assistant);
        assert_eq!(msg.category, Some(Category::Info));
        assert!(msg.text.starts_with("Hello!"));
    }

    #[test]
    fn test_user_message_omits_category_in_json() {
        let msg = Message::user(MessageId::new(3), "hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("category").is_none());
        assert_eq!(json["sender"], "user");
        assert_eq!(json["id"], 3);
    }
}

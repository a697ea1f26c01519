use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Display name stored on every support-side message.
pub const SUPPORT_NAME: &str = "MeetCodeAI Support";

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Sender {
    User,
    Support,
}

/// Conversation tag chosen by the caller, independent of the classifier topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MessageCategory {
    #[default]
    General,
    Technical,
    Billing,
    Project,
}

/// The authenticated identity a message is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    /// Opaque user or session identifier.
    pub id: String,
    /// Name shown next to the user's own messages.
    pub name: String,
}

impl ChatUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A message as submitted by the user, before it reaches the responder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IncomingMessage {
    /// The message text. Validated after trimming.
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    /// Optional conversation tag, `general` when absent.
    #[serde(default)]
    pub category: Option<MessageCategory>,
}

impl IncomingMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: MessageCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// A stored chat message.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    /// The unique identifier for the message.
    pub id: i64,
    /// The user the conversation belongs to.
    pub user_id: String,
    /// Display name of the author.
    pub user_name: String,
    /// The text content of the message.
    pub message: String,
    pub sender: Sender,
    pub category: MessageCategory,
    /// Responder category label for the exchange (e.g. `pricing`).
    pub topic: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
    /// Unix timestamp in milliseconds.
    pub created_at: i64,
}

/// Fields needed to insert a new message.
#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub user_id: String,
    pub user_name: String,
    pub message: String,
    pub sender: Sender,
    pub category: MessageCategory,
    pub topic: Option<String>,
}

/// The user's message and the support reply, as persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub user_message: ChatMessage,
    pub reply_message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_message_validation() {
        assert!(IncomingMessage::new("hello").validate().is_ok());
        assert!(IncomingMessage::new("").validate().is_err());
        assert!(IncomingMessage::new("x".repeat(2001)).validate().is_err());
    }

    #[test]
    fn test_incoming_message_category_defaults_to_none() {
        let msg: IncomingMessage = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(msg.category, None);
        assert_eq!(msg.category.unwrap_or_default(), MessageCategory::General);

        let msg: IncomingMessage =
            serde_json::from_str(r#"{"message":"hi","category":"billing"}"#).unwrap();
        assert_eq!(msg.category, Some(MessageCategory::Billing));
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Support).unwrap(), "\"support\"");
    }
}

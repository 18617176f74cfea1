//! Messaging models: conversation threads and their messages.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use marketplace_core::{MessageId, ThreadId};

/// A conversation with one external participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    /// Unique thread ID.
    pub id: ThreadId,
    /// Name of the customer on the other side.
    pub participant: String,
    /// Summary of the latest message.
    pub last_message: String,
    /// When the latest message was sent.
    pub timestamp: NaiveDateTime,
    /// Number of unseen messages.
    pub unread: u32,
}

/// A single message within a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID, unique within its thread.
    pub id: MessageId,
    /// Sender name; [`Message::OPERATOR`] marks the dashboard operator.
    pub sender: String,
    /// Message body.
    pub content: String,
    /// When the message was sent.
    pub timestamp: NaiveDateTime,
    /// Whether the operator has seen it.
    pub is_read: bool,
}

impl Message {
    /// Sender name used for messages written from the dashboard.
    pub const OPERATOR: &'static str = "You";

    /// Whether this message was written by the dashboard operator.
    #[must_use]
    pub fn is_from_operator(&self) -> bool {
        self.sender == Self::OPERATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_from_operator() {
        let mut message = Message {
            id: MessageId::new("msg-x"),
            sender: "You".to_string(),
            content: "hi".to_string(),
            timestamp: NaiveDateTime::default(),
            is_read: true,
        };
        assert!(message.is_from_operator());

        message.sender = "John Doe".to_string();
        assert!(!message.is_from_operator());
    }

    #[test]
    fn test_message_serialization() {
        let message = Message {
            id: MessageId::new("msg-1"),
            sender: "Jane Smith".to_string(),
            content: "Hello".to_string(),
            timestamp: NaiveDateTime::default(),
            is_read: false,
        };

        let json = serde_json::to_string(&message).expect("serialize");
        assert!(json.contains("\"id\":\"msg-1\""));
        assert!(json.contains("\"is_read\":false"));
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    System,
}

/// One entry of the persisted transcript. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text: text.into(),
            timestamp,
        }
    }

    pub fn system(text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::System,
            text: text.into(),
            timestamp,
        }
    }

    /// Seeded into a missing or unreadable chat log instead of an empty one.
    pub fn welcome(timestamp: i64) -> Self {
        Self::system(
            "SYSTEM INITIALIZED.\nWelcome, Player. Daily tasks are ready.",
            timestamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_sender() {
        let user = ChatMessage::user("status report", 42);
        let system = ChatMessage::system("acknowledged", 43);
        assert_eq!(user.sender, Sender::User);
        assert_eq!(system.sender, Sender::System);
        assert_ne!(user.id, system.id);
        assert_eq!(ChatMessage::welcome(0).sender, Sender::System);
    }
}

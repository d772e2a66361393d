use crate::model::player::StatCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    LevelUp,
    QuestComplete,
    Info,
}

/// Transient overlay payload. Lives only in the channel and the UI; the
/// next notification replaces an undismissed one.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub subtext: Option<String>,
}

impl Notification {
    pub fn level_up(level: u32) -> Self {
        Self {
            kind: NotificationKind::LevelUp,
            message: "DAILY QUESTS COMPLETE".to_string(),
            subtext: Some(format!("LEVEL UP! You are now Level {level}.")),
        }
    }

    pub fn quest_complete(category: StatCategory) -> Self {
        Self {
            kind: NotificationKind::QuestComplete,
            message: "TASK COMPLETE".to_string(),
            subtext: Some(format!("+1 {}", category.label())),
        }
    }

    pub fn info(message: impl Into<String>, subtext: Option<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
            subtext,
        }
    }
}

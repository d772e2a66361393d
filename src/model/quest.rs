use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::player::StatCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestDifficulty {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl QuestDifficulty {
    pub const ALL: [QuestDifficulty; 6] = [
        QuestDifficulty::E,
        QuestDifficulty::D,
        QuestDifficulty::C,
        QuestDifficulty::B,
        QuestDifficulty::A,
        QuestDifficulty::S,
    ];

    pub fn letter(self) -> &'static str {
        match self {
            QuestDifficulty::E => "E",
            QuestDifficulty::D => "D",
            QuestDifficulty::C => "C",
            QuestDifficulty::B => "B",
            QuestDifficulty::A => "A",
            QuestDifficulty::S => "S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    Daily,
    Main,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: Uuid,
    pub text: String,
    pub is_completed: bool,
}

impl Subtask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: QuestDifficulty,
    pub reward_xp: u32,
    pub reward_gold: u32,
    pub is_completed: bool,
    pub kind: QuestKind,
    pub stat_category: StatCategory,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Quest {
    /// Blank entry inserted when the player adds a custom task by hand.
    pub fn custom_template() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "New Custom Task".to_string(),
            description: "Define your own path.".to_string(),
            difficulty: QuestDifficulty::E,
            reward_xp: 10,
            reward_gold: 0,
            is_completed: false,
            kind: QuestKind::Daily,
            stat_category: StatCategory::Routine,
            subtasks: Vec::new(),
        }
    }

    /// A quest with subtasks can only be ticked off once every subtask is done.
    pub fn completable(&self) -> bool {
        self.subtasks.is_empty() || self.subtasks.iter().all(|s| s.is_completed)
    }
}

/// An empty list never counts as "all done"; the wish gate depends on this.
pub fn all_completed(quests: &[Quest]) -> bool {
    !quests.is_empty() && quests.iter().all(|q| q.is_completed)
}

/// The fixed routine handed out whenever quest generation fails. Fresh ids
/// on every call so repeated fallbacks never collide.
pub fn fallback_daily_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: Uuid::new_v4(),
            title: "Physical Conditioning".to_string(),
            description: "Daily mandatory physical maintenance.".to_string(),
            difficulty: QuestDifficulty::D,
            reward_xp: 100,
            reward_gold: 20,
            is_completed: false,
            kind: QuestKind::Daily,
            stat_category: StatCategory::Physical,
            subtasks: vec![
                Subtask::new("25 Push-ups"),
                Subtask::new("50 Sit-ups"),
                Subtask::new("100 Jumping Jacks"),
            ],
        },
        Quest {
            id: Uuid::new_v4(),
            title: "Wellness & Health".to_string(),
            description: "Hydration and maintenance protocol.".to_string(),
            difficulty: QuestDifficulty::E,
            reward_xp: 50,
            reward_gold: 10,
            is_completed: false,
            kind: QuestKind::Daily,
            stat_category: StatCategory::Wellness,
            subtasks: vec![
                Subtask::new("Drink 1L Water (Lunch)"),
                Subtask::new("Drink 1L Water (Dinner)"),
                Subtask::new("Consume Maintenance Medicines"),
            ],
        },
        Quest {
            id: Uuid::new_v4(),
            title: "Knowledge Acquisition".to_string(),
            description: "Expand the System's knowledge base.".to_string(),
            difficulty: QuestDifficulty::C,
            reward_xp: 75,
            reward_gold: 15,
            is_completed: false,
            kind: QuestKind::Daily,
            stat_category: StatCategory::Knowledge,
            subtasks: vec![
                Subtask::new("Research, Learn & Update System"),
                Subtask::new("Research, Learn & Update Survival Skills"),
            ],
        },
    ]
}

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::model::player::StatCategory;
use crate::model::quest::{Quest, QuestDifficulty, QuestKind, Subtask};
use crate::model::wish::WishReward;

/// Wire shape of one generated quest. The LLM only proposes content; ids
/// and completion state are assigned locally.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestDraft {
    title: String,
    description: String,
    difficulty: QuestDifficulty,
    reward_xp: u32,
    reward_gold: u32,
    stat_category: StatCategory,
    #[serde(default)]
    subtasks: Vec<SubtaskDraft>,
}

#[derive(Debug, Deserialize)]
struct SubtaskDraft {
    text: String,
}

impl QuestDraft {
    fn into_quest(self) -> Quest {
        Quest {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            difficulty: self.difficulty,
            reward_xp: self.reward_xp,
            reward_gold: self.reward_gold,
            is_completed: false,
            kind: QuestKind::Daily,
            stat_category: self.stat_category,
            subtasks: self.subtasks.into_iter().map(|s| Subtask::new(s.text)).collect(),
        }
    }
}

/// Decode raw LLM JSON into ready-to-use quests, skipping entries that do
/// not match the schema. Err only when the payload is not a JSON array.
pub fn decode_quest_list(json: &str) -> Result<Vec<Quest>, String> {
    let value: Value = serde_json::from_str(strip_code_fences(json))
        .map_err(|e| format!("invalid quest payload: {e}"))?;

    let Value::Array(items) = value else {
        return Err("quest payload must be a JSON array".to_string());
    };

    let mut quests = Vec::new();
    for item in items {
        match serde_json::from_value::<QuestDraft>(item) {
            Ok(draft) => quests.push(draft.into_quest()),
            Err(e) => log::warn!("skipping malformed quest entry: {e}"),
        }
    }

    Ok(quests)
}

pub fn decode_wish_reward(json: &str) -> Result<WishReward, String> {
    serde_json::from_str(strip_code_fences(json)).map_err(|e| format!("invalid wish payload: {e}"))
}

/// Local models often wrap JSON replies in markdown fences.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

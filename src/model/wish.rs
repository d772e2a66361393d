use serde::{Deserialize, Serialize};

use crate::model::player::StatCategory;

/// What a granted wish does to the profile. `Item` is accepted from the
/// evaluator but has no mechanical effect yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardKind {
    Xp,
    Gold,
    Stat,
    Item,
    Heal,
    Penalty,
}

/// One structured reward instruction from the wish evaluator. Transient:
/// applied to the profile and discarded, never persisted. The serde shape
/// is the evaluator's wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishReward {
    pub message: String,
    pub reward_type: RewardKind,
    pub reward_value: u32,
    #[serde(default)]
    pub stat_target: Option<StatCategory>,
}

impl WishReward {
    /// Consolation prize used whenever evaluation fails.
    pub fn fallback() -> Self {
        Self {
            message: "SYSTEM ERROR: Wish computation failed. Consolation prize awarded."
                .to_string(),
            reward_type: RewardKind::Gold,
            reward_value: 10,
            stat_target: None,
        }
    }
}

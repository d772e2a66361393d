use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The four fixed life domains a daily quest can train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Physical,
    Knowledge,
    Wellness,
    Routine,
}

impl StatCategory {
    pub const ALL: [StatCategory; 4] = [
        StatCategory::Physical,
        StatCategory::Knowledge,
        StatCategory::Wellness,
        StatCategory::Routine,
    ];

    /// Display name shown in the UI and in the chat context string.
    pub fn label(self) -> &'static str {
        match self {
            StatCategory::Physical => "Physical Conditioning",
            StatCategory::Knowledge => "Knowledge Acquisition",
            StatCategory::Wellness => "Wellness & Health",
            StatCategory::Routine => "Daily Routine",
        }
    }
}

/// The single local player. One document, persisted on every change.
///
/// Counters in `stats` track how many quests of each category were ever
/// completed, not reward magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub level: u32,
    pub current_xp: u32,
    pub required_xp: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub gold: u32,
    #[serde(default = "default_label")]
    pub title: String,
    #[serde(default = "default_label")]
    pub job: String,
    pub stats: BTreeMap<StatCategory, u32>,
    // The penalty fields arrived after the first release; saves written
    // before that are missing them and default on read.
    #[serde(default)]
    pub penalty_active: bool,
    #[serde(default)]
    pub penalty_expires: i64,
    #[serde(default = "today")]
    pub last_active_date: NaiveDate,
}

fn default_label() -> String {
    "None".to_string()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl PlayerProfile {
    /// First-run profile. Also what a failed day resets the player to.
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            level: 1,
            current_xp: 0,
            required_xp: 100,
            hp: 100,
            max_hp: 100,
            mp: 50,
            max_mp: 50,
            gold: 0,
            title: default_label(),
            job: default_label(),
            stats: StatCategory::ALL.iter().map(|&c| (c, 0)).collect(),
            penalty_active: false,
            penalty_expires: 0,
            last_active_date: today,
        }
    }

    pub fn counter(&self, category: StatCategory) -> u32 {
        self.stats.get(&category).copied().unwrap_or(0)
    }

    pub fn add_counter(&mut self, category: StatCategory, amount: u32) {
        let entry = self.stats.entry(category).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// True while the lockout screen should replace the whole app.
    pub fn penalty_locked(&self, now_ms: i64) -> bool {
        self.penalty_active && now_ms < self.penalty_expires
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::initial(today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_profile_starts_at_level_one_with_full_bars() {
        let player = PlayerProfile::initial(today());
        assert_eq!(player.level, 1);
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(player.mp, player.max_mp);
        assert_eq!(player.gold, 0);
        assert!(!player.penalty_active);
        assert!(StatCategory::ALL.iter().all(|&c| player.counter(c) == 0));
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut player = PlayerProfile::initial(today());
        player.add_counter(StatCategory::Routine, u32::MAX);
        player.add_counter(StatCategory::Routine, 5);
        assert_eq!(player.counter(StatCategory::Routine), u32::MAX);
    }

    #[test]
    fn lockout_tracks_the_expiry_timestamp() {
        let mut player = PlayerProfile::initial(today());
        player.penalty_active = true;
        player.penalty_expires = 1_000;
        assert!(player.penalty_locked(999));
        assert!(!player.penalty_locked(1_000));
        player.penalty_active = false;
        assert!(!player.penalty_locked(999));
    }
}

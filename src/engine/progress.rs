//! Quest completion rules and the level-up they can trigger.
//!
//! Every operation is pure: it takes the current documents and returns the
//! next ones plus the effects to surface, or `None` when nothing changes
//! (stale ids, double completions, gated quests).

use uuid::Uuid;

use crate::model::message::ChatMessage;
use crate::model::notification::Notification;
use crate::model::player::PlayerProfile;
use crate::model::quest::{self, Quest};

pub const LEVEL_UP_MAX_HP_BONUS: u32 = 10;
pub const LEVEL_UP_MAX_MP_BONUS: u32 = 5;

#[derive(Debug)]
pub struct ProgressOutcome {
    pub player: PlayerProfile,
    pub quests: Vec<Quest>,
    pub notification: Option<Notification>,
    pub chat_entry: Option<ChatMessage>,
}

pub fn complete_quest(
    player: &PlayerProfile,
    quests: &[Quest],
    quest_id: Uuid,
    now_ms: i64,
) -> Option<ProgressOutcome> {
    let target = quests.iter().find(|q| q.id == quest_id)?;
    if target.is_completed || !target.completable() {
        return None;
    }

    let reward_xp = target.reward_xp;
    let reward_gold = target.reward_gold;
    let category = target.stat_category;

    let next_quests: Vec<Quest> = quests
        .iter()
        .cloned()
        .map(|mut q| {
            if q.id == quest_id {
                q.is_completed = true;
            }
            q
        })
        .collect();

    let mut next_player = player.clone();
    next_player.current_xp = next_player.current_xp.saturating_add(reward_xp);
    next_player.gold = next_player.gold.saturating_add(reward_gold);
    // Counters count completions, never reward size.
    next_player.add_counter(category, 1);

    if quest::all_completed(&next_quests) {
        next_player.level += 1;
        next_player.max_hp += LEVEL_UP_MAX_HP_BONUS;
        next_player.max_mp += LEVEL_UP_MAX_MP_BONUS;
        next_player.hp = next_player.max_hp;
        next_player.mp = next_player.max_mp;

        let level = next_player.level;
        Some(ProgressOutcome {
            player: next_player,
            quests: next_quests,
            notification: Some(Notification::level_up(level)),
            chat_entry: Some(ChatMessage::system(
                format!("[SYSTEM] ALL DAILY TASKS COMPLETE. LEVEL INCREASED TO {level}."),
                now_ms,
            )),
        })
    } else {
        Some(ProgressOutcome {
            player: next_player,
            quests: next_quests,
            notification: Some(Notification::quest_complete(category)),
            chat_entry: None,
        })
    }
}

pub fn toggle_subtask(
    player: &PlayerProfile,
    quests: &[Quest],
    quest_id: Uuid,
    subtask_id: Uuid,
    now_ms: i64,
) -> Option<ProgressOutcome> {
    let parent = quests.iter().find(|q| q.id == quest_id)?;
    if parent.is_completed {
        return None;
    }
    parent.subtasks.iter().find(|s| s.id == subtask_id)?;

    let next_quests: Vec<Quest> = quests
        .iter()
        .cloned()
        .map(|mut q| {
            if q.id == quest_id {
                for subtask in &mut q.subtasks {
                    if subtask.id == subtask_id {
                        subtask.is_completed = !subtask.is_completed;
                    }
                }
            }
            q
        })
        .collect();

    let all_subtasks_done = next_quests
        .iter()
        .find(|q| q.id == quest_id)
        .map(|q| !q.subtasks.is_empty() && q.subtasks.iter().all(|s| s.is_completed))
        .unwrap_or(false);

    if all_subtasks_done {
        // Ticking the last subtask completes the parent in the same step.
        return complete_quest(player, &next_quests, quest_id, now_ms);
    }

    Some(ProgressOutcome {
        player: player.clone(),
        quests: next_quests,
        notification: None,
        chat_entry: None,
    })
}

/// New custom quests go to the head of the list so they are visible at once.
pub fn add_quest(quests: &[Quest]) -> Vec<Quest> {
    let mut next = Vec::with_capacity(quests.len() + 1);
    next.push(Quest::custom_template());
    next.extend(quests.iter().cloned());
    next
}

pub fn delete_quest(quests: &[Quest], quest_id: Uuid) -> Option<Vec<Quest>> {
    if !quests.iter().any(|q| q.id == quest_id) {
        return None;
    }
    Some(quests.iter().filter(|q| q.id != quest_id).cloned().collect())
}

/// Wholesale replacement by id. Completion state travels with the
/// replacement, so editors should pass the quest they started from.
pub fn edit_quest(quests: &[Quest], updated: Quest) -> Option<Vec<Quest>> {
    if !quests.iter().any(|q| q.id == updated.id) {
        return None;
    }
    Some(
        quests
            .iter()
            .map(|q| if q.id == updated.id { updated.clone() } else { q.clone() })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::NotificationKind;
    use crate::model::player::StatCategory;
    use crate::model::quest::Subtask;
    use chrono::NaiveDate;

    const NOW_MS: i64 = 1_718_000_000_000;

    fn player() -> PlayerProfile {
        PlayerProfile::initial(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
    }

    fn daily(xp: u32, gold: u32, category: StatCategory) -> Quest {
        let mut q = Quest::custom_template();
        q.reward_xp = xp;
        q.reward_gold = gold;
        q.stat_category = category;
        q
    }

    #[test]
    fn completing_an_unknown_quest_is_ignored() {
        let quests = vec![daily(10, 0, StatCategory::Routine)];
        assert!(complete_quest(&player(), &quests, Uuid::new_v4(), NOW_MS).is_none());
        assert!(complete_quest(&player(), &[], Uuid::new_v4(), NOW_MS).is_none());
    }

    #[test]
    fn completing_twice_is_ignored() {
        let mut quests = vec![daily(10, 0, StatCategory::Routine)];
        quests[0].is_completed = true;
        assert!(complete_quest(&player(), &quests, quests[0].id, NOW_MS).is_none());
    }

    #[test]
    fn open_subtasks_block_completion() {
        let mut quest = daily(100, 20, StatCategory::Physical);
        quest.subtasks = vec![Subtask::new("a"), Subtask::new("b")];
        let id = quest.id;
        assert!(complete_quest(&player(), &[quest], id, NOW_MS).is_none());
    }

    #[test]
    fn non_final_completion_rewards_without_level_up() {
        let quests = vec![
            daily(100, 20, StatCategory::Physical),
            daily(50, 10, StatCategory::Wellness),
        ];
        let outcome = complete_quest(&player(), &quests, quests[0].id, NOW_MS).unwrap();

        assert_eq!(outcome.player.current_xp, 100);
        assert_eq!(outcome.player.gold, 20);
        assert_eq!(outcome.player.counter(StatCategory::Physical), 1);
        assert_eq!(outcome.player.level, 1);
        assert_eq!(outcome.player.max_hp, 100);
        assert!(outcome.quests[0].is_completed);
        assert!(!outcome.quests[1].is_completed);
        assert!(outcome.chat_entry.is_none());
        let note = outcome.notification.unwrap();
        assert_eq!(note.kind, NotificationKind::QuestComplete);
    }

    #[test]
    fn final_quest_levels_up_with_exact_arithmetic() {
        let mut player = player();
        player.level = 3;
        player.max_hp = 120;
        player.hp = 77;
        player.max_mp = 65;
        player.mp = 10;

        let mut quests = vec![
            daily(100, 20, StatCategory::Physical),
            daily(50, 10, StatCategory::Wellness),
            daily(75, 15, StatCategory::Knowledge),
        ];
        quests[0].is_completed = true;
        quests[1].is_completed = true;
        let last = quests[2].id;

        let outcome = complete_quest(&player, &quests, last, NOW_MS).unwrap();

        assert_eq!(outcome.player.level, 4);
        assert_eq!(outcome.player.max_hp, 130);
        assert_eq!(outcome.player.hp, 130);
        assert_eq!(outcome.player.max_mp, 70);
        assert_eq!(outcome.player.mp, 70);
        assert_eq!(outcome.player.current_xp, 75);
        let note = outcome.notification.unwrap();
        assert_eq!(note.kind, NotificationKind::LevelUp);
        let entry = outcome.chat_entry.unwrap();
        assert!(entry.text.contains("LEVEL INCREASED TO 4"));
    }

    #[test]
    fn counters_ignore_reward_magnitude() {
        let quests = vec![
            daily(500, 0, StatCategory::Knowledge),
            daily(10, 0, StatCategory::Routine),
        ];
        let outcome = complete_quest(&player(), &quests, quests[0].id, NOW_MS).unwrap();
        assert_eq!(outcome.player.counter(StatCategory::Knowledge), 1);
        assert_eq!(outcome.player.current_xp, 500);
    }

    #[test]
    fn toggling_the_last_subtask_completes_the_parent() {
        let mut first = daily(100, 20, StatCategory::Physical);
        first.subtasks = vec![Subtask::new("a"), Subtask::new("b")];
        first.subtasks[0].is_completed = true;
        let (quest_id, subtask_id) = (first.id, first.subtasks[1].id);
        let quests = vec![first, daily(50, 10, StatCategory::Wellness)];

        let outcome = toggle_subtask(&player(), &quests, quest_id, subtask_id, NOW_MS).unwrap();

        assert!(outcome.quests[0].is_completed);
        assert!(outcome.quests[0].subtasks.iter().all(|s| s.is_completed));
        assert_eq!(outcome.player.current_xp, 100);
        assert_eq!(
            outcome.notification.unwrap().kind,
            NotificationKind::QuestComplete
        );
    }

    #[test]
    fn toggling_one_of_many_subtasks_changes_nothing_else() {
        let mut quest = daily(100, 20, StatCategory::Physical);
        quest.subtasks = vec![Subtask::new("a"), Subtask::new("b")];
        let (quest_id, subtask_id) = (quest.id, quest.subtasks[0].id);

        let outcome = toggle_subtask(&player(), &[quest], quest_id, subtask_id, NOW_MS).unwrap();

        assert!(!outcome.quests[0].is_completed);
        assert!(outcome.quests[0].subtasks[0].is_completed);
        assert_eq!(outcome.player, player());
        assert!(outcome.notification.is_none());

        // Untoggling is symmetric.
        let back = toggle_subtask(
            &player(),
            &outcome.quests,
            quest_id,
            subtask_id,
            NOW_MS,
        )
        .unwrap();
        assert!(!back.quests[0].subtasks[0].is_completed);
    }

    #[test]
    fn stale_subtask_toggles_are_ignored() {
        let mut quest = daily(100, 20, StatCategory::Physical);
        quest.subtasks = vec![Subtask::new("a")];
        let quest_id = quest.id;
        assert!(toggle_subtask(&player(), &[quest.clone()], quest_id, Uuid::new_v4(), NOW_MS).is_none());
        quest.is_completed = true;
        let subtask_id = quest.subtasks[0].id;
        assert!(toggle_subtask(&player(), &[quest], quest_id, subtask_id, NOW_MS).is_none());
    }

    #[test]
    fn add_puts_the_template_at_the_head() {
        let quests = vec![daily(100, 20, StatCategory::Physical)];
        let next = add_quest(&quests);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].title, "New Custom Task");
        assert_eq!(next[1].id, quests[0].id);
    }

    #[test]
    fn delete_and_edit_ignore_stale_ids() {
        let quests = vec![daily(100, 20, StatCategory::Physical)];
        assert!(delete_quest(&quests, Uuid::new_v4()).is_none());
        assert!(edit_quest(&quests, daily(1, 1, StatCategory::Routine)).is_none());

        let next = delete_quest(&quests, quests[0].id).unwrap();
        assert!(next.is_empty());

        let mut updated = quests[0].clone();
        updated.title = "Evening Drill".to_string();
        let next = edit_quest(&quests, updated).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].title, "Evening Drill");
        assert!(!next[0].is_completed);
    }
}

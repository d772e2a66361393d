//! Applies one granted wish to the profile.

use crate::model::player::PlayerProfile;
use crate::model::wish::{RewardKind, WishReward};

pub const WISH_PENALTY_GOLD: u32 = 10;

/// Exactly one field group changes per call. `Stat` without a target and
/// `Item` leave the profile untouched.
pub fn apply_wish_reward(player: &PlayerProfile, reward: &WishReward) -> PlayerProfile {
    let mut next = player.clone();
    match reward.reward_type {
        RewardKind::Xp => next.current_xp = next.current_xp.saturating_add(reward.reward_value),
        RewardKind::Gold => next.gold = next.gold.saturating_add(reward.reward_value),
        RewardKind::Stat => {
            if let Some(target) = reward.stat_target {
                next.add_counter(target, reward.reward_value);
            }
        }
        RewardKind::Heal => {
            next.hp = next.max_hp;
            next.mp = next.max_mp;
        }
        RewardKind::Penalty => next.gold = next.gold.saturating_sub(WISH_PENALTY_GOLD),
        RewardKind::Item => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::StatCategory;
    use chrono::NaiveDate;

    fn player() -> PlayerProfile {
        let mut p = PlayerProfile::initial(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        p.max_hp = 130;
        p.hp = 40;
        p.max_mp = 70;
        p.mp = 5;
        p.gold = 25;
        p
    }

    fn reward(kind: RewardKind, value: u32, target: Option<StatCategory>) -> WishReward {
        WishReward {
            message: "Granted.".to_string(),
            reward_type: kind,
            reward_value: value,
            stat_target: target,
        }
    }

    #[test]
    fn xp_and_gold_add_their_value() {
        let next = apply_wish_reward(&player(), &reward(RewardKind::Xp, 40, None));
        assert_eq!(next.current_xp, 40);
        assert_eq!(next.gold, 25);

        let next = apply_wish_reward(&player(), &reward(RewardKind::Gold, 15, None));
        assert_eq!(next.gold, 40);
        assert_eq!(next.current_xp, 0);
    }

    #[test]
    fn stat_adds_to_the_named_counter_only() {
        let next = apply_wish_reward(
            &player(),
            &reward(RewardKind::Stat, 3, Some(StatCategory::Wellness)),
        );
        assert_eq!(next.counter(StatCategory::Wellness), 3);
        assert_eq!(next.counter(StatCategory::Physical), 0);

        let untargeted = apply_wish_reward(&player(), &reward(RewardKind::Stat, 3, None));
        assert_eq!(untargeted, player());
    }

    #[test]
    fn heal_restores_both_bars_to_max() {
        let next = apply_wish_reward(&player(), &reward(RewardKind::Heal, 999, None));
        assert_eq!(next.hp, 130);
        assert_eq!(next.mp, 70);
        assert_eq!(next.gold, 25);
    }

    #[test]
    fn penalty_docks_gold_with_a_floor_of_zero() {
        let next = apply_wish_reward(&player(), &reward(RewardKind::Penalty, 0, None));
        assert_eq!(next.gold, 15);

        let mut poor = player();
        poor.gold = 4;
        let next = apply_wish_reward(&poor, &reward(RewardKind::Penalty, 0, None));
        assert_eq!(next.gold, 0);
    }

    #[test]
    fn item_is_accepted_but_inert() {
        let next = apply_wish_reward(&player(), &reward(RewardKind::Item, 7, None));
        assert_eq!(next, player());
    }
}

//! Daily rollover and penalty handling.
//!
//! Runs at engine startup and on every timer tick. Pure: reads the loaded
//! documents plus the injected clock and returns the transition to apply.
//! The engine persists the result and notifies the UI.

use chrono::{DateTime, Local};

use crate::model::message::ChatMessage;
use crate::model::player::PlayerProfile;
use crate::model::quest::Quest;

pub const FAILURE_NOTICE: &str = "CRITICAL FAILURE DETECTED.\nDaily tasks incomplete.\nSYSTEM RESET INITIATED.\nPENALTY ZONE ACTIVE.";
pub const ROLLOVER_NOTICE: &str = "Cycle complete. Daily tasks refreshed.";

/// What a day check decided. `Failure` replaces all three documents;
/// `Rollover` keeps progression and clears the quest list for regeneration.
#[derive(Debug)]
pub enum DayTransition {
    Unchanged,
    PenaltyCleared { player: PlayerProfile },
    Failure { player: PlayerProfile, chat: Vec<ChatMessage> },
    Rollover { player: PlayerProfile, notice: Option<ChatMessage> },
}

pub fn check_day(player: &PlayerProfile, quests: &[Quest], now: DateTime<Local>) -> DayTransition {
    let today = now.date_naive();
    let now_ms = now.timestamp_millis();

    if today == player.last_active_date {
        // Same calendar day: only an expired penalty can change anything.
        if player.penalty_active && now_ms > player.penalty_expires {
            let mut cleared = player.clone();
            cleared.penalty_active = false;
            cleared.penalty_expires = 0;
            return DayTransition::PenaltyCleared { player: cleared };
        }
        return DayTransition::Unchanged;
    }

    // A day boundary was crossed. Judge the list as it stood.
    let had_quests = !quests.is_empty();
    let all_done = had_quests && quests.iter().all(|q| q.is_completed);

    if had_quests && !all_done {
        let mut reset = PlayerProfile::initial(today);
        reset.penalty_active = true;
        reset.penalty_expires = end_of_day_millis(now);
        DayTransition::Failure {
            player: reset,
            chat: vec![ChatMessage::system(FAILURE_NOTICE, now_ms)],
        }
    } else {
        let mut rolled = player.clone();
        rolled.last_active_date = today;
        rolled.penalty_active = false;
        rolled.penalty_expires = 0;
        DayTransition::Rollover {
            player: rolled,
            notice: had_quests.then(|| ChatMessage::system(ROLLOVER_NOTICE, now_ms)),
        }
    }
}

/// 23:59:59.999 of `now`'s local calendar date, as epoch milliseconds.
pub fn end_of_day_millis(now: DateTime<Local>) -> i64 {
    now.date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|naive| naive.and_local_timezone(Local).latest())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| now.timestamp_millis())
}

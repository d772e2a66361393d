//! The engine owns the three documents and runs on its own thread. The UI
//! talks to it over channels; every mutation is persisted and answered
//! with a fresh snapshot.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use chrono::{DateTime, Local};
use log::info;
use uuid::Uuid;

use crate::engine::apply_reward::apply_wish_reward;
use crate::engine::lifecycle::{self, DayTransition};
use crate::engine::oracle::Oracle;
use crate::engine::progress::{self, ProgressOutcome};
use crate::engine::prompt_builder;
use crate::engine::protocol::{EngineCommand, EngineResponse, Snapshot};
use crate::engine::storage::Store;
use crate::model::message::ChatMessage;
use crate::model::notification::Notification;
use crate::model::player::PlayerProfile;
use crate::model::quest::{self, Quest};
use crate::model::wish::WishReward;

/// Longest the engine sits idle before re-checking the day and penalty
/// state; commands run the same check inline before they apply.
const DAY_CHECK_INTERVAL: Duration = Duration::from_secs(60);

pub const REFRESH_NOTICE: &str = "NOTICE: Daily tasks have been refreshed.";

pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    store: Store,
    oracle: Oracle,
    player: PlayerProfile,
    quests: Vec<Quest>,
    chat: Vec<ChatMessage>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        store: Store,
        oracle: Oracle,
    ) -> Self {
        let now = Local::now();
        let player = store.load_player();
        let quests = store.load_quests();
        let chat = store.load_chat(now);
        Self { rx, tx, store, oracle, player, quests, chat }
    }

    pub fn run(&mut self) {
        let now = Local::now();
        self.run_day_check(now);
        self.send_snapshot();
        self.generate_if_fresh(now);

        loop {
            match self.rx.recv_timeout(DAY_CHECK_INTERVAL) {
                Ok(cmd) => self.handle_command(cmd),
                Err(RecvTimeoutError::Timeout) => self.tick(Local::now()),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    /// Day check plus whatever regeneration it unlocks.
    fn tick(&mut self, now: DateTime<Local>) {
        if self.run_day_check(now) {
            self.send_snapshot();
            self.generate_if_fresh(now);
        }
    }

    fn handle_command(&mut self, cmd: EngineCommand) {
        let now = Local::now();
        // The idle timeout resets on every message; judge the stored day
        // first so no command mutates a list that is still waiting to be
        // scored.
        self.tick(now);
        match cmd {
            EngineCommand::CompleteQuest(id) => self.complete_quest(id, now),
            EngineCommand::ToggleSubtask { quest_id, subtask_id } => {
                self.toggle_subtask(quest_id, subtask_id, now)
            }
            EngineCommand::AddQuest => {
                self.quests = progress::add_quest(&self.quests);
                self.store.save_quests(&self.quests);
                self.send_snapshot();
            }
            EngineCommand::DeleteQuest(id) => {
                if let Some(quests) = progress::delete_quest(&self.quests, id) {
                    self.quests = quests;
                    self.store.save_quests(&self.quests);
                    self.send_snapshot();
                }
            }
            EngineCommand::EditQuest(updated) => {
                if let Some(quests) = progress::edit_quest(&self.quests, *updated) {
                    self.quests = quests;
                    self.store.save_quests(&self.quests);
                    self.send_snapshot();
                }
            }
            EngineCommand::RefreshQuests => self.refresh_quests(now),
            EngineCommand::MakeWish(text) => self.make_wish(&text, now),
            EngineCommand::SendChat(text) => self.send_chat(&text, now),
        }
    }

    /// Applies a day check and persists what changed. Returns whether
    /// anything did.
    fn run_day_check(&mut self, now: DateTime<Local>) -> bool {
        match lifecycle::check_day(&self.player, &self.quests, now) {
            DayTransition::Unchanged => false,
            DayTransition::PenaltyCleared { player } => {
                info!("penalty expired; lockout lifted");
                self.player = player;
                self.store.save_player(&self.player);
                true
            }
            DayTransition::Failure { player, chat } => {
                info!("daily check failed; profile reset, penalty zone active");
                self.player = player;
                self.quests.clear();
                self.chat = chat;
                self.persist_all();
                true
            }
            DayTransition::Rollover { player, notice } => {
                info!("day rolled over; quest list cleared");
                self.player = player;
                self.quests.clear();
                if let Some(msg) = notice {
                    self.chat.push(msg);
                }
                self.persist_all();
                true
            }
        }
    }

    /// Daily quests regenerate whenever the list is empty and no penalty is
    /// in force: at startup, after a rollover, after a penalty expires.
    fn generate_if_fresh(&mut self, now: DateTime<Local>) {
        if !self.quests.is_empty() || self.player.penalty_active {
            return;
        }
        self.generate_quests(now);
    }

    fn generate_quests(&mut self, now: DateTime<Local>) {
        let _ = self.tx.send(EngineResponse::QuestGenStarted);
        let quests = self.oracle.generate_daily_quests(&self.player);
        info!("daily quests ready ({} entries)", quests.len());
        self.quests = quests;
        self.chat
            .push(ChatMessage::system(REFRESH_NOTICE, now.timestamp_millis()));
        self.store.save_quests(&self.quests);
        self.store.save_chat(&self.chat);
        self.send_snapshot();
        let _ = self.tx.send(EngineResponse::QuestGenFinished);
    }

    fn complete_quest(&mut self, id: Uuid, now: DateTime<Local>) {
        let outcome = progress::complete_quest(&self.player, &self.quests, id, now.timestamp_millis());
        if let Some(outcome) = outcome {
            self.apply_progress(outcome);
        }
    }

    fn toggle_subtask(&mut self, quest_id: Uuid, subtask_id: Uuid, now: DateTime<Local>) {
        let outcome = progress::toggle_subtask(
            &self.player,
            &self.quests,
            quest_id,
            subtask_id,
            now.timestamp_millis(),
        );
        if let Some(outcome) = outcome {
            self.apply_progress(outcome);
        }
    }

    fn apply_progress(&mut self, outcome: ProgressOutcome) {
        self.player = outcome.player;
        self.quests = outcome.quests;
        if let Some(entry) = outcome.chat_entry {
            self.chat.push(entry);
            self.store.save_chat(&self.chat);
        }
        self.store.save_player(&self.player);
        self.store.save_quests(&self.quests);
        self.send_snapshot();
        if let Some(notification) = outcome.notification {
            let _ = self.tx.send(EngineResponse::Notify(notification));
        }
    }

    fn refresh_quests(&mut self, now: DateTime<Local>) {
        // No quest generation while the penalty is in force.
        if self.player.penalty_active {
            let _ = self.tx.send(EngineResponse::QuestGenFinished);
            return;
        }
        self.generate_quests(now);
    }

    fn make_wish(&mut self, text: &str, now: DateTime<Local>) {
        if !quest::all_completed(&self.quests) {
            let _ = self.tx.send(EngineResponse::WishResolved);
            return;
        }
        let reward = self.oracle.evaluate_wish(text, &self.player);
        self.grant_wish(text, reward, now);
        let _ = self.tx.send(EngineResponse::WishResolved);
    }

    /// One reward, two chat entries, one notification.
    fn grant_wish(&mut self, text: &str, reward: WishReward, now: DateTime<Local>) {
        let now_ms = now.timestamp_millis();
        self.player = apply_wish_reward(&self.player, &reward);
        self.chat.push(ChatMessage::user(format!("[WISH] {text}"), now_ms));
        self.chat
            .push(ChatMessage::system(format!("[GRANT] {}", reward.message), now_ms));
        self.store.save_player(&self.player);
        self.store.save_chat(&self.chat);
        self.send_snapshot();
        let _ = self
            .tx
            .send(EngineResponse::Notify(Notification::info(
                "WISH GRANTED",
                Some(reward.message),
            )));
    }

    fn send_chat(&mut self, text: &str, now: DateTime<Local>) {
        self.chat.push(ChatMessage::user(text, now.timestamp_millis()));
        self.store.save_chat(&self.chat);
        self.send_snapshot();

        // Blocking call; commands queue up behind it until the reply lands.
        let context = prompt_builder::chat_context(&self.player);
        let reply = self.oracle.chat_reply(text, &context);

        self.chat
            .push(ChatMessage::system(reply, Local::now().timestamp_millis()));
        self.store.save_chat(&self.chat);
        self.send_snapshot();
        let _ = self.tx.send(EngineResponse::ChatReplied);
    }

    fn send_snapshot(&self) {
        let _ = self.tx.send(EngineResponse::Snapshot(Snapshot {
            player: self.player.clone(),
            quests: self.quests.clone(),
            chat: self.chat.clone(),
        }));
    }

    fn persist_all(&self) {
        self.store.save_player(&self.player);
        self.store.save_quests(&self.quests);
        self.store.save_chat(&self.chat);
    }
}

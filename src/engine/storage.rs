//! The three persisted documents, one JSON file each in the platform data
//! dir. Loads fall back to defaults on any problem; saves log and move on.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::message::ChatMessage;
use crate::model::player::PlayerProfile;
use crate::model::quest::Quest;

const APP_DIR: &str = "system_awakening";
const PLAYER_FILE: &str = "player_profile.json";
const QUESTS_FILE: &str = "quest_list.json";
const CHAT_FILE: &str = "chat_log.json";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new() -> Self {
        let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push(APP_DIR);
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("could not create data dir {}: {e}", dir.display());
        }
        Self { dir }
    }

    /// Points the store at a scratch directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("could not create data dir {}: {e}", dir.display());
        }
        Self { dir }
    }

    pub fn load_player(&self) -> PlayerProfile {
        read_json(&self.dir.join(PLAYER_FILE)).unwrap_or_default()
    }

    pub fn load_quests(&self) -> Vec<Quest> {
        read_json(&self.dir.join(QUESTS_FILE)).unwrap_or_default()
    }

    /// A missing or unreadable chat log seeds the welcome message instead
    /// of starting empty.
    pub fn load_chat(&self, now: DateTime<Local>) -> Vec<ChatMessage> {
        read_json(&self.dir.join(CHAT_FILE))
            .unwrap_or_else(|| vec![ChatMessage::welcome(now.timestamp_millis())])
    }

    pub fn save_player(&self, player: &PlayerProfile) {
        write_json(&self.dir.join(PLAYER_FILE), player);
    }

    pub fn save_quests(&self, quests: &[Quest]) {
        write_json(&self.dir.join(QUESTS_FILE), quests);
    }

    pub fn save_chat(&self, chat: &[ChatMessage]) {
        write_json(&self.dir.join(CHAT_FILE), chat);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("unreadable document {}: {e}", path.display());
            None
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if let Err(e) = fs::write(path, json) {
                warn!("failed to write {}: {e}", path.display());
            }
        }
        Err(e) => warn!("failed to serialize {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn documents_round_trip() {
        let dir = tempdir().unwrap();
        let store = Store::with_dir(dir.path());

        let mut player = PlayerProfile::initial(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        player.level = 4;
        player.gold = 77;
        store.save_player(&player);

        let quests = crate::model::quest::fallback_daily_quests();
        store.save_quests(&quests);

        let now = Local::now();
        let chat = vec![ChatMessage::system("ack", now.timestamp_millis())];
        store.save_chat(&chat);

        assert_eq!(store.load_player(), player);
        assert_eq!(store.load_quests(), quests);
        assert_eq!(store.load_chat(now), chat);
    }

    #[test]
    fn missing_files_produce_defaults_and_a_welcome() {
        let dir = tempdir().unwrap();
        let store = Store::with_dir(dir.path());

        assert_eq!(store.load_player().level, 1);
        assert!(store.load_quests().is_empty());

        let chat = store.load_chat(Local::now());
        assert_eq!(chat.len(), 1);
        assert!(chat[0].text.starts_with("SYSTEM INITIALIZED."));
    }

    #[test]
    fn corrupt_documents_fall_back_instead_of_failing() {
        let dir = tempdir().unwrap();
        let store = Store::with_dir(dir.path());
        fs::write(dir.path().join("player_profile.json"), "{ not json").unwrap();
        fs::write(dir.path().join("quest_list.json"), "17").unwrap();

        assert_eq!(store.load_player().level, 1);
        assert!(store.load_quests().is_empty());
    }

    #[test]
    fn profiles_saved_before_the_penalty_fields_still_load() {
        let dir = tempdir().unwrap();
        let store = Store::with_dir(dir.path());
        let legacy = r#"{
            "level": 9,
            "current_xp": 40,
            "required_xp": 100,
            "hp": 180,
            "max_hp": 180,
            "mp": 90,
            "max_mp": 90,
            "gold": 512,
            "stats": {"physical": 3, "knowledge": 1}
        }"#;
        fs::write(dir.path().join("player_profile.json"), legacy).unwrap();

        let player = store.load_player();
        assert_eq!(player.level, 9);
        assert_eq!(player.gold, 512);
        assert_eq!(player.title, "None");
        assert!(!player.penalty_active);
        assert_eq!(player.penalty_expires, 0);
        assert_eq!(player.last_active_date, Local::now().date_naive());
    }
}

use std::fs;
use std::path::PathBuf;

use log::warn;

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("system_awakening");
    if let Err(e) = fs::create_dir_all(&path) {
        warn!("could not create config dir {}: {e}", path.display());
    }
    path.push("settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    let path = settings_path();
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn save_settings(settings: &UiSettings) {
    let path = settings_path();
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = fs::write(&path, json) {
                warn!("failed to save settings to {}: {e}", path.display());
            }
        }
        Err(e) => warn!("failed to serialize settings: {e}"),
    }
}

use serde::{Deserialize, Serialize};

use crate::engine::llm_client::LlmSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Endpoint changes in the file take effect on the next launch; the
    // running engine keeps the oracle it started with.
    #[serde(default)]
    pub llm: LlmSettings,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            llm: LlmSettings::default(),
        }
    }
}

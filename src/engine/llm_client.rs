use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Connection parameters for the OpenAI-compatible endpoint. Lives inside
/// the app settings; an empty endpoint keeps the oracle offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:1234/v1".to_string(),
            model: "local-model".to_string(),
            api_key: None,
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub fn build_client(settings: &LlmSettings) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;
    Ok(client)
}

pub fn call_chat_completion(
    client: &Client,
    settings: &LlmSettings,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String> {
    let req = ChatCompletionRequest {
        model: &settings.model,
        temperature: settings.temperature,
        messages: vec![
            WireMessage { role: "system", content: system_prompt },
            WireMessage { role: "user", content: user_prompt },
        ],
    };

    let url = format!("{}/chat/completions", settings.endpoint.trim_end_matches('/'));
    let mut request = client.post(&url).json(&req);
    if let Some(key) = &settings.api_key {
        request = request.bearer_auth(key);
    }

    let resp = request.send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("LLM endpoint returned HTTP {status}"));
    }

    let body: ChatCompletionResponse = resp.json()?;
    body.choices
        .into_iter()
        .find_map(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| anyhow!("LLM returned an empty completion"))
}

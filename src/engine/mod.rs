pub mod engine;
pub mod protocol;
pub mod lifecycle;
pub mod progress;
pub mod apply_reward;

pub mod prompt_builder;
pub mod llm_client;
pub mod oracle;
pub mod storage;

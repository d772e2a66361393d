pub mod player;
pub mod quest;
pub mod message;

pub mod wish;
pub mod notification;
pub mod llm_decode;

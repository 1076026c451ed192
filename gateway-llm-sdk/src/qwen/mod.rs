//! Alibaba Qwen through the gateway (bearer auth, no api-version)

pub mod builder;
pub mod types;

pub use builder::QwenChatBuilder;
pub use types::{QwenChatCompletionRequest, QwenDefaults};

pub use crate::models::qwen::*;

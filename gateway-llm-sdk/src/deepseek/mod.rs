//! DeepSeek chat completions through the gateway

pub mod builder;
pub mod types;

pub use builder::DeepSeekChatBuilder;
pub use types::{DeepSeekChatCompletionRequest, DeepSeekDefaults};

pub use crate::models::deepseek::*;

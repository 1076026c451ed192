//! Anthropic Claude through the gateway's `messages/` route

pub mod builder;
pub mod types;

pub use builder::ClaudeMessageBuilder;
pub use types::ClaudeMessageRequest;

pub use crate::models::claude::*;

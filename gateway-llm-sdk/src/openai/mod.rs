//! OpenAI chat completions through the gateway

pub mod builder;
pub mod types;

pub use builder::OpenAIChatBuilder;
pub use types::OpenAIChatCompletionRequest;

pub use crate::models::openai::*;

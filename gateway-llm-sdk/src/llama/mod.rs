//! Meta Llama through the gateway's `llama/completion/` route

pub mod builder;
pub mod types;

pub use builder::LlamaCompletionBuilder;
pub use types::LlamaCompletionRequest;

pub use crate::models::llama::*;

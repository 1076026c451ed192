//! Google Gemini through the gateway's `generate_content` route

pub mod builder;
pub mod types;

pub use builder::GeminiMessageBuilder;
pub use types::*;

pub use crate::models::gemini::*;

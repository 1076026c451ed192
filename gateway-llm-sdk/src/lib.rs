//! # Gateway LLM SDK
//!
//! Typed clients for an API gateway that routes chat and completion requests
//! to several model providers under `{base}/deployments/{model}/...`.
//!
//! Each provider has a builder on [`GatewayClient`]. Sending resolves the model
//! against the provider's static table, assembles the conversation and
//! payload, issues one POST and returns the JSON body as-is.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gateway_llm_sdk::{GatewayClient, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GatewayClient::new(GatewayConfig::from_env()?)?;
//!     let body = client
//!         .openai()
//!         .model("gpt-4-o-mini")
//!         .system("Answer in one sentence.")
//!         .message("Why is the sky blue?")
//!         .max_tokens(200)
//!         .send()
//!         .await?;
//!
//!     println!("{}", body["choices"][0]["message"]["content"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Gemini Example
//!
//! ```rust,no_run
//! use gateway_llm_sdk::GatewayClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GatewayClient::from_env()?;
//!     let body = client
//!         .gemini()
//!         .message("Is Rust memory safe? Answer yes or no.")
//!         .response_mime_type("text/x.enum")
//!         .response_schema(json!({"type": "STRING", "enum": ["yes", "no"]}))
//!         .send()
//!         .await?;
//!
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

pub mod claude;
pub mod client;
pub mod config;
pub mod deepseek;
pub mod error;
pub mod gemini;
pub mod llama;
pub mod models;
pub mod openai;
pub mod providers;
pub mod qwen;
pub mod tools;
pub mod types;

pub use client::{GatewayClient, GatewayRequest};
pub use config::GatewayConfig;
pub use error::LlmError;
pub use types::{build_conversation, Message, Role};

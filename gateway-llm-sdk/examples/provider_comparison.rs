//! Example: the same prompt sent to every provider concurrently
//!
//! Run with:
//! HKBU_API_KEY="..." HKBU_BASIC_URL="..." RUST_LOG=gateway_llm_sdk=debug cargo run --example provider_comparison

use gateway_llm_sdk::{GatewayClient, LlmError};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = GatewayClient::from_env()?;
    let prompt = "What is 2+2? Answer in one word.";

    println!("=== Provider Comparison Demo ===\n");

    let (claude, openai, gemini, llama, deepseek, qwen) = tokio::join!(
        client.claude().message(prompt).send(),
        client.openai().message(prompt).send(),
        client.gemini().message(prompt).max_output_tokens(20).send(),
        client.llama().message(prompt).send(),
        client.deepseek().model("deepseek-v3").message(prompt).send(),
        client.qwen().message(prompt).max_tokens(20).send(),
    );

    report("Claude", claude);
    report("OpenAI", openai);
    report("Gemini", gemini);
    report("Llama", llama);
    report("DeepSeek", deepseek);
    report("Qwen", qwen);

    Ok(())
}

fn report(provider: &str, result: Result<Value, LlmError>) {
    println!("{}:", provider);
    match result {
        Ok(body) => println!("   Response: {}\n", body),
        Err(e) => println!("   Error: {}\n", e),
    }
}

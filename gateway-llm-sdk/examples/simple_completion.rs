use gateway_llm_sdk::{GatewayClient, GatewayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fails fast when HKBU_API_KEY or HKBU_BASIC_URL is missing
    let config = GatewayConfig::from_env()?;
    let client = GatewayClient::new(config)?;

    let body = client
        .openai()
        .model("gpt-4-o-mini")
        .system("You explain things to a ten year old.")
        .message("Explain quantum computing in simple terms.")
        .max_tokens(300)
        .send()
        .await?;

    match body["choices"][0]["message"]["content"].as_str() {
        Some(text) => println!("OpenAI: {}", text),
        None => println!("OpenAI returned: {}", body),
    }
    if let Some(usage) = body.get("usage") {
        println!("Usage: {}", usage);
    }

    Ok(())
}

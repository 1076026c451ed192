//! Example: declaring a tool and reading the raw tool call back
//!
//! The SDK forwards tool declarations but does not interpret the response;
//! the caller walks the provider's JSON.

use gateway_llm_sdk::{tools::Tool, GatewayClient};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[allow(dead_code)]
struct WeatherParams {
    /// City name, e.g. "Hong Kong"
    city: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GatewayClient::from_env()?;

    let weather = Tool::from_type::<WeatherParams>()
        .name("get_weather")
        .description("Get the current weather for a city")
        .build();

    let body = client
        .openai()
        .model("gpt-4-o")
        .message("What's the weather in Hong Kong?")
        .tool(weather)
        .max_tokens(200)
        .send()
        .await?;

    match body["choices"][0]["message"]["tool_calls"].as_array() {
        Some(calls) => {
            for call in calls {
                let arguments: WeatherParams =
                    serde_json::from_str(call["function"]["arguments"].as_str().unwrap_or("{}"))?;
                println!("{} -> {:?}", call["function"]["name"], arguments);
            }
        }
        None => println!("No tool call: {}", body),
    }

    Ok(())
}

use schemars::schema::RootSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

use crate::error::LlmError;

/// A function the model may call, declared by name, description and parameter schema
#[derive(Debug, Clone)]
pub struct Tool {
    name: String,
    description: String,
    parameters: RootSchema,
}

impl Tool {
    /// Declare a tool whose parameters are the schema of `T`
    pub fn from_type<T: schemars::JsonSchema>() -> ToolBuilder<T> {
        ToolBuilder {
            name: None,
            description: None,
            _phantom: PhantomData,
        }
    }

    /// Declare a tool from a hand-written parameter schema
    pub fn from_json_schema(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: Value,
    ) -> Result<Self, LlmError> {
        let parameters: RootSchema = serde_json::from_value(schema)
            .map_err(|e| LlmError::invalid_request(format!("Invalid tool schema: {e}")))?;

        Ok(Tool {
            name: name.into(),
            description: description.into(),
            parameters,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &RootSchema {
        &self.parameters
    }
}

/// Collects the name and description of a tool declared from a Rust type
pub struct ToolBuilder<T> {
    name: Option<String>,
    description: Option<String>,
    _phantom: PhantomData<T>,
}

impl<T: schemars::JsonSchema> ToolBuilder<T> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Build the tool; the name defaults to the schema title of `T`
    pub fn build(self) -> Tool {
        use schemars::gen::SchemaSettings;

        // Inline subschemas; gateway backends reject $ref
        let settings = SchemaSettings::draft07().with(|s| {
            s.inline_subschemas = true;
        });
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<T>();

        Tool {
            name: self.name.unwrap_or_else(T::schema_name),
            description: self.description.unwrap_or_default(),
            parameters: schema,
        }
    }
}

/// Function definition in the chat-completions tool format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatFunction {
    pub name: String,
    pub description: String,
    pub parameters: RootSchema,
}

/// `{"type": "function", "function": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTool {
    pub r#type: String,
    pub function: ChatFunction,
}

/// Wire shape a provider expects for a [`Tool`]
pub trait ProviderToolFormat {
    type ProviderTool: Serialize;

    fn to_provider_tool(tool: &Tool) -> Self::ProviderTool;
}

/// Tool format shared by OpenAI and DeepSeek
pub struct ChatToolFormat;

impl ProviderToolFormat for ChatToolFormat {
    type ProviderTool = ChatTool;

    fn to_provider_tool(tool: &Tool) -> Self::ProviderTool {
        ChatTool {
            r#type: "function".to_string(),
            function: ChatFunction {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters().clone(),
            },
        }
    }
}

//! Model registries for the providers behind the gateway
//!
//! Each provider publishes a small static table mapping a deployment name to
//! the API version the gateway expects for it. Lookups are exact and
//! case-sensitive; an unknown name is an error, never a fallback.

use crate::error::LlmError;

/// A deployable model and the API version pinned for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Deployment name used in the request path
    pub id: &'static str,
    /// Value of the `api-version` query parameter
    pub api_version: &'static str,
}

impl ModelDescriptor {
    pub const fn new(id: &'static str, api_version: &'static str) -> Self {
        Self { id, api_version }
    }
}

/// Find `name` in `table`, failing with [`LlmError::ModelNotFound`]
pub fn find_model<'t>(
    provider: &str,
    table: &'t [ModelDescriptor],
    name: &str,
) -> Result<&'t ModelDescriptor, LlmError> {
    table.iter().find(|model| model.id == name).ok_or_else(|| {
        let available: Vec<&str> = table.iter().map(|model| model.id).collect();
        LlmError::model_not_found(provider, name, &available)
    })
}

/// Claude model constants
pub mod claude {
    use super::ModelDescriptor;

    pub const SONNET_3_5_ID: &str = "claude-3-5-sonnet";
    pub const HAIKU_3_ID: &str = "claude-3-haiku";

    pub const MODELS: &[ModelDescriptor] = &[
        ModelDescriptor::new(SONNET_3_5_ID, "20240620"),
        ModelDescriptor::new(HAIKU_3_ID, "20240307"),
    ];

    pub const DEFAULT_MODEL: &str = SONNET_3_5_ID;
}

/// OpenAI model constants
pub mod openai {
    use super::ModelDescriptor;

    pub const GPT_4O_ID: &str = "gpt-4-o";
    pub const GPT_4O_MINI_ID: &str = "gpt-4-o-mini";
    pub const O1_PREVIEW_ID: &str = "o1-preview";
    pub const O1_MINI_ID: &str = "o1-mini";
    /// Embedding deployments share the table but are not chat models
    pub const TEXT_EMBEDDING_3_LARGE_ID: &str = "text-embedding-3-large";
    pub const TEXT_EMBEDDING_3_SMALL_ID: &str = "text-embedding-3-small";

    pub const MODELS: &[ModelDescriptor] = &[
        ModelDescriptor::new(GPT_4O_ID, "2024-10-21"),
        ModelDescriptor::new(GPT_4O_MINI_ID, "2024-10-21"),
        ModelDescriptor::new(O1_PREVIEW_ID, "2024-10-21"),
        ModelDescriptor::new(O1_MINI_ID, "2024-10-21"),
        ModelDescriptor::new(TEXT_EMBEDDING_3_LARGE_ID, "2024-05-01-preview"),
        ModelDescriptor::new(TEXT_EMBEDDING_3_SMALL_ID, "2024-05-01-preview"),
    ];

    pub const DEFAULT_MODEL: &str = GPT_4O_MINI_ID;
}

/// Google Gemini model constants
pub mod gemini {
    use super::ModelDescriptor;

    pub const GEMINI_1_5_PRO_ID: &str = "gemini-1.5-pro";
    pub const GEMINI_1_5_FLASH_ID: &str = "gemini-1.5-flash";

    pub const MODELS: &[ModelDescriptor] = &[
        ModelDescriptor::new(GEMINI_1_5_PRO_ID, "002"),
        ModelDescriptor::new(GEMINI_1_5_FLASH_ID, "002"),
    ];

    pub const DEFAULT_MODEL: &str = GEMINI_1_5_FLASH_ID;
}

/// Meta Llama model constants
pub mod llama {
    use super::ModelDescriptor;

    pub const LLAMA_3_1_ID: &str = "llama3_1";

    pub const MODELS: &[ModelDescriptor] = &[ModelDescriptor::new(LLAMA_3_1_ID, "20240723")];

    pub const DEFAULT_MODEL: &str = LLAMA_3_1_ID;
}

/// DeepSeek model constants
pub mod deepseek {
    use super::ModelDescriptor;

    pub const R1_ID: &str = "deepseek-r1";
    pub const V3_ID: &str = "deepseek-v3";

    pub const MODELS: &[ModelDescriptor] = &[
        ModelDescriptor::new(R1_ID, "2024-05-01-preview"),
        ModelDescriptor::new(V3_ID, "2024-05-01-preview"),
    ];

    pub const DEFAULT_MODEL: &str = R1_ID;
}

/// Alibaba Qwen model constants
pub mod qwen {
    use super::ModelDescriptor;

    pub const MAX_ID: &str = "qwen-max";
    pub const PLUS_ID: &str = "qwen-plus";

    /// The version is implicit in the route; it is kept for completeness
    pub const MODELS: &[ModelDescriptor] = &[
        ModelDescriptor::new(MAX_ID, "v1"),
        ModelDescriptor::new(PLUS_ID, "v1"),
    ];

    pub const DEFAULT_MODEL: &str = MAX_ID;
}

/// Every provider table, keyed by provider name
pub fn all() -> [(&'static str, &'static [ModelDescriptor]); 6] {
    use crate::providers;

    [
        (providers::CLAUDE.name, claude::MODELS),
        (providers::OPENAI.name, openai::MODELS),
        (providers::GEMINI.name, gemini::MODELS),
        (providers::LLAMA.name, llama::MODELS),
        (providers::DEEPSEEK.name, deepseek::MODELS),
        (providers::QWEN.name, qwen::MODELS),
    ]
}

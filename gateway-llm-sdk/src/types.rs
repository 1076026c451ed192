use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message (only in caller-supplied histories)
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Detail hint sent with image references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Low,
    High,
    Auto,
}

/// Image reference inside a composite message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    pub detail: ImageDetail,
}

/// One element of a composite message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text { text: String },
    /// Image reference
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Image part with the fixed low-detail hint
    pub fn image(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: ImageDetail::Low,
            },
        }
    }
}

/// Message content: a bare string or an ordered list of parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    /// Create a new text message
    pub fn text<S: Into<String>>(role: Role, text: S) -> Self {
        Self {
            role,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a system message
    pub fn system<S: Into<String>>(text: S) -> Self {
        Self::text(Role::System, text)
    }

    /// Create a user message with text content
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self::text(Role::User, text)
    }

    /// Create an assistant message
    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self::text(Role::Assistant, text)
    }

    /// Create a user message carrying text followed by an image reference
    pub fn user_with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::text(text),
                ContentPart::image(image_url),
            ]),
        }
    }
}

/// Assemble `[system?, user]` for a single-turn request
///
/// An empty system text is treated as absent. With an image reference the
/// user content becomes `[text, image]`; otherwise it is the plain text.
pub fn build_conversation(text: &str, system: Option<&str>, image_url: Option<&str>) -> Vec<Message> {
    let mut conversation = Vec::with_capacity(2);

    if let Some(system) = system.filter(|s| !s.is_empty()) {
        conversation.push(Message::system(system));
    }

    let user = match image_url.filter(|u| !u.is_empty()) {
        Some(url) => Message::user_with_image(text, url),
        None => Message::user(text),
    };
    conversation.push(user);

    conversation
}

/// Response format hint for chat-completions style providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormatType {
    /// Plain text response
    Text,
    /// JSON object response
    JsonObject,
}

/// Response format hint for chat-completions style providers
///
/// `Typed` serializes as `{"type": "..."}`; `Raw` is forwarded verbatim,
/// e.g. a `json_schema` hint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseFormat {
    Typed {
        #[serde(rename = "type")]
        format_type: ResponseFormatType,
    },
    Raw(Value),
}

impl ResponseFormat {
    pub fn text() -> Self {
        Self::Typed {
            format_type: ResponseFormatType::Text,
        }
    }

    pub fn json_object() -> Self {
        Self::Typed {
            format_type: ResponseFormatType::JsonObject,
        }
    }

    /// `{"type": "json_schema", "json_schema": {"name": ..., "schema": ...}}`
    pub fn json_schema(name: impl Into<String>, schema: Value) -> Self {
        Self::Raw(json!({
            "type": "json_schema",
            "json_schema": {
                "name": name.into(),
                "schema": schema,
            },
        }))
    }

    /// Any other hint the gateway understands
    pub fn raw(format: Value) -> Self {
        Self::Raw(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_only_without_system() {
        let conversation = build_conversation("Hello", None, None);
        assert_eq!(conversation, vec![Message::user("Hello")]);

        let conversation = build_conversation("Hello", Some(""), None);
        assert_eq!(conversation, vec![Message::user("Hello")]);
    }

    #[test]
    fn test_system_comes_first() {
        let conversation = build_conversation("Hello", Some("Be brief."), None);
        assert_eq!(
            conversation,
            vec![Message::system("Be brief."), Message::user("Hello")]
        );
    }

    #[test]
    fn test_image_makes_composite_user_content() {
        let conversation = build_conversation(
            "What is in this picture?",
            None,
            Some("https://img.example.com/cat.png"),
        );
        assert_eq!(conversation.len(), 1);
        match &conversation[0].content {
            MessageContent::Parts(parts) => {
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[0], ContentPart::text("What is in this picture?"));
                match &parts[1] {
                    ContentPart::ImageUrl { image_url } => {
                        assert_eq!(image_url.url, "https://img.example.com/cat.png");
                        assert_eq!(image_url.detail, ImageDetail::Low);
                    }
                    other => panic!("Expected image part, got {:?}", other),
                }
            }
            other => panic!("Expected composite content, got {:?}", other),
        }
    }

    #[test]
    fn test_wire_shape() {
        let conversation = build_conversation("Describe", Some("sys"), Some("http://x/y.jpg"));
        let value = serde_json::to_value(&conversation).unwrap();
        assert_eq!(
            value,
            json!([
                {"role": "system", "content": "sys"},
                {"role": "user", "content": [
                    {"type": "text", "text": "Describe"},
                    {"type": "image_url", "image_url": {"url": "http://x/y.jpg", "detail": "low"}}
                ]}
            ])
        );
    }

    #[test]
    fn test_response_format_serialization() {
        assert_eq!(
            serde_json::to_value(ResponseFormat::json_object()).unwrap(),
            json!({"type": "json_object"})
        );
        assert_eq!(
            serde_json::to_value(ResponseFormat::text()).unwrap(),
            json!({"type": "text"})
        );
    }

    #[test]
    fn test_response_format_json_schema_and_raw() {
        let schema = json!({"type": "object", "properties": {"answer": {"type": "string"}}});
        assert_eq!(
            serde_json::to_value(ResponseFormat::json_schema("answer", schema.clone())).unwrap(),
            json!({
                "type": "json_schema",
                "json_schema": {"name": "answer", "schema": schema}
            })
        );

        let hint = json!({"type": "regex", "pattern": "[0-9]+"});
        assert_eq!(
            serde_json::to_value(ResponseFormat::raw(hint.clone())).unwrap(),
            hint
        );
    }

    #[test]
    fn test_response_format_deserializes_unknown_hint_as_raw() {
        let known: ResponseFormat = serde_json::from_value(json!({"type": "json_object"})).unwrap();
        assert_eq!(known, ResponseFormat::json_object());

        let other = json!({"type": "json_schema", "json_schema": {"name": "x", "schema": {}}});
        let parsed: ResponseFormat = serde_json::from_value(other.clone()).unwrap();
        assert_eq!(parsed, ResponseFormat::Raw(other));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}

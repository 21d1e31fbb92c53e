//! Generative request and reply types.

/// One piece of a generation request.
#[derive(Debug, Clone)]
pub enum Part {
    /// Plain prompt text.
    Text(String),
    /// Base64-encoded image bytes with their mime type.
    InlineImage { data: String, mime_type: String },
}

/// Request for a generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Content parts in the order the model should see them.
    pub parts: Vec<Part>,
    /// Override the client's model choice for this request.
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// When set, the client asks for JSON output constrained to this schema.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Request with a single text prompt.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text(prompt.into())],
            ..Self::default()
        }
    }

    /// Request with an inline image followed by a text prompt.
    pub fn with_image(
        prompt: impl Into<String>,
        data: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            parts: vec![
                Part::InlineImage {
                    data: data.into(),
                    mime_type: mime_type.into(),
                },
                Part::Text(prompt.into()),
            ],
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// All text parts joined, for clients that match on prompt content.
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(text) => Some(text.as_str()),
                Part::InlineImage { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any part is an image.
    pub fn has_image(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, Part::InlineImage { .. }))
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Reply from a generation request.
#[derive(Debug, Clone)]
pub struct GenerateReply {
    /// Text the model produced, if any.
    pub text: Option<String>,
    /// Token usage statistics.
    pub usage: Usage,
}

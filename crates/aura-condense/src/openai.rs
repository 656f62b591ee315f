//! OpenAI-compatible condensing backend.
//!
//! Requires the `api` feature and an API key.

use crate::condenser::{CondenseError, CondenseResult, Condenser};
use serde::{Deserialize, Serialize};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";

const SYSTEM_PROMPT: &str =
    "You condense text. Rewrite the user's text in at most two sentences, \
     preserving its meaning. Reply with the condensed text only.";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Condenser backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiCondenser {
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiCondenser {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: OPENAI_API_URL.to_string(),
        }
    }

    /// Create from `OPENAI_API_KEY`. A missing key is an error the caller's
    /// fallback absorbs, not a panic.
    pub fn from_env() -> CondenseResult<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| CondenseError::MissingCredentials)?;
        Ok(Self::new(&api_key))
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Use a custom endpoint (compatible proxies, Azure deployments).
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

impl Condenser for OpenAiCondenser {
    fn name(&self) -> &str {
        "openai"
    }

    fn condense(&self, text: &str) -> CondenseResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_tokens: 256,
            temperature: 0.0,
        };

        let response = ureq::post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(&request)
            .map_err(|e| match e {
                ureq::Error::Status(401, _) => CondenseError::AuthenticationFailed,
                ureq::Error::Status(status, _) => {
                    CondenseError::ApiError(format!("status {}", status))
                }
                ureq::Error::Transport(t) => CondenseError::ConnectionFailed(t.to_string()),
            })?;

        let parsed: ChatResponse = response
            .into_json()
            .map_err(|e| CondenseError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CondenseError::InvalidResponse("no choices in response".to_string()))
    }
}

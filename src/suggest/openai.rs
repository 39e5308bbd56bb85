//! OpenAI chat-completions client for tag suggestion.

use super::{SUGGESTION_PROMPT, SuggestError, SuggestResult, TagSuggester};
use serde_json::{Value, json};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f64 = 0.5;
const MAX_TOKENS: u32 = 60;

/// Tag suggester backed by the OpenAI chat-completions API.
///
/// Generation is low-temperature and bounded-length: tags, not prose.
pub struct OpenAiSuggester {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl OpenAiSuggester {
    /// Creates a suggester with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_payload(&self, text: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": SUGGESTION_PROMPT },
                { "role": "user", "content": text },
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        })
    }

    fn parse_response(raw: &str) -> SuggestResult<String> {
        let v: Value = serde_json::from_str(raw)
            .map_err(|e| SuggestError::Malformed(format!("invalid JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let message = error["message"].as_str().unwrap_or("unknown error");
            return Err(SuggestError::Api(message.to_string()));
        }

        v["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| SuggestError::Malformed("missing message content".to_string()))
    }

    /// Extracts the API error message from a non-2xx body, falling back to
    /// the raw status and body.
    fn error_from_body(status: reqwest::StatusCode, body: &str) -> SuggestError {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}: {}", status, body));
        SuggestError::Api(message)
    }
}

impl TagSuggester for OpenAiSuggester {
    fn complete(&self, text: &str) -> SuggestResult<String> {
        let response = self
            .client
            .post(COMPLETIONS_URL)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.request_payload(text))
            .send()
            .map_err(|e| SuggestError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SuggestError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_body(status, &body));
        }

        Self::parse_response(&body)
    }
}

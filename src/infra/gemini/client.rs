// Responsible for all communication with the generative design-suggestion API.

use crate::domain::model::DesignSuggestion;
use crate::infra::error::{FetchError, FetchResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

/// Turns a free-text brief into a structured design suggestion.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn suggest(&self, prompt: &str) -> FetchResult<DesignSuggestion>;
}

/// Wraps the user's brief in the fixed creative-director instruction.
pub fn primed_prompt(prompt: &str) -> String {
    format!(
        "User needs branding/design ideas for: {}. As a senior creative director at Aspire Graphics, provide a professional recommendation.",
        prompt
    )
}

/// JSON schema the model must answer with.
pub fn response_schema() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "colorPalette": { "type": "ARRAY", "items": { "type": "STRING" } },
            "fonts": { "type": "ARRAY", "items": { "type": "STRING" } },
            "concept": { "type": "STRING" }
        },
        "required": ["title", "description", "colorPalette", "fonts", "concept"]
    })
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize, Debug)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
struct Part {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl SuggestionService for GeminiClient {
    async fn suggest(&self, prompt: &str) -> FetchResult<DesignSuggestion> {
        let url = self.endpoint();
        let body = json!({
            "contents": [
                { "role": "user", "parts": [ { "text": primed_prompt(prompt) } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or(FetchError::EmptyResponse)?;

        Ok(serde_json::from_str(&text)?)
    }
}

/// Stand-in used when no API key is configured: every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSuggestionService;

#[async_trait]
impl SuggestionService for DisabledSuggestionService {
    async fn suggest(&self, _prompt: &str) -> FetchResult<DesignSuggestion> {
        Err(FetchError::NotConfigured)
    }
}

use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("GEMINI_API_KEY is not set")]
    MissingKey,
    #[error("request to model API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("model reply contained no text")]
    EmptyReply,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ReplyContent>,
}

#[derive(Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

/// Thin client for the Gemini generateContent endpoint. Sends a single
/// instruction and returns the raw reply text; all interpretation of that
/// text happens in the generator.
pub struct GeminiClient {
    http: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: &str, api_url: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_url: api_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    /// Build a client from the GEMINI_API_KEY environment variable. The key
    /// is required before any generation attempt is made.
    pub fn from_env(model: &str, api_url: &str) -> Result<Self, ModelError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ModelError::MissingKey)?;
        Ok(Self::new(api_key, model, api_url))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One request, one free-text reply. Non-2xx statuses and empty replies
    /// are errors for the caller's retry loop to absorb.
    pub async fn generate_text(&self, instruction: &str) -> Result<String, ModelError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: instruction }],
            }],
            generation_config: GenerationConfig { temperature: 0.9 },
        };

        debug!(
            "Calling model {} with {} char instruction",
            self.model,
            instruction.len()
        );

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Model API error {}: {}", status, body);
            return Err(ModelError::Status { status, body });
        }

        let reply: GenerateContentResponse = response.json().await?;
        let text: String = reply
            .candidates
            .into_iter()
            .take(1)
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(ModelError::EmptyReply);
        }

        debug!("Model replied with {} chars", text.len());
        Ok(text)
    }
}

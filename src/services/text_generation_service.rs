//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

#[derive(Debug)]
pub enum TextGenerationError {
    MissingApiKey,
    HttpError(reqwest::Error),
    ApiError { status: u16, body: String },
    EmptyResponse,
}

impl fmt::Display for TextGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextGenerationError::MissingApiKey => write!(f, "GOOGLE_AI_API_KEY not set"),
            TextGenerationError::HttpError(err) => write!(f, "Gemini request failed: {}", err),
            TextGenerationError::ApiError { status, body } => {
                write!(f, "Gemini API failed: {} {}", status, body)
            }
            TextGenerationError::EmptyResponse => write!(f, "No content from Gemini"),
        }
    }
}

impl std::error::Error for TextGenerationError {}

impl From<reqwest::Error> for TextGenerationError {
    fn from(err: reqwest::Error) -> Self {
        // error text ends up in responses, keep request URLs out of it
        TextGenerationError::HttpError(err.without_url())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// `Some("application/json")` asks for a single JSON document.
    pub response_mime_type: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 8192,
            response_mime_type: Some("application/json".to_string()),
        }
    }
}

/// Produces text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, TextGenerationError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

pub struct GeminiClient {
    http_client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, TextGenerationError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
        })
    }
}

fn build_request(prompt: &str, options: &GenerationOptions) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: options.temperature,
            max_output_tokens: options.max_output_tokens,
            response_mime_type: options.response_mime_type.clone(),
        },
    }
}

/// `candidates[0].content.parts[0].text`, if non-blank.
fn first_text(response: GeminiResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()?
        .text
        .filter(|text| !text.trim().is_empty())
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, TextGenerationError> {
        let api_key = self.api_key.as_deref().ok_or(TextGenerationError::MissingApiKey)?;

        log::info!("Calling Gemini API");

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&build_request(prompt, options))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            log::error!("Gemini API error response: {} {}", status, body);
            return Err(TextGenerationError::ApiError { status, body });
        }

        let gemini_response: GeminiResponse = response.json().await?;
        first_text(gemini_response).ok_or(TextGenerationError::EmptyResponse)
    }
}

use reqwest::Client;
use std::{fmt, time::Duration};

use crate::models::itinerary::GenerationOutcome;
use crate::models::trip::TripRequestBody;
use crate::routes::map_token::TokenResponse;

/// Anything that stopped a response from reaching us: network failures,
/// timeouts, non-2xx statuses and bodies that are not itinerary JSON.
#[derive(Debug)]
pub enum ClientError {
    HttpError(reqwest::Error),
    StatusError(u16),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::HttpError(err) => write!(f, "Request failed: {}", err),
            ClientError::StatusError(status) => {
                write!(f, "Failed to generate itinerary! (status {})", status)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::HttpError(err)
    }
}

/// HTTP client for the planner backend.
#[derive(Clone)]
pub struct PlannerClient {
    http_client: Client,
    base_url: String,
}

impl PlannerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /get-mapbox-token`; `None` when the server has no token.
    pub async fn fetch_map_token(&self) -> Result<Option<String>, ClientError> {
        let response = self
            .http_client
            .get(format!("{}/get-mapbox-token", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::StatusError(response.status().as_u16()));
        }

        let body: TokenResponse = response.json().await?;
        Ok(body.token)
    }

    /// `POST /generate`. A degraded outcome is a successful call.
    pub async fn generate(&self, body: &TripRequestBody) -> Result<GenerationOutcome, ClientError> {
        let response = self
            .http_client
            .post(format!("{}/generate", self.base_url))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::StatusError(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

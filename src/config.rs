use std::{env, time::Duration};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const GEMINI_MODEL: &str = "gemini-1.5-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MAPBOX_BASE_URL: &str = "https://api.mapbox.com";
const OUTBOUND_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, read once at start-up.
///
/// Secrets are optional: a missing map token only costs us geocoding (the
/// default coordinates are used) and a missing Gemini key turns every
/// generation into a degraded response.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mapbox_token: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub mapbox_base_url: String,
    pub outbound_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            mapbox_token: None,
            gemini_api_key: None,
            gemini_model: GEMINI_MODEL.to_string(),
            gemini_base_url: GEMINI_BASE_URL.to_string(),
            mapbox_base_url: MAPBOX_BASE_URL.to_string(),
            outbound_timeout: Duration::from_secs(OUTBOUND_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            mapbox_token: secret("MAPBOX_ACCESS_TOKEN"),
            gemini_api_key: secret("GOOGLE_AI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            mapbox_base_url: env::var("MAPBOX_BASE_URL").unwrap_or(defaults.mapbox_base_url),
            outbound_timeout: env::var("OUTBOUND_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.outbound_timeout),
        }
    }
}

// Blank values count as unset.
fn secret(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

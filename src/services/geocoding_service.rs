//! Destination geocoding through the Mapbox Places API.
//!
//! Geocoding is best effort: [`resolve_coordinates`] never fails and hands
//! back [`DEFAULT_COORDINATES`] whenever the lookup does not produce a match.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::{fmt, time::Duration};
use url::Url;

use crate::models::itinerary::{Coordinates, DEFAULT_COORDINATES};

#[derive(Debug)]
pub enum GeocodingError {
    MissingToken,
    InvalidUrl(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for GeocodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodingError::MissingToken => write!(f, "MAPBOX_ACCESS_TOKEN not set"),
            GeocodingError::InvalidUrl(msg) => write!(f, "Invalid geocoding URL: {}", msg),
            GeocodingError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeocodingError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl std::error::Error for GeocodingError {}

impl From<reqwest::Error> for GeocodingError {
    fn from(err: reqwest::Error) -> Self {
        // the request URL carries the access token
        GeocodingError::HttpError(err.without_url())
    }
}

/// Turns a place name into coordinates. `Ok(None)` means "no match".
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodingError>;
}

#[derive(Debug, Deserialize)]
struct MapboxResponse {
    #[serde(default)]
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    center: Option<(f64, f64)>,
}

pub struct MapboxGeocoder {
    http_client: Client,
    access_token: Option<String>,
    base_url: String,
}

impl MapboxGeocoder {
    pub fn new(
        access_token: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeocodingError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            access_token,
            base_url: base_url.into(),
        })
    }

    /// `{base}/geocoding/v5/mapbox.places/{place}.json?access_token=…&limit=1`
    fn places_url(&self, place: &str, token: &str) -> Result<Url, GeocodingError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| GeocodingError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| GeocodingError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(&["geocoding", "v5", "mapbox.places"])
            .push(&format!("{}.json", place));

        url.query_pairs_mut()
            .append_pair("access_token", token)
            .append_pair("limit", "1");

        Ok(url)
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodingError> {
        let token = self.access_token.as_deref().ok_or(GeocodingError::MissingToken)?;
        let url = self.places_url(place, token)?;

        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GeocodingError::ResponseError(format!(
                "Mapbox returned status {}",
                response.status()
            )));
        }

        let body: MapboxResponse = response.json().await?;
        Ok(first_center(body))
    }
}

fn first_center(response: MapboxResponse) -> Option<Coordinates> {
    response
        .features
        .into_iter()
        .next()
        .and_then(|feature| feature.center)
        .map(Coordinates::from)
}

/// Coordinates for `place`, or the default pair on any failure or no match.
pub async fn resolve_coordinates(geocoder: &dyn Geocoder, place: &str) -> Coordinates {
    match geocoder.geocode(place).await {
        Ok(Some(coordinates)) => coordinates,
        Ok(None) => {
            log::info!("No geocoding match for '{}', using default coordinates", place);
            DEFAULT_COORDINATES
        }
        Err(e) => {
            log::warn!("Geocoding failed for '{}': {}", place, e);
            DEFAULT_COORDINATES
        }
    }
}

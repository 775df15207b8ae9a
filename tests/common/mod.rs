#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App};
use actix_cors::Cors;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use trip_planner_api::{
    config::AppConfig,
    models::itinerary::Coordinates,
    routes,
    services::{
        geocoding_service::{Geocoder, GeocodingError},
        itinerary_generation_service::ItineraryGenerator,
        text_generation_service::{GenerationOptions, TextGenerationError, TextGenerator},
    },
};

pub const PARIS: (f64, f64) = (2.3522, 48.8566);

pub struct StubGeocoder(pub Option<Coordinates>);

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, _place: &str) -> Result<Option<Coordinates>, GeocodingError> {
        Ok(self.0)
    }
}

/// Replies with the same text to every prompt, or fails with `status`.
pub struct StubGenerator {
    pub reply: Result<String, u16>,
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, TextGenerationError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(TextGenerationError::ApiError {
                status: *status,
                body: "stub failure".to_string(),
            }),
        }
    }
}

/// Generated text for `days` identical days costing 300 each.
pub fn canned_itinerary(days: usize) -> String {
    let day = json!({
        "day": 1,
        "morning": {"activity": "Louvre", "cost": 60},
        "afternoon": {"activity": "Eiffel Tower", "cost": 60},
        "evening": {"activity": "Seine walk", "cost": 30},
        "dining": {"restaurant": "Chez Marie", "cuisine": "French", "cost": 50},
        "hotel": {"name": "Hotel du Nord", "price": 100}
    });

    json!({
        "summary": "Art and food in Paris",
        "hotels": [
            {
                "name": "Hotel du Nord",
                "pricePerNight": 100,
                "description": "Canal side",
                "rating": 4.2,
                "distanceFromCenter": "2 km"
            }
        ],
        "itinerary": vec![day; days]
    })
    .to_string()
}

#[derive(Clone)]
pub struct TestApp {
    pub config: AppConfig,
    pub generator: Arc<ItineraryGenerator>,
}

impl TestApp {
    pub fn new(reply: Result<String, u16>) -> Self {
        let config = AppConfig {
            mapbox_token: Some("pk.test-token-1234".to_string()),
            gemini_api_key: Some("gemini-test-key-5678".to_string()),
            ..AppConfig::default()
        };
        let generator = ItineraryGenerator::new(
            Arc::new(StubGeocoder(Some(Coordinates::from(PARIS)))),
            Arc::new(StubGenerator { reply }),
        );

        Self {
            config,
            generator: Arc::new(generator),
        }
    }

    pub fn without_token(mut self) -> Self {
        self.config.mapbox_token = None;
        self
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::from(self.generator.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .send_wildcard()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

use std::{fmt, sync::Arc};

use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::itinerary::{
    generated::{GeneratedDay, GeneratedItinerary},
    Coordinates, DayPlan, GenerationOutcome, HotelOption, Itinerary,
};
use crate::models::trip::{TripRequest, TripRequestBody, TripValidationError, MIN_DAILY_COST};
use crate::services::budget_normalizer::BudgetNormalizer;
use crate::services::geocoding_service::{
    resolve_coordinates, Geocoder, GeocodingError, MapboxGeocoder,
};
use crate::services::itinerary_parser::{parse_generated_text, ParseError};
use crate::services::template_itinerary;
use crate::services::text_generation_service::{
    GeminiClient, GenerationOptions, TextGenerationError, TextGenerator,
};

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

#[derive(Clone)]
pub struct ItineraryGenerationConfig {
    pub min_daily_cost: i64,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            min_daily_cost: MIN_DAILY_COST,
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug)]
pub enum GenerationError {
    Validation(TripValidationError),
    TextGeneration(TextGenerationError),
    Parse(ParseError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Validation(err) => write!(f, "{}", err),
            GenerationError::TextGeneration(err) => write!(f, "{}", err),
            GenerationError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<TripValidationError> for GenerationError {
    fn from(err: TripValidationError) -> Self {
        GenerationError::Validation(err)
    }
}

impl From<TextGenerationError> for GenerationError {
    fn from(err: TextGenerationError) -> Self {
        GenerationError::TextGeneration(err)
    }
}

impl From<ParseError> for GenerationError {
    fn from(err: ParseError) -> Self {
        GenerationError::Parse(err)
    }
}

/// Errors raised while wiring up the outbound clients.
#[derive(Debug)]
pub enum SetupError {
    Geocoder(GeocodingError),
    TextGenerator(TextGenerationError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Geocoder(err) => write!(f, "Failed to create geocoder: {}", err),
            SetupError::TextGenerator(err) => write!(f, "Failed to create Gemini client: {}", err),
        }
    }
}

impl std::error::Error for SetupError {}

/// Turns trip requests into budget-normalized itineraries.
pub struct ItineraryGenerator {
    geocoder: Arc<dyn Geocoder>,
    text_generator: Arc<dyn TextGenerator>,
    config: ItineraryGenerationConfig,
}

impl ItineraryGenerator {
    pub fn new(geocoder: Arc<dyn Geocoder>, text_generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_config(geocoder, text_generator, ItineraryGenerationConfig::default())
    }

    pub fn with_config(
        geocoder: Arc<dyn Geocoder>,
        text_generator: Arc<dyn TextGenerator>,
        config: ItineraryGenerationConfig,
    ) -> Self {
        Self {
            geocoder,
            text_generator,
            config,
        }
    }

    /// Mapbox geocoding and Gemini generation, configured from `app_config`.
    ///
    /// Missing secrets are not an error here; they surface per request.
    pub fn from_config(app_config: &AppConfig) -> Result<Self, SetupError> {
        if app_config.mapbox_token.is_none() {
            log::warn!("MAPBOX_ACCESS_TOKEN not set - destinations will use default coordinates");
        }
        if app_config.gemini_api_key.is_none() {
            log::warn!("GOOGLE_AI_API_KEY not set - itinerary generation will return fallbacks");
        }

        let geocoder = MapboxGeocoder::new(
            app_config.mapbox_token.clone(),
            app_config.mapbox_base_url.clone(),
            app_config.outbound_timeout,
        )
        .map_err(SetupError::Geocoder)?;

        let text_generator = GeminiClient::new(
            app_config.gemini_api_key.clone(),
            &app_config.gemini_base_url,
            &app_config.gemini_model,
            app_config.outbound_timeout,
        )
        .map_err(SetupError::TextGenerator)?;

        Ok(Self::new(Arc::new(geocoder), Arc::new(text_generator)))
    }

    /// Handle a raw request body end to end. Never fails: anything that goes
    /// wrong becomes a degraded outcome around the placeholder itinerary.
    pub async fn generate_outcome(&self, body: TripRequestBody) -> GenerationOutcome {
        let request_id = Uuid::new_v4();
        let requested_budget = body.budget.unwrap_or(0);

        let result = match TripRequest::try_from(body) {
            Ok(request) => self.generate_itinerary(&request).await,
            Err(err) => Err(GenerationError::from(err)),
        };

        match result {
            Ok(itinerary) => {
                log::info!(
                    "[{}] Generated {}-day itinerary, total cost {}",
                    request_id,
                    itinerary.itinerary.len(),
                    itinerary.total_cost
                );
                GenerationOutcome::Ok(itinerary)
            }
            Err(err) => {
                log::error!("[{}] Itinerary generation failed: {}", request_id, err);
                GenerationOutcome::Degraded {
                    itinerary: template_itinerary::placeholder(requested_budget),
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Geocode, generate, and normalize an itinerary for a validated request.
    ///
    /// Geocoding runs alongside generation and cannot fail the request.
    pub async fn generate_itinerary(
        &self,
        request: &TripRequest,
    ) -> Result<Itinerary, GenerationError> {
        let prompt = build_prompt(request, self.config.min_daily_cost);
        let options = GenerationOptions {
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
            response_mime_type: Some("application/json".to_string()),
        };

        let (coordinates, generated_text) = futures::join!(
            resolve_coordinates(self.geocoder.as_ref(), &request.destination),
            self.text_generator.generate(&prompt, &options)
        );

        let generated = parse_generated_text(&generated_text?)?;
        Ok(self.assemble(generated, request, coordinates))
    }

    /// Complete, normalize, and total the generated days.
    ///
    /// The day list is cut or padded to the requested length so the per-day
    /// cap is always floor(budget / requested days).
    fn assemble(
        &self,
        generated: GeneratedItinerary,
        request: &TripRequest,
        coordinates: Coordinates,
    ) -> Itinerary {
        let requested_days = request.days as usize;
        if generated.itinerary.len() != requested_days {
            log::warn!(
                "Generator returned {} days for a {}-day trip",
                generated.itinerary.len(),
                requested_days
            );
        }

        let mut days: Vec<DayPlan> = generated
            .itinerary
            .into_iter()
            .chain(std::iter::repeat_with(GeneratedDay::default))
            .take(requested_days)
            .zip(1..)
            .map(|(day, index)| DayPlan::complete(day, index))
            .collect();

        let normalizer = BudgetNormalizer::new(self.config.min_daily_cost);
        let total_cost = normalizer.normalize_days(&mut days, request.budget);

        let summary = generated
            .summary
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("A {}-day trip to {}", request.days, request.destination));

        Itinerary {
            summary,
            total_cost,
            city_coordinates: Some(coordinates),
            hotels: generated.hotels.into_iter().map(HotelOption::from).collect(),
            itinerary: days,
        }
    }
}

pub fn build_prompt(request: &TripRequest, min_daily_cost: i64) -> String {
    format!(
        r#"
You are a travel planning expert.
Create a {days}-day itinerary for {city} with a total budget of ₹{budget}.
Travel preferences: {preferences}.

Output ONLY valid JSON in this format:
{{
  "summary": "",
  "totalCost": 0,
  "hotels": [
    {{"name":"","pricePerNight":0,"description":"","rating":0,"distanceFromCenter":""}}
  ],
  "itinerary": [
    {{
      "day":1,
      "dailyCost":0,
      "morning":{{"activity":"","cost":0}},
      "afternoon":{{"activity":"","cost":0}},
      "evening":{{"activity":"","cost":0}},
      "dining":{{"restaurant":"","cuisine":"","cost":0}},
      "hotel":{{"name":"","price":0}}
    }}
  ]
}}

Guidelines:
- Allocate all costs within the total budget ₹{budget}.
- Daily activities, dining, hotels must fit realistic budget.
- Use budget-friendly options if budget is low.
- Minimum dailyCost per day: ₹{min_daily_cost}.
- Include 2-3 hotels with different price ranges.
- Use ₹ for all costs.
"#,
        days = request.days,
        city = request.destination,
        budget = request.budget,
        preferences = request.preferences_or_default(),
        min_daily_cost = min_daily_cost,
    )
}

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::itinerary::GenerationOutcome;
use crate::models::trip::TripRequestBody;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::template_itinerary;

/*
    POST /generate
*/
pub async fn generate(
    generator: web::Data<ItineraryGenerator>,
    body: web::Bytes,
) -> impl Responder {
    let outcome = match serde_json::from_slice::<TripRequestBody>(&body) {
        Ok(request) => generator.generate_outcome(request).await,
        Err(err) => {
            log::warn!("Rejected unreadable /generate body: {}", err);
            GenerationOutcome::Degraded {
                itinerary: template_itinerary::placeholder(0),
                reason: format!("Invalid request body: {}", err),
            }
        }
    };

    // Degraded results are still a 200; the `_fallback` flag carries the failure
    HttpResponse::Ok().json(outcome)
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(json!({ "error": "Method not allowed" }))
}

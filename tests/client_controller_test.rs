mod common;

use actix_web::{web, App, HttpResponse, HttpServer};
use std::time::Duration;

use trip_planner_api::client::{
    form::REQUIRED_FIELDS_MESSAGE, FormController, PlannerClient, TripForm, TripSource,
};
use trip_planner_api::models::itinerary::{Coordinates, DEFAULT_COORDINATES};

use common::{canned_itinerary, TestApp, PARIS};

fn form(city: &str, budget: &str, days: &str) -> TripForm {
    TripForm {
        city: city.to_string(),
        budget: budget.to_string(),
        days: days.to_string(),
        preferences: "food".to_string(),
    }
}

/// Serve `test_app` on an ephemeral port and return its base URL.
fn spawn_backend(test_app: TestApp) -> String {
    let server = HttpServer::new(move || test_app.create_app())
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];

    actix_rt::spawn(server.run());
    format!("http://{}", addr)
}

/// A backend whose `/generate` always answers 500.
fn spawn_failing_backend() -> String {
    let server = HttpServer::new(|| {
        App::new().route(
            "/generate",
            web::post().to(|| async { HttpResponse::InternalServerError().finish() }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];

    actix_rt::spawn(server.run());
    format!("http://{}", addr)
}

fn client(base_url: &str) -> PlannerClient {
    PlannerClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[actix_rt::test]
async fn test_unreachable_backend_renders_local_itinerary() {
    let mut controller = FormController::bootstrap(client("http://127.0.0.1:1")).await;
    assert_eq!(controller.map().access_token(), "");

    let trip = controller
        .submit(&form("Paris", "5000", "5"))
        .await
        .expect("a local itinerary is always rendered");

    assert!(matches!(trip.source, TripSource::LocalFallback(_)));
    assert_eq!(trip.itinerary.itinerary.len(), 5);
    assert!(trip.itinerary.summary.contains("Paris"));
    assert_eq!(trip.html.matches("<pre ").count(), 5);
    assert!(controller.banner().visible_message().is_some());
    assert!(controller.debug_info().is_some());
    assert!(controller.map().marker().is_none());
}

#[actix_rt::test]
async fn test_server_error_status_renders_local_itinerary() {
    let base_url = spawn_failing_backend();
    let mut controller = FormController::bootstrap(client(&base_url)).await;

    let trip = controller
        .submit(&form("Paris", "3000", "3"))
        .await
        .expect("a local itinerary is always rendered");

    let message = "Failed to generate itinerary! (status 500)";
    assert_eq!(trip.source, TripSource::LocalFallback(message.to_string()));
    assert_eq!(trip.itinerary.itinerary.len(), 3);
    assert_eq!(trip.itinerary.total_cost, 3000);
    assert_eq!(trip.html.matches("<pre ").count(), 3);
    assert_eq!(controller.banner().visible_message(), Some(message));
    assert_eq!(controller.debug_info(), Some(message));
}

#[actix_rt::test]
async fn test_negative_days_are_rejected_locally() {
    let mut controller = FormController::bootstrap(client("http://127.0.0.1:1")).await;

    assert!(controller.submit(&form("Paris", "5000", "-3")).await.is_none());
    assert_eq!(controller.banner().visible_message(), Some(REQUIRED_FIELDS_MESSAGE));
}

#[actix_rt::test]
async fn test_missing_fields_show_banner_without_request() {
    let mut controller = FormController::bootstrap(client("http://127.0.0.1:1")).await;

    let trip = controller.submit(&form("Paris", "", "3")).await;

    assert!(trip.is_none());
    assert_eq!(controller.banner().visible_message(), Some(REQUIRED_FIELDS_MESSAGE));
    assert!(controller.debug_info().is_none());
}

#[actix_rt::test]
async fn test_generated_itinerary_places_single_marker() {
    let base_url = spawn_backend(TestApp::new(Ok(canned_itinerary(2))));
    let mut controller = FormController::bootstrap(client(&base_url)).await;
    assert_eq!(controller.map().access_token(), "pk.test-token-1234");

    let trip = controller
        .submit(&form("Paris", "2000", "2"))
        .await
        .unwrap();
    assert_eq!(trip.source, TripSource::Generated);
    assert_eq!(trip.itinerary.total_cost, 1000);
    assert!(trip.html.contains("Art and food in Paris"));

    let paris = Coordinates::from(PARIS);
    assert_eq!(controller.map().center(), paris);
    assert_eq!(controller.map().marker().map(|m| m.position), Some(paris));

    // a second trip moves the one marker instead of adding another
    controller
        .submit(&form("Paris", "3000", "3"))
        .await
        .unwrap();
    assert_eq!(controller.map().marker().map(|m| m.position), Some(paris));
    assert!(controller.banner().visible_message().is_none());
}

#[actix_rt::test]
async fn test_server_fallback_is_rendered_with_debug_info() {
    let base_url = spawn_backend(TestApp::new(Ok(canned_itinerary(10))));
    let mut controller = FormController::bootstrap(client(&base_url)).await;

    let trip = controller
        .submit(&form("Goa", "2500", "10"))
        .await
        .unwrap();

    let reason = "Budget too low! Minimum ₹5000 needed for 10 days";
    assert_eq!(trip.source, TripSource::ServerFallback(reason.to_string()));
    assert_eq!(controller.debug_info(), Some(reason));
    assert!(trip.itinerary.itinerary.is_empty());
    assert_eq!(trip.itinerary.total_cost, 2500);
    assert_eq!(
        controller.map().marker().map(|m| m.position),
        Some(DEFAULT_COORDINATES)
    );
}

mod common;

use actix_web::test;
use serde_json::json;

use common::{canned_itinerary, TestApp, PARIS};

#[actix_rt::test]
async fn test_generate_returns_normalized_itinerary() {
    let test_app = TestApp::new(Ok(canned_itinerary(3)));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({
            "city": "Paris",
            "budget": 3000,
            "days": 3,
            "preferences": "museums"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.get("_fallback").is_none());
    assert_eq!(body["summary"], "Art and food in Paris");
    assert_eq!(body["cityCoordinates"], json!([PARIS.0, PARIS.1]));
    assert_eq!(body["hotels"][0]["pricePerNight"], 100);

    let days = body["itinerary"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day["day"], i + 1);
        // 300 planned, raised to the 500 floor with the shortfall on dining
        assert_eq!(day["dailyCost"], 500);
        assert_eq!(day["dining"]["cost"], 250);
    }
    assert_eq!(body["totalCost"], 1500);
}

#[actix_rt::test]
async fn test_generate_accepts_numbers_as_strings() {
    let test_app = TestApp::new(Ok(canned_itinerary(2)));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({"city": "Paris", "budget": "2000", "days": "2"}))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.get("_fallback").is_none());
    assert_eq!(body["itinerary"].as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_budget_too_low_is_degraded() {
    let test_app = TestApp::new(Ok(canned_itinerary(10)));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({"city": "Goa", "budget": 2500, "days": 10}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["_fallback"], true);
    assert_eq!(body["_error"], "Budget too low! Minimum ₹5000 needed for 10 days");
    assert_eq!(body["summary"], "Your budget-friendly travel plan will appear here.");
    assert_eq!(body["totalCost"], 2500);
    assert_eq!(body["hotels"], json!([]));
    assert_eq!(body["itinerary"], json!([]));
    assert_eq!(body["cityCoordinates"], json!([77.209, 28.6139]));
}

#[actix_rt::test]
async fn test_missing_fields_are_degraded() {
    let test_app = TestApp::new(Ok(canned_itinerary(1)));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({"city": "Paris"}))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["_fallback"], true);
    assert_eq!(body["totalCost"], 0);
}

#[actix_rt::test]
async fn test_generator_failure_is_degraded() {
    let test_app = TestApp::new(Err(429));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({"city": "Paris", "budget": 5000, "days": 5}))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["_fallback"], true);
    assert!(body["_error"].as_str().unwrap().contains("429"));
    assert_eq!(body["totalCost"], 5000);
}

#[actix_rt::test]
async fn test_invalid_body_is_degraded() {
    let test_app = TestApp::new(Ok(canned_itinerary(1)));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["_fallback"], true);
    assert!(body["_error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[actix_rt::test]
async fn test_generate_rejects_other_methods() {
    let test_app = TestApp::new(Ok(canned_itinerary(1)));
    let app = test::init_service(test_app.create_app()).await;

    for req in [
        test::TestRequest::get().uri("/generate").to_request(),
        test::TestRequest::put().uri("/generate").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 405);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Method not allowed");
    }
}

#[actix_rt::test]
async fn test_netlify_function_path_is_served() {
    let test_app = TestApp::new(Ok(canned_itinerary(1)));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/.netlify/functions/generate")
        .set_json(&json!({"city": "Paris", "budget": 800, "days": 1}))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.get("_fallback").is_none());
    assert_eq!(body["totalCost"], 500);
}

#[actix_rt::test]
async fn test_cors_allows_any_origin() {
    let test_app = TestApp::new(Ok(canned_itinerary(1)));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(("Origin", "http://localhost:3000"))
        .set_json(&json!({"city": "Paris", "budget": 800, "days": 1}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

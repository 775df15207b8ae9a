use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::AppConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
    timestamp: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /health
*/
pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    let mapbox_result = check_secret("MAPBOX_ACCESS_TOKEN", config.mapbox_token.as_deref());
    health
        .services
        .insert("mapbox".to_string(), mapbox_result.clone());

    let gemini_result = check_secret("GOOGLE_AI_API_KEY", config.gemini_api_key.as_deref());
    health
        .services
        .insert("gemini".to_string(), gemini_result.clone());

    // Both collaborators are optional, so a missing secret only degrades
    if mapbox_result.status != "ok" || gemini_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_secret(name: &str, value: Option<&str>) -> ServiceStatus {
    match value {
        Some(key) => {
            let maskable =
                key.len() > 8 && key.is_char_boundary(4) && key.is_char_boundary(key.len() - 4);
            let masked_key = if maskable {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("{} configured ({})", name, masked_key)),
            }
        }
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("{} not configured", name)),
        },
    }
}

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: Option<String>,
}

/*
    GET /get-mapbox-token
*/
pub async fn get_mapbox_token(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(TokenResponse {
        token: config.mapbox_token.clone(),
    })
}

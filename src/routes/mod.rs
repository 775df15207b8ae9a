use actix_web::web;

pub mod generate;
pub mod health;
pub mod map_token;

/// Register every route. Paths are also served under the
/// `/.netlify/functions` prefix the browser page was written against.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check));

    for prefix in ["", "/.netlify/functions"] {
        cfg.service(
            web::resource(format!("{}/generate", prefix))
                .route(web::post().to(generate::generate))
                .default_service(web::to(generate::method_not_allowed)),
        )
        .service(
            web::resource(format!("{}/get-mapbox-token", prefix))
                .route(web::get().to(map_token::get_mapbox_token)),
        );
    }
}

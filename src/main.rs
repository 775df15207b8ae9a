use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner_api::{
    config::AppConfig, routes, services::itinerary_generation_service::ItineraryGenerator,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    let config = AppConfig::from_env();
    let generator = ItineraryGenerator::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let generator = web::Data::new(generator);
    let app_config = web::Data::new(config.clone());

    println!("Attempting to bind to {}:{}", config.host, config.port);
    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .send_wildcard()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(app_config.clone())
            .app_data(generator.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

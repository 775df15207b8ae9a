use std::time::Duration;

use clap::Parser;
use env_logger::Env;

use trip_planner_api::client::{
    render::{render_html, render_text},
    FormController, PlannerClient, TripForm,
};

#[derive(Debug, Parser)]
#[command(name = "trip-cli")]
#[command(about = "Plan a budget trip against a running planner backend")]
struct Cli {
    #[arg(long, default_value = "")]
    city: String,

    /// Total budget in rupees.
    #[arg(long, default_value = "")]
    budget: String,

    #[arg(long, default_value = "")]
    days: String,

    #[arg(long, default_value = "")]
    preferences: String,

    #[arg(long, env = "TRIP_PLANNER_URL", default_value = "http://localhost:8080")]
    backend_url: String,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Print the HTML fragment instead of plain text.
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    let api = PlannerClient::new(&cli.backend_url, Duration::from_secs(cli.timeout_secs))?;
    let mut controller = FormController::bootstrap(api).await;

    let form = TripForm {
        city: cli.city,
        budget: cli.budget,
        days: cli.days,
        preferences: cli.preferences,
    };

    let Some(trip) = controller.submit(&form).await else {
        if let Some(message) = controller.banner().visible_message() {
            eprintln!("{}", message);
        }
        std::process::exit(1);
    };

    if cli.html {
        println!("{}", render_html(&trip.itinerary));
    } else {
        println!("{}", render_text(&trip.itinerary));
    }

    if let Some(marker) = controller.map().marker() {
        eprintln!(
            "Map marker at [{}, {}]",
            marker.position.longitude, marker.position.latitude
        );
    }
    if let Some(debug) = controller.debug_info() {
        eprintln!("Debug: {}", debug);
    }

    Ok(())
}

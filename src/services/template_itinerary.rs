//! Itineraries built from the trip parameters alone, with no collaborator
//! involved. The client renders [`synthesize`] when the backend cannot be
//! reached; the generation route answers with [`placeholder`] when it cannot
//! produce a real itinerary.

use crate::models::itinerary::{
    ActivitySlot, DayPlan, Dining, HotelOption, HotelStay, Itinerary, DEFAULT_COORDINATES,
};
use crate::models::trip::MAX_TRIP_DAYS;

pub const PLACEHOLDER_SUMMARY: &str = "Your budget-friendly travel plan will appear here.";

/// A complete, deterministic itinerary for `days` days in `destination`.
///
/// Each day spends floor(budget / days): a quarter on the hotel, a fifth each
/// on dining, morning and afternoon, and the remainder in the evening. No
/// coordinates are attached. At most [`MAX_TRIP_DAYS`] days are built.
pub fn synthesize(destination: &str, budget: i64, days: u32) -> Itinerary {
    let days = days.min(MAX_TRIP_DAYS);
    let destination = match destination.trim() {
        "" => "your destination",
        trimmed => trimmed,
    };
    let per_day = if days == 0 { 0 } else { budget.max(0) / i64::from(days) };

    let hotel = per_day / 4;
    let dining = per_day / 5;
    let morning = per_day / 5;
    let afternoon = per_day / 5;
    let evening = per_day - hotel - dining - morning - afternoon;

    let itinerary: Vec<DayPlan> = (1..=days)
        .map(|day| DayPlan {
            day,
            daily_cost: per_day,
            morning: ActivitySlot {
                activity: format!("Explore the old town of {}", destination),
                cost: morning,
            },
            afternoon: ActivitySlot {
                activity: format!("Visit popular sights in {}", destination),
                cost: afternoon,
            },
            evening: ActivitySlot {
                activity: format!("Stroll through a local market in {}", destination),
                cost: evening,
            },
            dining: Dining {
                restaurant: "Local eatery".to_string(),
                cuisine: "Local cuisine".to_string(),
                cost: dining,
            },
            hotel: HotelStay {
                name: format!("{} Budget Stay", destination),
                price: hotel,
            },
        })
        .collect();

    let hotels = vec![
        hotel_option(destination, "Comfort Inn", per_day / 2, 4.2, "1 km"),
        hotel_option(destination, "Budget Stay", per_day / 4, 3.8, "2 km"),
        hotel_option(destination, "Backpackers Hostel", per_day / 8, 3.5, "3 km"),
    ];

    let total_cost = itinerary.iter().map(|day| day.daily_cost).sum();

    Itinerary {
        summary: format!(
            "A {}-day budget trip to {} planned offline from your ₹{} budget.",
            days, destination, budget
        ),
        total_cost,
        city_coordinates: None,
        hotels,
        itinerary,
    }
}

/// The empty itinerary sent alongside a degraded generation result.
pub fn placeholder(total_cost: i64) -> Itinerary {
    Itinerary {
        summary: PLACEHOLDER_SUMMARY.to_string(),
        total_cost,
        city_coordinates: Some(DEFAULT_COORDINATES),
        hotels: Vec::new(),
        itinerary: Vec::new(),
    }
}

fn hotel_option(
    destination: &str,
    kind: &str,
    price: i64,
    rating: f64,
    distance: &str,
) -> HotelOption {
    HotelOption {
        name: format!("{} {}", destination, kind),
        price_per_night: price,
        description: format!("{} near the centre of {}", kind, destination),
        rating,
        distance_from_center: distance.to_string(),
    }
}

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Used whenever the destination cannot be geocoded (New Delhi).
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    longitude: 77.209,
    latitude: 28.6139,
};

/// A map position. Serialized as `[longitude, latitude]`, the order map
/// widgets and the geocoder both use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl From<(f64, f64)> for Coordinates {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self { longitude, latitude }
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(coordinates: Coordinates) -> Self {
        (coordinates.longitude, coordinates.latitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySlot {
    pub activity: String,
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dining {
    pub restaurant: String,
    pub cuisine: String,
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelStay {
    pub name: String,
    pub price: i64,
}

/// One day of the trip. Always fully populated; see `DayPlan::complete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub daily_cost: i64,
    pub morning: ActivitySlot,
    pub afternoon: ActivitySlot,
    pub evening: ActivitySlot,
    pub dining: Dining,
    pub hotel: HotelStay,
}

impl DayPlan {
    /// Sum of the five line items, independent of `daily_cost`. Saturates
    /// instead of overflowing.
    pub fn sub_cost_total(&self) -> i64 {
        [
            self.morning.cost,
            self.afternoon.cost,
            self.evening.cost,
            self.dining.cost,
            self.hotel.price,
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOption {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::integer_or_zero")]
    pub price_per_night: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::float_or_zero")]
    pub rating: f64,
    #[serde(default)]
    pub distance_from_center: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::integer_or_zero")]
    pub total_cost: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_coordinates: Option<Coordinates>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub hotels: Vec<HotelOption>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub itinerary: Vec<DayPlan>,
}

impl Itinerary {
    pub fn day_cost_total(&self) -> i64 {
        self.itinerary.iter().map(|day| day.daily_cost).sum()
    }
}

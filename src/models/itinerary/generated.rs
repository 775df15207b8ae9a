//! The itinerary as the text generator hands it back, before any clean-up.
//!
//! Every field is optional because the model does not always honour the
//! requested shape. `transforms` turns these into complete `DayPlan`s.

use serde::Deserialize;

use crate::models::lenient;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItinerary {
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub hotels: Vec<GeneratedHotel>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub itinerary: Vec<GeneratedDay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedHotel {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub price_per_night: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub distance_from_center: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedDay {
    #[serde(default)]
    pub morning: Option<GeneratedActivity>,
    #[serde(default)]
    pub afternoon: Option<GeneratedActivity>,
    #[serde(default)]
    pub evening: Option<GeneratedActivity>,
    #[serde(default)]
    pub dining: Option<GeneratedDining>,
    #[serde(default)]
    pub hotel: Option<GeneratedHotelStay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedActivity {
    #[serde(default, deserialize_with = "lenient::string")]
    pub activity: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub cost: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedDining {
    #[serde(default, deserialize_with = "lenient::string")]
    pub restaurant: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub cost: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedHotelStay {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub price: Option<i64>,
}

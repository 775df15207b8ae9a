use super::{
    base::{ActivitySlot, DayPlan, Dining, HotelOption, HotelStay},
    generated::{GeneratedActivity, GeneratedDay, GeneratedHotel},
};

const MORNING_PLACEHOLDER: &str = "Explore local area";
const AFTERNOON_PLACEHOLDER: &str = "Sightseeing";
const EVENING_PLACEHOLDER: &str = "Evening activity";
const RESTAURANT_PLACEHOLDER: &str = "Local eatery";
const CUISINE_PLACEHOLDER: &str = "Local cuisine";
const HOTEL_PLACEHOLDER: &str = "Budget hotel";

/// Ceiling for any single generated cost, in rupees.
pub const MAX_LINE_ITEM_COST: i64 = 1_000_000_000_000;

impl DayPlan {
    /// Build a fully populated day from whatever the generator produced.
    ///
    /// Missing slots get neutral labels at zero cost, costs are clamped to
    /// `0..=MAX_LINE_ITEM_COST`, and `daily_cost` is the sum of the five line
    /// items.
    /// `day` is the 1-based position in the trip.
    pub fn complete(generated: GeneratedDay, day: u32) -> Self {
        let dining = generated.dining.unwrap_or_default();
        let hotel = generated.hotel.unwrap_or_default();

        let mut plan = Self {
            day,
            daily_cost: 0,
            morning: slot(generated.morning, MORNING_PLACEHOLDER),
            afternoon: slot(generated.afternoon, AFTERNOON_PLACEHOLDER),
            evening: slot(generated.evening, EVENING_PLACEHOLDER),
            dining: Dining {
                restaurant: label(dining.restaurant, RESTAURANT_PLACEHOLDER),
                cuisine: label(dining.cuisine, CUISINE_PLACEHOLDER),
                cost: non_negative(dining.cost),
            },
            hotel: HotelStay {
                name: label(hotel.name, HOTEL_PLACEHOLDER),
                price: non_negative(hotel.price),
            },
        };
        plan.daily_cost = plan.sub_cost_total();
        plan
    }
}

impl From<GeneratedHotel> for HotelOption {
    fn from(hotel: GeneratedHotel) -> Self {
        Self {
            name: hotel.name.unwrap_or_default(),
            price_per_night: non_negative(hotel.price_per_night),
            description: hotel.description.unwrap_or_default(),
            rating: hotel.rating.unwrap_or(0.0),
            distance_from_center: hotel.distance_from_center.unwrap_or_default(),
        }
    }
}

fn slot(generated: Option<GeneratedActivity>, placeholder: &str) -> ActivitySlot {
    let generated = generated.unwrap_or_default();
    ActivitySlot {
        activity: label(generated.activity, placeholder),
        cost: non_negative(generated.cost),
    }
}

fn label(value: Option<String>, placeholder: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

fn non_negative(cost: Option<i64>) -> i64 {
    cost.unwrap_or(0).clamp(0, MAX_LINE_ITEM_COST)
}

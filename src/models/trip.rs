use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::lenient;

/// Lowest spend, in rupees, any single day of a trip may plan for.
pub const MIN_DAILY_COST: i64 = 500;

/// Longest trip that can be planned in one request.
pub const MAX_TRIP_DAYS: u32 = 30;

/// Body of `POST /generate` exactly as the form sends it.
///
/// Everything is optional here; [`TripRequest::try_from`] decides what is
/// acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripRequestBody {
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub budget: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub days: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferences: Option<String>,
}

/// A validated trip request.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub destination: String,
    pub budget: i64,
    pub days: u32,
    pub preferences: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TripValidationError {
    MissingDestination,
    MissingBudgetOrDays,
    BudgetTooLow { minimum: i64, days: u32 },
    TooManyDays { maximum: u32 },
}

impl fmt::Display for TripValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripValidationError::MissingDestination => write!(f, "Missing destination"),
            TripValidationError::MissingBudgetOrDays => write!(f, "Missing budget or days"),
            TripValidationError::BudgetTooLow { minimum, days } => write!(
                f,
                "Budget too low! Minimum ₹{} needed for {} days",
                minimum, days
            ),
            TripValidationError::TooManyDays { maximum } => {
                write!(f, "Trips can be at most {} days", maximum)
            }
        }
    }
}

impl std::error::Error for TripValidationError {}

impl TripRequest {
    /// Smallest budget that can cover `days` at [`MIN_DAILY_COST`].
    pub fn minimum_budget(days: u32) -> i64 {
        i64::from(days) * MIN_DAILY_COST
    }

    /// Even share of the budget available to each day, rounded down.
    pub fn daily_cap(&self) -> i64 {
        self.budget / i64::from(self.days.max(1))
    }

    pub fn preferences_or_default(&self) -> &str {
        self.preferences
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or("sightseeing, food, culture")
    }
}

impl TryFrom<TripRequestBody> for TripRequest {
    type Error = TripValidationError;

    fn try_from(body: TripRequestBody) -> Result<Self, Self::Error> {
        let (budget, days) = match (body.budget, body.days) {
            (Some(budget), Some(days)) if budget > 0 && days > 0 => (budget, days),
            _ => return Err(TripValidationError::MissingBudgetOrDays),
        };
        let days = u32::try_from(days)
            .ok()
            .filter(|days| *days <= MAX_TRIP_DAYS)
            .ok_or(TripValidationError::TooManyDays {
                maximum: MAX_TRIP_DAYS,
            })?;

        let destination = body
            .city
            .map(|city| city.trim().to_string())
            .filter(|city| !city.is_empty())
            .ok_or(TripValidationError::MissingDestination)?;

        let minimum = Self::minimum_budget(days);
        if budget < minimum {
            return Err(TripValidationError::BudgetTooLow { minimum, days });
        }

        Ok(Self {
            destination,
            budget,
            days,
            preferences: body.preferences,
        })
    }
}

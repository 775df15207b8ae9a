use crate::models::trip::{TripRequestBody, MAX_TRIP_DAYS};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all required fields!";
pub const TOO_MANY_DAYS_MESSAGE: &str = "Trips can be at most 30 days!";

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct TripForm {
    pub city: String,
    pub budget: String,
    pub days: String,
    pub preferences: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormError(pub &'static str);

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FormError {}

impl TripForm {
    /// The request body to send, or the message to show if the destination,
    /// budget or days are missing, not positive numbers, or the trip is too
    /// long.
    pub fn submission(&self) -> Result<TripRequestBody, FormError> {
        let city = self.city.trim();
        let budget = parse_leading_int(&self.budget).filter(|n| *n > 0);
        let days = parse_leading_int(&self.days).filter(|n| *n > 0);

        match (city.is_empty(), budget, days) {
            (false, Some(_), Some(days)) if days > i64::from(MAX_TRIP_DAYS) => {
                Err(FormError(TOO_MANY_DAYS_MESSAGE))
            }
            (false, Some(budget), Some(days)) => Ok(TripRequestBody {
                city: Some(city.to_string()),
                budget: Some(budget),
                days: Some(days),
                preferences: Some(self.preferences.trim().to_string()),
            }),
            _ => Err(FormError(REQUIRED_FIELDS_MESSAGE)),
        }
    }
}

/// Integer prefix of `text` ("12 days" is 12); `None` if it does not start
/// with a number.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

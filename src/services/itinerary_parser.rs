//! Reads generator output into a [`GeneratedItinerary`].
//!
//! JSON is the expected format. When the model ignores the instruction and
//! answers in prose, a line-based reader recovers what it can:
//!
//! ```text
//! Summary: Three relaxed days in Jaipur
//! Day 1
//! Morning: Amber Fort - ₹200
//! Dining: Rawat Kachori (Rajasthani) ₹300
//! Hotel: Pearl Palace ₹1,500
//! ```

use regex::Regex;
use std::{fmt, sync::LazyLock};

use crate::models::itinerary::generated::{
    GeneratedActivity, GeneratedDay, GeneratedDining, GeneratedHotelStay, GeneratedItinerary,
};
use crate::models::lenient::leading_number;

static DAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^day\s*(\d+)\b").expect("valid day header pattern"));
static SUMMARY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:trip\s+)?summary\s*[:\-]\s*(.+)$").expect("valid summary pattern")
});
static SLOT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(morning|afternoon|evening|night|dining|dinner|lunch|food|hotel|stay|accommodation)",
        r"\s*[:\-]\s*(.+)$"
    ))
    .expect("valid slot pattern")
});
static COST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:(?:₹|\brs\.?|\binr)\s*([\d,]+(?:\.\d+)?)",
        r"|[\-–(]\s*([\d,]+(?:\.\d+)?)\s*\)?\s*$)"
    ))
    .expect("valid cost pattern")
});
static CUISINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*[A-Za-z][^)]*)\)").expect("valid cuisine pattern"));

#[derive(Debug)]
pub enum ParseError {
    Empty,
    Unparsable(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Generated itinerary text was blank"),
            ParseError::Unparsable(msg) => {
                write!(f, "Could not parse generated itinerary: {}", msg)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse generator output, preferring JSON and falling back to prose.
pub fn parse_generated_text(text: &str) -> Result<GeneratedItinerary, ParseError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(ParseError::Empty);
    }

    match serde_json::from_str::<GeneratedItinerary>(body) {
        Ok(itinerary) => Ok(itinerary),
        Err(json_error) => {
            log::warn!("Generated text is not JSON ({}), trying line-based parse", json_error);
            parse_lines(body).ok_or_else(|| ParseError::Unparsable(json_error.to_string()))
        }
    }
}

/// Drop a surrounding ```` ```json ```` fence if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Line-based reader. `None` when no day could be recovered.
fn parse_lines(text: &str) -> Option<GeneratedItinerary> {
    let mut itinerary = GeneratedItinerary::default();
    let mut current: Option<GeneratedDay> = None;

    for raw_line in text.lines() {
        let line = raw_line
            .trim()
            .trim_start_matches(|c: char| matches!(c, '*' | '#' | '-' | '•' | '>'))
            .trim()
            .replace("**", "");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if DAY_HEADER.is_match(line) {
            if let Some(day) = current.take() {
                itinerary.itinerary.push(day);
            }
            current = Some(GeneratedDay::default());
            continue;
        }

        if let Some(caps) = SUMMARY_LINE.captures(line) {
            itinerary.summary = Some(caps[1].trim().to_string());
            continue;
        }

        let (Some(day), Some(caps)) = (current.as_mut(), SLOT_LINE.captures(line)) else {
            continue;
        };
        let (label, cost) = split_cost(&caps[2]);

        match caps[1].to_lowercase().as_str() {
            "morning" => day.morning = Some(activity(label, cost)),
            "afternoon" => day.afternoon = Some(activity(label, cost)),
            "evening" | "night" => day.evening = Some(activity(label, cost)),
            "dining" | "dinner" | "lunch" | "food" => {
                let cuisine = CUISINE.captures(&label).map(|c| c[1].trim().to_string());
                let restaurant = CUISINE.replace(&label, "").trim().to_string();
                day.dining = Some(GeneratedDining {
                    restaurant: Some(restaurant),
                    cuisine,
                    cost,
                });
            }
            _ => {
                day.hotel = Some(GeneratedHotelStay {
                    name: Some(label),
                    price: cost,
                })
            }
        }
    }

    if let Some(day) = current.take() {
        itinerary.itinerary.push(day);
    }

    if itinerary.itinerary.is_empty() {
        None
    } else {
        Some(itinerary)
    }
}

/// Split "Amber Fort - ₹200" into ("Amber Fort", Some(200)).
fn split_cost(text: &str) -> (String, Option<i64>) {
    let Some(found) = COST.find_iter(text).last() else {
        return (text.trim().to_string(), None);
    };
    let cost = leading_number(found.as_str()).map(|n| n.abs() as i64);
    let mut label = String::with_capacity(text.len());
    label.push_str(&text[..found.start()]);
    label.push_str(&text[found.end()..]);
    let label = label
        .trim()
        .replace("()", "")
        .trim()
        .trim_end_matches(|c: char| matches!(c, '-' | '–' | ',' | ':' | '|'))
        .trim()
        .to_string();
    (label, cost)
}

fn activity(label: String, cost: Option<i64>) -> GeneratedActivity {
    GeneratedActivity {
        activity: Some(label),
        cost,
    }
}

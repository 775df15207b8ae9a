use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod base;
pub mod generated;
pub mod transforms;

pub use base::{
    ActivitySlot, Coordinates, DayPlan, Dining, HotelOption, HotelStay, Itinerary,
    DEFAULT_COORDINATES,
};

/// Result of one generation request.
///
/// On the wire both variants are an itinerary object; `Degraded` adds
/// `"_fallback": true` and `"_error"`. The HTTP status is 200 either way, so
/// callers must look at the variant (or the flag) to tell them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Ok(Itinerary),
    Degraded { itinerary: Itinerary, reason: String },
}

impl GenerationOutcome {
    pub fn itinerary(&self) -> &Itinerary {
        match self {
            GenerationOutcome::Ok(itinerary) => itinerary,
            GenerationOutcome::Degraded { itinerary, .. } => itinerary,
        }
    }

    pub fn into_itinerary(self) -> Itinerary {
        match self {
            GenerationOutcome::Ok(itinerary) => itinerary,
            GenerationOutcome::Degraded { itinerary, .. } => itinerary,
        }
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Ok(_) => None,
            GenerationOutcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, GenerationOutcome::Degraded { .. })
    }
}

#[derive(Serialize)]
struct OutcomeWire<'a> {
    #[serde(flatten)]
    itinerary: &'a Itinerary,
    #[serde(rename = "_fallback", skip_serializing_if = "Option::is_none")]
    fallback: Option<bool>,
    #[serde(rename = "_error", skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Deserialize)]
struct OwnedOutcomeWire {
    #[serde(flatten)]
    itinerary: Itinerary,
    #[serde(rename = "_fallback", default)]
    fallback: bool,
    #[serde(rename = "_error", default)]
    error: Option<String>,
}

impl Serialize for GenerationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            GenerationOutcome::Ok(itinerary) => OutcomeWire {
                itinerary,
                fallback: None,
                error: None,
            },
            GenerationOutcome::Degraded { itinerary, reason } => OutcomeWire {
                itinerary,
                fallback: Some(true),
                error: Some(reason),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GenerationOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = OwnedOutcomeWire::deserialize(deserializer)?;
        Ok(if wire.fallback {
            GenerationOutcome::Degraded {
                itinerary: wire.itinerary,
                reason: wire.error.unwrap_or_else(|| "Unknown error".to_string()),
            }
        } else {
            GenerationOutcome::Ok(wire.itinerary)
        })
    }
}

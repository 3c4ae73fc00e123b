//! Structured fields extracted from a free-text flight query.
//!
//! [`ParsedIntent`] models the JSON body returned by the backend
//! `parse-query` endpoint. Every optional field carries a serde default so a
//! sparse response deserializes into the same shape a fully-populated one
//! does; the resolver fills the remaining gaps.

use serde::{Deserialize, Serialize};

/// Requested departure window, as extracted from the query text.
///
/// `Any` means the query named no preference; resolution replaces it with a
/// concrete [`crate::DayPart`] derived from the current wall-clock hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
    #[default]
    Any,
}

/// Cabin class filter. Defaults to economy when the query names none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }
}

/// Result ordering. `Score` is the backend's overall ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Score,
    Price,
    Duration,
    Departure,
}

impl SortBy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Score => "score",
            SortBy::Price => "price",
            SortBy::Duration => "duration",
            SortBy::Departure => "departure",
        }
    }
}

/// Stop-count filter. `Any` is omitted from the results URL entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopsFilter {
    #[default]
    Any,
    Nonstop,
    One,
    TwoPlus,
}

impl StopsFilter {
    /// Query-string value, or `None` when the filter places no constraint.
    #[must_use]
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            StopsFilter::Any => None,
            StopsFilter::Nonstop => Some("0"),
            StopsFilter::One => Some("1"),
            StopsFilter::TwoPlus => Some("2"),
        }
    }
}

/// Aircraft-size filter. `Any` is omitted from the results URL entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftSize {
    #[default]
    Any,
    Small,
    Medium,
    Large,
}

impl AircraftSize {
    /// Query-string value, or `None` when the filter places no constraint.
    #[must_use]
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            AircraftSize::Any => None,
            AircraftSize::Small => Some("small"),
            AircraftSize::Medium => Some("medium"),
            AircraftSize::Large => Some("large"),
        }
    }
}

/// Airline-alliance filter. `Any` is omitted from the results URL entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alliance {
    #[default]
    Any,
    Star,
    Oneworld,
    Skyteam,
}

impl Alliance {
    /// Query-string value, or `None` when the filter places no constraint.
    #[must_use]
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Alliance::Any => None,
            Alliance::Star => Some("star"),
            Alliance::Oneworld => Some("oneworld"),
            Alliance::Skyteam => Some("skyteam"),
        }
    }
}

fn default_passengers() -> u32 {
    1
}

/// Fields the backend query parser extracted from one free-text submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedIntent {
    /// Whether the query named a destination at all. A parse without one is
    /// unusable; resolution rejects it before consulting anything else.
    pub has_destination: bool,
    /// IATA code of the destination airport, empty when unresolved.
    #[serde(default)]
    pub destination_code: String,
    #[serde(default)]
    pub destination_city: Option<String>,
    /// IATA code of the departure airport, empty when the query named none.
    #[serde(default)]
    pub departure_code: String,
    #[serde(default)]
    pub departure_city: Option<String>,
    /// Travel date as an ISO `YYYY-MM-DD` string, when the query named one.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time_preference: TimeOfDay,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub cabin_class: CabinClass,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub stops: StopsFilter,
    #[serde(default)]
    pub aircraft_size: AircraftSize,
    #[serde(default)]
    pub alliance: Alliance,
    /// Upper price bound in whole currency units; `None` means no cap.
    #[serde(default)]
    pub max_price: Option<u32>,
    /// Preferred airline IATA codes, in the order the query mentioned them.
    #[serde(default)]
    pub airlines: Vec<String>,
}

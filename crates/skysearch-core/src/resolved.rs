//! Fully-concrete search parameters, ready for URL encoding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::intent::{AircraftSize, Alliance, CabinClass, SortBy, StopsFilter};

/// A concrete departure window. Unlike [`crate::TimeOfDay`] there is no
/// `any` variant: resolution always lands on one of these four buckets, so
/// downstream code never has to handle an unconstrained value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
            DayPart::Night => "night",
        }
    }
}

/// Output of the parameter resolver: every field populated, origin and
/// destination non-empty IATA codes, date a valid calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedParams {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub time_of_day: DayPart,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub sort_by: SortBy,
    pub stops: StopsFilter,
    pub aircraft_size: AircraftSize,
    pub alliance: Alliance,
    pub max_price: Option<u32>,
    pub airlines: Vec<String>,
}

//! Human-readable confirmation line for a resolved search.

use skysearch_core::{AircraftSize, DayPart, ResolvedParams, StopsFilter};

fn day_part_label(part: DayPart) -> &'static str {
    match part {
        DayPart::Morning => "Morning",
        DayPart::Afternoon => "Afternoon",
        DayPart::Evening => "Evening",
        DayPart::Night => "Night",
    }
}

fn stops_label(stops: StopsFilter) -> Option<&'static str> {
    match stops {
        StopsFilter::Any => None,
        StopsFilter::Nonstop => Some("non-stop"),
        StopsFilter::One => Some("one-stop"),
        StopsFilter::TwoPlus => Some("multi-stop"),
    }
}

fn aircraft_label(size: AircraftSize) -> Option<&'static str> {
    match size {
        AircraftSize::Any => None,
        AircraftSize::Small => Some("small-aircraft"),
        AircraftSize::Medium => Some("medium-aircraft"),
        AircraftSize::Large => Some("large-aircraft"),
    }
}

/// Builds the confirmation line shown back to the user before navigation.
///
/// Phrase order is fixed: time-of-day, stop descriptor, aircraft descriptor,
/// "flights", route, date, price cap, airline list. Unconstrained filters
/// contribute nothing.
#[must_use]
pub fn confirmation_summary(params: &ResolvedParams) -> String {
    let mut head = vec![day_part_label(params.time_of_day)];
    if let Some(stops) = stops_label(params.stops) {
        head.push(stops);
    }
    if let Some(aircraft) = aircraft_label(params.aircraft_size) {
        head.push(aircraft);
    }
    head.push("flights");

    let mut line = format!(
        "{} from {} to {} on {}",
        head.join(" "),
        params.origin,
        params.destination,
        params.date.format("%Y-%m-%d")
    );
    if let Some(cap) = params.max_price {
        line.push_str(&format!(" under ${cap}"));
    }
    if !params.airlines.is_empty() {
        line.push_str(&format!(", preferring {}", params.airlines.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use skysearch_core::{Alliance, CabinClass, SortBy};

    use super::*;

    fn base_params() -> ResolvedParams {
        ResolvedParams {
            origin: "HKG".to_owned(),
            destination: "NRT".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 6, 2).expect("valid date"),
            time_of_day: DayPart::Morning,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            sort_by: SortBy::Score,
            stops: StopsFilter::Any,
            aircraft_size: AircraftSize::Any,
            alliance: Alliance::Any,
            max_price: None,
            airlines: vec![],
        }
    }

    #[test]
    fn minimal_summary_keeps_route_and_date() {
        assert_eq!(
            confirmation_summary(&base_params()),
            "Morning flights from HKG to NRT on 2024-06-02"
        );
    }

    #[test]
    fn full_summary_orders_descriptors() {
        let mut params = base_params();
        params.time_of_day = DayPart::Evening;
        params.stops = StopsFilter::Nonstop;
        params.aircraft_size = AircraftSize::Large;
        params.max_price = Some(500);
        params.airlines = vec!["CX".to_owned(), "JL".to_owned()];

        assert_eq!(
            confirmation_summary(&params),
            "Evening non-stop large-aircraft flights from HKG to NRT on 2024-06-02 \
             under $500, preferring CX, JL"
        );
    }

    #[test]
    fn unconstrained_filters_contribute_nothing() {
        let summary = confirmation_summary(&base_params());
        assert!(!summary.contains("any"));
        assert!(!summary.contains("under"));
        assert!(!summary.contains("preferring"));
    }
}

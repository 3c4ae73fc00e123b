//! Deterministic query-string encoding of a resolved search.
//!
//! The results view keys on exact parameter names, so the key set and order
//! here are part of the contract: unconditional keys first, conditional
//! filter keys only when they constrain something, then the departure-hour
//! window and the AI marker flags.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use skysearch_core::{departure_hour_range, ResolvedParams};

/// Everything RFC 3986 gives structural meaning inside a query component,
/// plus space and the quoting characters.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// Serializes resolved parameters into the results-page query string.
///
/// `ai_query` carries the original free-text query through for traceability;
/// it is appended as `aiQuery` when non-empty.
///
/// Night's hour window is emitted verbatim as `depMin=22&depMax=6`: min
/// greater than max means the window wraps past midnight, and interpreting
/// that is the results view's job.
#[must_use]
pub fn results_query_string(params: &ResolvedParams, ai_query: Option<&str>) -> String {
    let mut pairs: Vec<(&str, String)> = vec![
        ("from", params.origin.clone()),
        ("to", params.destination.clone()),
        ("date", params.date.format("%Y-%m-%d").to_string()),
        ("cabin", params.cabin_class.as_str().to_owned()),
        ("adults", params.passengers.to_string()),
        ("children", "0".to_owned()),
        ("tripType", "oneway".to_owned()),
        ("sortBy", params.sort_by.as_str().to_owned()),
    ];

    if let Some(stops) = params.stops.query_value() {
        pairs.push(("stops", stops.to_owned()));
    }
    if let Some(size) = params.aircraft_size.query_value() {
        pairs.push(("aircraftType", size.to_owned()));
    }
    if let Some(alliance) = params.alliance.query_value() {
        pairs.push(("alliance", alliance.to_owned()));
    }
    if let Some(cap) = params.max_price {
        pairs.push(("maxPrice", cap.to_string()));
    }
    if !params.airlines.is_empty() {
        pairs.push(("airlines", params.airlines.join(",")));
    }

    let (dep_min, dep_max) = departure_hour_range(params.time_of_day);
    pairs.push(("depMin", dep_min.to_string()));
    pairs.push(("depMax", dep_max.to_string()));

    pairs.push(("aiSearch", "1".to_owned()));
    pairs.push(("aiSortBy", params.sort_by.as_str().to_owned()));
    pairs.push(("aiTimePreference", params.time_of_day.as_str().to_owned()));
    if let Some(query) = ai_query {
        let query = query.trim();
        if !query.is_empty() {
            pairs.push(("aiQuery", query.to_owned()));
        }
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

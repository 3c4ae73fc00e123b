//! The parameter resolver: fills every gap in a [`ParsedIntent`] until the
//! result is a fully-concrete [`ResolvedParams`].
//!
//! Sources for the departure airport are tried in a fixed order (parser
//! output, then request-supplied coordinates, then a live provider read),
//! and each miss falls through to the next. Only after every source misses
//! does resolution fail.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use skysearch_airports::nearest_within;
use skysearch_core::{Coordinates, ParsedIntent, ResolvedParams};
use thiserror::Error;

use crate::geolocate::{locate_with_timeout, GeoError, LocationProvider};

/// Terminal resolution failures. Each carries a user-actionable message via
/// [`ResolveError::user_message`]; the pipeline never surfaces the raw
/// variant to the user.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The parse produced no destination. Hard requirement: nothing else is
    /// attempted, in particular no geolocation.
    #[error("no destination in query")]
    MissingDestination,

    /// No departure from the parser, no usable coordinates, and no (or a
    /// failed) live position read. `cause` preserves the geolocation failure
    /// when one occurred, so its specific message reaches the user.
    #[error("departure could not be resolved")]
    MissingDeparture { cause: Option<GeoError> },

    /// The parser returned a date string that is not a valid ISO calendar
    /// date. Rejected rather than silently replaced with today.
    #[error("unrecognized travel date: {0}")]
    InvalidDate(String),
}

impl ResolveError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ResolveError::MissingDestination => {
                "Please specify a destination, for example \"flights to Tokyo\".".to_owned()
            }
            ResolveError::MissingDeparture { cause } => match cause {
                Some(geo) => format!(
                    "{} Try naming it explicitly, like \"from Hong Kong to Tokyo\".",
                    geo.user_message()
                ),
                None => "We couldn't tell where you're flying from. \
                         Try naming it explicitly, like \"from Hong Kong to Tokyo\"."
                    .to_owned(),
            },
            ResolveError::InvalidDate(raw) => {
                format!("The travel date \"{raw}\" wasn't recognized. Try a date like \"2025-03-14\".")
            }
        }
    }
}

/// Resolves a parsed intent against the current local wall clock.
///
/// `coords` are the submission's device coordinates, if the client sent
/// any; `provider` is the live fallback consulted only when both the parser
/// and `coords` fail to yield a departure airport.
///
/// # Errors
///
/// See [`ResolveError`]. Destination is checked before anything else, so a
/// destination-less intent never triggers geolocation.
pub async fn resolve(
    intent: ParsedIntent,
    coords: Option<Coordinates>,
    provider: Option<&dyn LocationProvider>,
    geo_timeout: Duration,
    radius_km: f64,
) -> Result<ResolvedParams, ResolveError> {
    let now = chrono::Local::now().naive_local();
    resolve_at(intent, coords, provider, geo_timeout, radius_km, now).await
}

/// [`resolve`] with an injected clock. The impure edge stays in the thin
/// wrapper so every defaulting rule is testable against a fixed timestamp.
pub(crate) async fn resolve_at(
    intent: ParsedIntent,
    coords: Option<Coordinates>,
    provider: Option<&dyn LocationProvider>,
    geo_timeout: Duration,
    radius_km: f64,
    now: NaiveDateTime,
) -> Result<ResolvedParams, ResolveError> {
    if !intent.has_destination || intent.destination_code.trim().is_empty() {
        return Err(ResolveError::MissingDestination);
    }
    let destination = intent.destination_code.trim().to_uppercase();

    let origin = resolve_departure(&intent, coords, provider, geo_timeout, radius_km).await?;

    let date = match intent.date.as_deref().map(str::trim) {
        None | Some("") => now.date(),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ResolveError::InvalidDate(raw.to_owned()))?,
    };

    let time_of_day = intent.time_preference.resolve_at(now.hour());

    let airlines = intent
        .airlines
        .iter()
        .map(|a| a.trim().to_uppercase())
        .filter(|a| !a.is_empty())
        .collect();

    Ok(ResolvedParams {
        origin,
        destination,
        date,
        time_of_day,
        passengers: intent.passengers.max(1),
        cabin_class: intent.cabin_class,
        sort_by: intent.sort_by,
        stops: intent.stops,
        aircraft_size: intent.aircraft_size,
        alliance: intent.alliance,
        max_price: intent.max_price,
        airlines,
    })
}

/// Departure sources in priority order. A parser-provided code
/// short-circuits everything; an empty nearest-airport lookup is a miss,
/// not an error, and falls through.
async fn resolve_departure(
    intent: &ParsedIntent,
    coords: Option<Coordinates>,
    provider: Option<&dyn LocationProvider>,
    geo_timeout: Duration,
    radius_km: f64,
) -> Result<String, ResolveError> {
    let code = intent.departure_code.trim();
    if !code.is_empty() {
        return Ok(code.to_uppercase());
    }

    if let Some(position) = coords {
        if let Some((airport, distance_km)) = nearest_within(position, radius_km) {
            tracing::debug!(
                code = airport.code,
                distance_km,
                "departure resolved from supplied coordinates"
            );
            return Ok(airport.code.to_owned());
        }
        tracing::debug!("no airport within radius of supplied coordinates");
    }

    let mut geo_cause = None;
    if let Some(provider) = provider {
        match locate_with_timeout(provider, geo_timeout).await {
            Ok(position) => {
                if let Some((airport, distance_km)) = nearest_within(position, radius_km) {
                    tracing::debug!(
                        code = airport.code,
                        distance_km,
                        "departure resolved from live position read"
                    );
                    return Ok(airport.code.to_owned());
                }
                tracing::debug!("no airport within radius of live position");
            }
            Err(err) => {
                tracing::debug!(error = %err, "live position read failed");
                geo_cause = Some(err);
            }
        }
    }

    Err(ResolveError::MissingDeparture { cause: geo_cause })
}

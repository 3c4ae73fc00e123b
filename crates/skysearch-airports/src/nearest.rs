//! Nearest-airport search over the embedded dataset.

use skysearch_core::Coordinates;

use crate::dataset::{Airport, AIRPORTS};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius bound for departure resolution. A device further than this from
/// every airport in the dataset resolves to "no airport", and the caller
/// falls back to asking the user.
pub const DEFAULT_RADIUS_KM: f64 = 150.0;

/// Great-circle distance between two positions in kilometres.
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Nearest airport within `radius_km` of `position`, with its distance.
///
/// Returns `None` when nothing in the dataset is close enough; that is an
/// ordinary empty lookup, not an error.
#[must_use]
pub fn nearest_within(position: Coordinates, radius_km: f64) -> Option<(&'static Airport, f64)> {
    AIRPORTS
        .iter()
        .map(|a| {
            let at = Coordinates::new(a.latitude, a.longitude);
            (a, haversine_km(position, at))
        })
        .filter(|(_, distance)| *distance <= radius_km)
        .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2))
}

/// Nearest airport within the default 150 km radius.
#[must_use]
pub fn nearest_airport(position: Coordinates) -> Option<(&'static Airport, f64)> {
    nearest_within(position, DEFAULT_RADIUS_KM)
}

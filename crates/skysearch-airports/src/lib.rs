mod dataset;
mod nearest;

pub use dataset::{Airport, AIRPORTS};
pub use nearest::{haversine_km, nearest_airport, nearest_within, DEFAULT_RADIUS_KM};

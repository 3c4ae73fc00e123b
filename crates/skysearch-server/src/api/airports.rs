use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use skysearch_airports::nearest_within;
use skysearch_core::Coordinates;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct NearestQuery {
    lat: f64,
    lng: f64,
    radius_km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct AirportMatchItem {
    pub code: String,
    pub name: String,
    pub municipality: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

/// Nearest airport to a coordinate, bounded by the configured radius.
///
/// `data` is `null` when nothing is within the radius: an ordinary empty
/// lookup, not an error.
pub(super) async fn nearest_airport(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NearestQuery>,
) -> Json<ApiResponse<Option<AirportMatchItem>>> {
    let position = Coordinates::new(params.lat, params.lng);
    let radius_km = params.radius_km.unwrap_or(state.airport_radius_km);

    let data = nearest_within(position, radius_km).map(|(airport, distance_km)| AirportMatchItem {
        code: airport.code.to_owned(),
        name: airport.name.to_owned(),
        municipality: airport.municipality.to_owned(),
        latitude: airport.latitude,
        longitude: airport.longitude,
        distance_km,
    });

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

use axum::{
    extract::{Query, State},
    Json,
};
use perks_location::LocationError;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LocalityQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct LocalityResponse {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LocationStateResponse {
    Ready {
        latitude: f64,
        longitude: f64,
        name: String,
    },
    Failed {
        kind: String,
        message: String,
    },
}

fn error_kind(error: &LocationError) -> &'static str {
    match error {
        LocationError::PermissionDenied => "permission_denied",
        LocationError::PositionUnavailable => "position_unavailable",
        LocationError::Timeout => "timeout",
        LocationError::Unsupported => "unsupported",
        LocationError::Unknown => "unknown",
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/location/name
/// Reverse-geocode coordinates to a place name. Always answers; service
/// failures degrade to the coordinate string.
pub async fn locality_name(
    State(state): State<AppState>,
    Query(query): Query<LocalityQuery>,
) -> Json<LocalityResponse> {
    let name = state.geocoder.locality_name(query.lat, query.lon).await;
    Json(LocalityResponse { name })
}

/// GET /v1/location/current
/// Acquire a position from the host's location capability. The outcome is
/// reported as a state payload so the caller can render it and retry on
/// failure by calling again.
pub async fn current_location(State(state): State<AppState>) -> Json<LocationStateResponse> {
    match state.location.current_location().await {
        Ok(position) => {
            let name = state
                .geocoder
                .locality_name(position.latitude, position.longitude)
                .await;
            Json(LocationStateResponse::Ready {
                latitude: position.latitude,
                longitude: position.longitude,
                name,
            })
        }
        Err(error) => Json(LocationStateResponse::Failed {
            kind: error_kind(&error).to_string(),
            message: error.to_string(),
        }),
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::offers::{to_response, OfferResponse};
use crate::state::AppState;

/// GET /v1/saved
/// The saved-offer set, in save order. Saved snapshots are returned even
/// after they expire so the UI can label them.
pub async fn list_saved(State(state): State<AppState>) -> Json<Vec<OfferResponse>> {
    let responses = state
        .saved
        .list()
        .iter()
        .map(|offer| to_response(offer, None, state.saved.as_ref()))
        .collect();
    Json(responses)
}

/// PUT /v1/saved/{id}
/// Save a catalogue offer; saving an already-saved offer is a no-op.
pub async fn save_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let offer = state.catalog.get(offer_id).ok_or(StatusCode::NOT_FOUND)?;
    state.saved.save(offer);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/saved/{id}
/// Remove an offer from the saved set; removing an absent id is a no-op.
pub async fn remove_saved(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
) -> StatusCode {
    state.saved.remove(offer_id);
    StatusCode::NO_CONTENT
}

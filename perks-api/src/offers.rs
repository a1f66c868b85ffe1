use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use perks_core::geo::{self, Coordinates};
use perks_core::search::FilterSpec;
use perks_offer::models::{Offer, OfferLocation};
use perks_offer::repository::SavedOfferRepository;
use perks_offer::{display, filter, sort};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListOffersQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub discount_type: String,
    #[serde(default)]
    pub city: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_km: Option<f64>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub discount_type: String,
    pub discount_percent: u32,
    pub discount_label: String,
    pub expiry: DateTime<Utc>,
    pub expires_soon: bool,
    pub location: Option<OfferLocation>,
    /// Rendered distance from the caller's position, e.g. "3.5km away".
    pub distance: Option<String>,
    pub link: Option<String>,
    pub tags: Vec<String>,
    pub saved: bool,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub categories: Vec<String>,
    pub types: Vec<String>,
    pub cities: Vec<String>,
}

pub(crate) fn to_response(
    offer: &Offer,
    user_location: Option<Coordinates>,
    saved: &dyn SavedOfferRepository,
) -> OfferResponse {
    let distance = match (user_location, &offer.location) {
        (Some(user), Some(location)) => {
            let km = geo::distance_km(user, location.coordinates());
            Some(format!("{} away", geo::format_distance(km)))
        }
        _ => None,
    };

    OfferResponse {
        id: offer.id,
        title: offer.title.clone(),
        description: offer.description.clone(),
        category: offer.category.clone(),
        discount_type: offer.discount_type.clone(),
        discount_percent: offer.discount_percent,
        discount_label: display::format_discount(offer.discount_percent, &offer.discount_type),
        expiry: offer.expiry,
        expires_soon: offer.expires_soon(),
        location: offer.location.clone(),
        distance,
        link: offer.link.clone(),
        tags: offer.tags.clone(),
        saved: saved.is_saved(offer.id),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/offers
/// The filtered, optionally sorted offer listing.
pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<ListOffersQuery>,
) -> Json<Vec<OfferResponse>> {
    let spec = FilterSpec {
        search: query.search,
        category: query.category,
        discount_type: query.discount_type,
        city: query.city,
    };

    let user_location = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    };

    let radius_km = query.radius_km.unwrap_or(state.defaults.radius_km);
    let mut offers =
        filter::filter_offers_within(state.catalog.offers(), &spec, user_location, radius_km);

    if let Some(key) = &query.sort {
        offers = sort::sort_offers(&offers, key);
    }

    let responses = offers
        .iter()
        .map(|offer| to_response(offer, user_location, state.saved.as_ref()))
        .collect();
    Json(responses)
}

/// GET /v1/offers/{id}
/// A single offer; 404 for an unknown id, 410 once it has expired.
pub async fn get_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
) -> Result<Json<OfferResponse>, StatusCode> {
    let offer = state.catalog.get(offer_id).ok_or(StatusCode::NOT_FOUND)?;

    if offer.is_expired() {
        return Err(StatusCode::GONE);
    }

    Ok(Json(to_response(offer, None, state.saved.as_ref())))
}

/// GET /v1/filters
/// Distinct values for the listing's filter controls.
pub async fn list_filters(State(state): State<AppState>) -> Json<FiltersResponse> {
    Json(FiltersResponse {
        categories: state.catalog.categories(),
        types: state.catalog.discount_types(),
        cities: state.catalog.cities(),
    })
}

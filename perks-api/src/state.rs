use std::sync::Arc;

use perks_catalog::Catalog;
use perks_location::{LocationProvider, ReverseGeocoder};
use perks_offer::repository::SavedOfferRepository;

/// Engine knobs shared with handlers.
#[derive(Debug, Clone)]
pub struct EngineDefaults {
    pub radius_km: f64,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub saved: Arc<dyn SavedOfferRepository>,
    pub location: Arc<LocationProvider>,
    pub geocoder: Arc<ReverseGeocoder>,
    pub defaults: EngineDefaults,
}

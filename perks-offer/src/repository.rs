use crate::models::Offer;

/// Port over the user's saved-offer set.
///
/// All operations are idempotent and infallible at this boundary: adapters
/// absorb storage failures, reading a broken store as the empty set and
/// dropping writes that cannot land. At most one entry exists per offer id.
pub trait SavedOfferRepository: Send + Sync {
    /// Add an offer snapshot to the saved set; no-op if already present.
    fn save(&self, offer: &Offer);

    /// Remove an offer from the saved set; no-op if absent.
    fn remove(&self, offer_id: i64);

    fn is_saved(&self, offer_id: i64) -> bool;

    /// All saved snapshots, in the order they were saved.
    fn list(&self) -> Vec<Offer>;
}

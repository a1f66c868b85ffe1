use perks_core::geo::{self, Coordinates};
use perks_core::search::FilterSpec;

use crate::models::Offer;

/// Radius applied when narrowing to a user location, in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Narrow a list of offers to those matching the spec, using the default
/// location radius.
pub fn filter_offers(
    offers: &[Offer],
    spec: &FilterSpec,
    user_location: Option<Coordinates>,
) -> Vec<Offer> {
    filter_offers_within(offers, spec, user_location, DEFAULT_RADIUS_KM)
}

/// Narrow a list of offers to those matching the spec.
///
/// Predicates combine conjunctively and are checked in order, stopping at
/// the first failure per offer: expiry (always), search text, category,
/// discount type, city, and finally the location radius when a user
/// location is supplied. Returns a new list; the input is untouched.
pub fn filter_offers_within(
    offers: &[Offer],
    spec: &FilterSpec,
    user_location: Option<Coordinates>,
    radius_km: f64,
) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| matches(offer, spec, user_location, radius_km))
        .cloned()
        .collect()
}

fn matches(
    offer: &Offer,
    spec: &FilterSpec,
    user_location: Option<Coordinates>,
    radius_km: f64,
) -> bool {
    if offer.is_expired() {
        return false;
    }

    if !spec.search.is_empty() {
        let term = spec.search.to_lowercase();
        if !offer.title.to_lowercase().contains(&term)
            && !offer.description.to_lowercase().contains(&term)
        {
            return false;
        }
    }

    if !spec.category.is_empty() && offer.category != spec.category {
        return false;
    }

    if !spec.discount_type.is_empty() && offer.discount_type != spec.discount_type {
        return false;
    }

    if !spec.city.is_empty() && offer.city() != Some(spec.city.as_str()) {
        return false;
    }

    if let Some(user) = user_location {
        // Offers without coordinates cannot be shown at a distance.
        let Some(location) = &offer.location else {
            return false;
        };
        if geo::distance_km(user, location.coordinates()) > radius_km {
            return false;
        }
    }

    true
}

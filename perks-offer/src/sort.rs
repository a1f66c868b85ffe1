use perks_core::search::SortKey;

use crate::models::Offer;

/// Reorder offers by a wire-form sort key. Unknown keys return the input
/// order unchanged rather than erroring.
pub fn sort_offers(offers: &[Offer], key: &str) -> Vec<Offer> {
    match SortKey::parse(key) {
        Some(key) => sort_offers_by(offers, key),
        None => offers.to_vec(),
    }
}

/// Stable reordering into a new list; equal keys keep their relative order.
pub fn sort_offers_by(offers: &[Offer], key: SortKey) -> Vec<Offer> {
    let mut sorted = offers.to_vec();
    match key {
        SortKey::Expiry => sorted.sort_by_key(|o| o.expiry),
        SortKey::Discount => sorted.sort_by(|a, b| b.discount_percent.cmp(&a.discount_percent)),
        SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Category => sorted.sort_by(|a, b| a.category.cmp(&b.category)),
    }
    sorted
}

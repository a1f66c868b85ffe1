pub mod builtin;
pub mod feed;

pub use feed::{FeedClient, FeedError, FeedRecord};

use std::collections::BTreeSet;

use perks_offer::models::Offer;

/// The canonical offer catalogue, immutable once loaded.
///
/// Offers keep their source order; derived category/type/city lists are
/// deduplicated and sorted for the filter controls.
pub struct Catalog {
    offers: Vec<Offer>,
}

impl Catalog {
    /// Catalogue backed by the built-in offer list.
    pub fn builtin() -> Self {
        Self::from_offers(builtin::builtin_offers())
    }

    pub fn from_offers(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    /// Load the catalogue from the remote feed, falling back to the
    /// built-in list on any failure. Never fails.
    pub async fn load(feed: Option<&FeedClient>) -> Self {
        let Some(client) = feed else {
            return Self::builtin();
        };

        match client.fetch().await {
            Ok(offers) => {
                tracing::info!("loaded {} offers from feed", offers.len());
                Self::from_offers(offers)
            }
            Err(e) => {
                tracing::warn!("offer feed unavailable, using built-in catalogue: {e}");
                Self::builtin()
            }
        }
    }

    /// Full unfiltered list, in source order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn get(&self, id: i64) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    /// Distinct categories, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.offers.iter().map(|o| o.category.clone()))
    }

    /// Distinct discount types, sorted ascending.
    pub fn discount_types(&self) -> Vec<String> {
        distinct(self.offers.iter().map(|o| o.discount_type.clone()))
    }

    /// Distinct cities across located offers, sorted ascending.
    pub fn cities(&self) -> Vec<String> {
        distinct(self.offers.iter().filter_map(|o| o.city().map(str::to_string)))
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

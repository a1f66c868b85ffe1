pub mod display;
pub mod expiry;
pub mod filter;
pub mod models;
pub mod repository;
pub mod sort;

pub use filter::{filter_offers, filter_offers_within, DEFAULT_RADIUS_KM};
pub use models::{Offer, OfferLocation};
pub use repository::SavedOfferRepository;
pub use sort::{sort_offers, sort_offers_by};

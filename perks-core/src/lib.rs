pub mod geo;
pub mod search;

pub use geo::{distance_km, format_distance, Coordinates};
pub use search::{FilterSpec, SortKey};

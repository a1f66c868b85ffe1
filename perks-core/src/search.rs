use serde::{Deserialize, Serialize};

/// Filter criteria coming from the listing controls.
///
/// An empty string leaves that dimension unconstrained; the fields combine
/// conjunctively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub search: String,
    pub category: String,
    #[serde(rename = "type")]
    pub discount_type: String,
    pub city: String,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_empty()
            && self.discount_type.is_empty()
            && self.city.is_empty()
    }
}

/// Orderings supported by the offer listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Expiry,
    Discount,
    Title,
    Category,
}

impl SortKey {
    /// Parse a sort key from its wire form. Unknown keys yield `None`;
    /// callers treat that as "leave the order unchanged".
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "expiry" => Some(SortKey::Expiry),
            "discount" => Some(SortKey::Discount),
            "title" => Some(SortKey::Title),
            "category" => Some(SortKey::Category),
            _ => None,
        }
    }
}

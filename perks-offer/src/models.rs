use chrono::{DateTime, Utc};
use perks_core::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// A discount offer as presented in the catalogue.
///
/// Offers are immutable once created; filtering and sorting produce new
/// derived lists and never touch the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub discount_type: String,
    /// Magnitude of the discount. Percentage value for `percentage`, 100
    /// for `bogo`, a currency amount for `fixed`, 0 for the rest.
    pub discount_percent: u32,
    pub expiry: DateTime<Utc>,
    pub location: Option<OfferLocation>,
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Where an offer can be redeemed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
}

impl OfferLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl Offer {
    /// Check if the offer is past its expiry instant.
    pub fn is_expired(&self) -> bool {
        crate::expiry::is_expired(self.expiry)
    }

    /// Check if the offer expires within the next seven days.
    pub fn expires_soon(&self) -> bool {
        crate::expiry::expires_soon(self.expiry)
    }

    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.city.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_offer_deserialization() {
        let json = r#"
            {
                "id": 3,
                "title": "Buy 1 Get 1 Free on Coffee",
                "description": "Valid at all outlets.",
                "category": "Food",
                "discount_type": "bogo",
                "discount_percent": 100,
                "expiry": "2027-10-01T23:59:59Z",
                "location": {
                    "name": "Bandra West",
                    "address": "Bandra West, Mumbai 400050",
                    "latitude": 19.0760,
                    "longitude": 72.8777,
                    "city": "Mumbai"
                },
                "link": "https://example.com/offers",
                "tags": ["coffee", "cafe"]
            }
        "#;
        let offer: Offer = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(offer.id, 3);
        assert_eq!(offer.city(), Some("Mumbai"));
        assert_eq!(offer.discount_percent, 100);
    }

    #[test]
    fn test_tags_default_to_empty() {
        let json = r#"
            {
                "id": 9,
                "title": "Plain",
                "description": "No frills.",
                "category": "Grocery",
                "discount_type": "loyalty",
                "discount_percent": 0,
                "expiry": "2027-01-01T00:00:00Z",
                "location": null,
                "link": null
            }
        "#;
        let offer: Offer = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(offer.tags.is_empty());
        assert_eq!(offer.city(), None);
    }

    #[test]
    fn test_expiry_checks(){
        let mut offer: Offer = serde_json::from_str(
            r#"{"id":1,"title":"t","description":"d","category":"Food",
                "discount_type":"percentage","discount_percent":10,
                "expiry":"2020-01-01T00:00:00Z","location":null,"link":null}"#,
        )
        .expect("Failed to deserialize");
        assert!(offer.is_expired());
        assert!(!offer.expires_soon());

        offer.expiry = Utc::now() + Duration::days(3);
        assert!(!offer.is_expired());
        assert!(offer.expires_soon());

        offer.expiry = Utc::now() + Duration::days(30);
        assert!(!offer.expires_soon());
    }
}

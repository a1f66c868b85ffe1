use std::time::Duration;

use chrono::{DateTime, Utc};
use perks_offer::models::{Offer, OfferLocation};
use serde::Deserialize;

/// The flat record shape served by the hosted sheet feed.
///
/// The feed carries coordinates and city inline rather than as a nested
/// location; [`FeedRecord::into_offer`] adapts it to the canonical schema
/// at this boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub discount_type: String,
    #[serde(default)]
    pub discount_percent: u32,
    pub expiry: DateTime<Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub source_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FeedRecord {
    pub fn into_offer(self) -> Offer {
        let location = match (self.latitude, self.longitude, self.city) {
            (Some(latitude), Some(longitude), Some(city)) => Some(OfferLocation {
                name: None,
                address: None,
                latitude,
                longitude,
                city,
            }),
            _ => None,
        };

        Offer {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            discount_type: self.discount_type,
            discount_percent: self.discount_percent,
            expiry: self.expiry,
            location,
            link: self.source_link,
            tags: self.tags,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the remote offer feed.
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// Fetch the feed and adapt every record to the canonical offer schema.
    pub async fn fetch(&self) -> Result<Vec<Offer>, FeedError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let records: Vec<FeedRecord> = response.json().await?;
        Ok(records.into_iter().map(FeedRecord::into_offer).collect())
    }
}

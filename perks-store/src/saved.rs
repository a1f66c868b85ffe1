use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use perks_offer::models::Offer;
use perks_offer::repository::SavedOfferRepository;

/// File-backed saved-offer set: one JSON document holding the saved
/// snapshots, re-read and rewritten on every operation.
///
/// Storage failures never reach the caller: an unreadable or corrupt file
/// reads as the empty set, and a write that cannot land is dropped with a
/// warning.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Vec<Offer> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("saved offers file is corrupt, treating as empty: {e}");
                Vec::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!("could not read saved offers: {e}");
                Vec::new()
            }
        }
    }

    fn write(&self, offers: &[Offer]) {
        let payload = match serde_json::to_string(offers) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("could not serialize saved offers: {e}");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!("could not create saved offers directory: {e}");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(&self.path, payload) {
            tracing::warn!("could not write saved offers: {e}");
        }
    }
}

impl SavedOfferRepository for JsonFileStore {
    fn save(&self, offer: &Offer) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut offers = self.read();
        if offers.iter().any(|o| o.id == offer.id) {
            return;
        }
        offers.push(offer.clone());
        self.write(&offers);
    }

    fn remove(&self, offer_id: i64) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut offers = self.read();
        let before = offers.len();
        offers.retain(|o| o.id != offer_id);
        if offers.len() != before {
            self.write(&offers);
        }
    }

    fn is_saved(&self, offer_id: i64) -> bool {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read().iter().any(|o| o.id == offer_id)
    }

    fn list(&self) -> Vec<Offer> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read()
    }
}

/// In-memory adapter for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    offers: Mutex<Vec<Offer>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedOfferRepository for MemoryStore {
    fn save(&self, offer: &Offer) {
        let mut offers = self.offers.lock().unwrap_or_else(|e| e.into_inner());
        if offers.iter().any(|o| o.id == offer.id) {
            return;
        }
        offers.push(offer.clone());
    }

    fn remove(&self, offer_id: i64) {
        let mut offers = self.offers.lock().unwrap_or_else(|e| e.into_inner());
        offers.retain(|o| o.id != offer_id);
    }

    fn is_saved(&self, offer_id: i64) -> bool {
        self.offers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|o| o.id == offer_id)
    }

    fn list(&self) -> Vec<Offer> {
        self.offers.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn offer(id: i64) -> Offer {
        Offer {
            id,
            title: format!("Offer {id}"),
            description: String::new(),
            category: "Food".to_string(),
            discount_type: "percentage".to_string(),
            discount_percent: 10,
            expiry: Utc::now() + Duration::days(30),
            location: None,
            link: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_save_then_is_saved() {
        let store = MemoryStore::new();
        assert!(!store.is_saved(1));
        store.save(&offer(1));
        assert!(store.is_saved(1));
    }

    #[test]
    fn test_save_is_idempotent() {
        let store = MemoryStore::new();
        store.save(&offer(1));
        store.save(&offer(1));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_remove_then_not_saved() {
        let store = MemoryStore::new();
        store.save(&offer(1));
        store.remove(1);
        assert!(!store.is_saved(1));

        // Removing again is a no-op.
        store.remove(1);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_file_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("saved_offers.json");

        let store = JsonFileStore::new(&path);
        store.save(&offer(1));
        store.save(&offer(2));
        store.save(&offer(1));

        let reopened = JsonFileStore::new(&path);
        let ids: Vec<i64> = reopened.list().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(reopened.is_saved(2));

        reopened.remove(1);
        assert!(!JsonFileStore::new(&path).is_saved(1));
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("never_written.json"));
        assert!(store.list().is_empty());
        assert!(!store.is_saved(1));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("saved_offers.json");
        fs::write(&path, "{not json").expect("write");

        let store = JsonFileStore::new(&path);
        assert!(store.list().is_empty());

        // A save recovers the file.
        store.save(&offer(3));
        assert!(store.is_saved(3));
    }

    #[test]
    fn test_file_store_creates_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/dir/saved_offers.json");

        let store = JsonFileStore::new(&path);
        store.save(&offer(7));
        assert!(path.exists());
    }
}

use crate::error::StoreError;
use crate::favourites::set::FavouritesSet;
use crate::models::{Listing, ListingId};
use crate::storage::KeyValueStore;
use tracing::{debug, info, warn};

/// Key the favourites snapshot is stored under
pub const DEFAULT_FAVOURITES_KEY: &str = "propertyFavourites";

/// Favourites held in memory and mirrored to a key-value backend
///
/// Owned by the top-level process and handed to whatever needs it. Each
/// mutation updates the in-memory set first, then re-persists the whole
/// snapshot. A failed write is returned to the caller but the in-memory
/// change stands.
pub struct FavouritesStore<S: KeyValueStore> {
    backend: S,
    key: String,
    favourites: FavouritesSet,
}

impl<S: KeyValueStore> FavouritesStore<S> {
    /// Load favourites from `backend` under `key`
    ///
    /// A missing, unreadable, or malformed snapshot yields an empty set.
    pub fn load(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let favourites = match backend.get(&key) {
            Ok(Some(snapshot)) => match serde_json::from_str::<FavouritesSet>(&snapshot) {
                Ok(set) => set,
                Err(err) => {
                    warn!("Ignoring malformed favourites snapshot '{}': {}", key, err);
                    FavouritesSet::new()
                }
            },
            Ok(None) => FavouritesSet::new(),
            Err(err) => {
                warn!(
                    "Could not read favourites from {} store: {}",
                    backend.backend_name(),
                    err
                );
                FavouritesSet::new()
            }
        };

        info!(
            "Loaded {} favourites from {} store",
            favourites.len(),
            backend.backend_name()
        );
        Self {
            backend,
            key,
            favourites,
        }
    }

    /// Load using [`DEFAULT_FAVOURITES_KEY`]
    pub fn load_default(backend: S) -> Self {
        Self::load(backend, DEFAULT_FAVOURITES_KEY)
    }

    pub fn favourites(&self) -> &FavouritesSet {
        &self.favourites
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.favourites.contains(id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Add `listing` unless already favourited, then persist
    pub fn add(&mut self, listing: Listing) -> Result<(), StoreError> {
        let id = listing.id;
        self.apply(|set| set.add(listing));
        debug!("Added listing {} to favourites", id);
        self.persist()
    }

    /// Remove the listing with `id`, then persist
    pub fn remove(&mut self, id: ListingId) -> Result<(), StoreError> {
        self.apply(|set| set.remove(id));
        debug!("Removed listing {} from favourites", id);
        self.persist()
    }

    /// Remove `listing` if favourited, otherwise add it
    pub fn toggle(&mut self, listing: Listing) -> Result<(), StoreError> {
        if self.contains(listing.id) {
            self.remove(listing.id)
        } else {
            self.add(listing)
        }
    }

    /// Empty the favourites, then persist
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.apply(FavouritesSet::clear);
        debug!("Cleared favourites");
        self.persist()
    }

    /// Write the full snapshot to the backend, replacing the previous one
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let snapshot = serde_json::to_string(&self.favourites)?;
        if let Err(err) = self.backend.set(&self.key, &snapshot) {
            warn!("Failed to persist favourites: {}", err);
            return Err(err);
        }
        Ok(())
    }

    fn apply(&mut self, change: impl FnOnce(FavouritesSet) -> FavouritesSet) {
        let current = std::mem::take(&mut self.favourites);
        self.favourites = change(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn listing(id: ListingId) -> Listing {
        Listing {
            id,
            kind: "flat".into(),
            price: 150_000.0,
            bedrooms: 1,
            date_added: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            postcode: "COL04".into(),
            title: format!("Flat {id}"),
            description: "Compact flat".into(),
            long_description: None,
            location: "Colombo 04".into(),
            images: vec![format!("flat{id}.jpg")],
            coordinates: None,
            floor_plan: None,
        }
    }

    fn stored_ids(backend: &MemoryStore) -> Vec<ListingId> {
        let snapshot = backend.get(DEFAULT_FAVOURITES_KEY).unwrap().unwrap();
        serde_json::from_str::<FavouritesSet>(&snapshot).unwrap().ids()
    }

    #[test]
    fn starts_empty_without_snapshot() {
        let store = FavouritesStore::load_default(MemoryStore::new());
        assert!(store.favourites().is_empty());
    }

    #[test]
    fn malformed_snapshot_loads_empty() {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_FAVOURITES_KEY, "[{\"id\": \"oops\"").unwrap();

        let store = FavouritesStore::load_default(backend);
        assert!(store.favourites().is_empty());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut store = FavouritesStore::load_default(MemoryStore::new());

        store.add(listing(1)).unwrap();
        store.add(listing(1)).unwrap();
        store.add(listing(2)).unwrap();
        assert_eq!(stored_ids(store.backend()), vec![1, 2]);

        store.remove(1).unwrap();
        assert_eq!(stored_ids(store.backend()), vec![2]);

        store.clear().unwrap();
        assert!(stored_ids(store.backend()).is_empty());
    }

    #[test]
    fn reload_round_trips() {
        let mut store = FavouritesStore::load_default(MemoryStore::new());
        store.add(listing(5)).unwrap();
        store.add(listing(3)).unwrap();
        let expected = store.favourites().clone();

        let reloaded = FavouritesStore::load_default(store.into_backend());
        assert_eq!(reloaded.favourites(), &expected);
    }

    #[test]
    fn fractional_price_survives_snapshot() {
        let mut store = FavouritesStore::load_default(MemoryStore::new());
        let mut odd = listing(6);
        odd.price = 199_999.75;
        store.add(odd.clone()).unwrap();

        let reloaded = FavouritesStore::load_default(store.into_backend());
        assert_eq!(reloaded.favourites().ids(), vec![6]);
        assert_eq!(reloaded.favourites().iter().next(), Some(&odd));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut store = FavouritesStore::load_default(MemoryStore::new());
        store.toggle(listing(9)).unwrap();
        assert!(store.contains(9));
        store.toggle(listing(9)).unwrap();
        assert!(!store.contains(9));
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let mut store = FavouritesStore::load_default(MemoryStore::with_quota(64));

        let err = store.add(listing(1)).unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { .. }));
        assert!(store.contains(1));
        assert_eq!(store.backend().get(DEFAULT_FAVOURITES_KEY).unwrap(), None);
    }

    #[test]
    fn custom_key_is_respected() {
        let mut store = FavouritesStore::load(MemoryStore::new(), "savedHomes");
        store.add(listing(4)).unwrap();
        assert_eq!(store.key(), "savedHomes");
        assert!(store.backend().get("savedHomes").unwrap().is_some());
        assert!(store.backend().get(DEFAULT_FAVOURITES_KEY).unwrap().is_none());
    }
}

use crate::models::{Listing, ListingId};
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered, duplicate-free collection of favourited listings
///
/// Insertion order is kept. Serializes as a plain JSON array of full listing
/// records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FavouritesSet {
    listings: Vec<Listing>,
}

impl FavouritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `listing` unless one with the same id is already present
    pub fn add(mut self, listing: Listing) -> Self {
        if !self.contains(listing.id) {
            self.listings.push(listing);
        }
        self
    }

    /// Drop the listing with `id`; absent ids are ignored
    pub fn remove(mut self, id: ListingId) -> Self {
        self.listings.retain(|listing| listing.id != id);
        self
    }

    pub fn clear(mut self) -> Self {
        self.listings.clear();
        self
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.listings.iter().any(|listing| listing.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn ids(&self) -> Vec<ListingId> {
        self.listings.iter().map(|listing| listing.id).collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl FromIterator<Listing> for FavouritesSet {
    /// Later duplicates of an id are dropped, the first occurrence wins
    fn from_iter<I: IntoIterator<Item = Listing>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::add)
    }
}

impl<'de> Deserialize<'de> for FavouritesSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let listings = Vec::<Listing>::deserialize(deserializer)?;
        Ok(listings.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FavouritesSet {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}

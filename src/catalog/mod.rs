use crate::error::CatalogError;
use crate::models::{Listing, ListingId};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Catalog JSON compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/properties.json");

/// Static, read-only collection of listings
///
/// Loaded once at startup. Ids are unique; loading rejects duplicates.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateId(listing.id));
            }
        }
        Ok(Self { listings })
    }

    /// The catalog shipped with the application
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_CATALOG)?;
        info!("Loaded {} bundled listings", catalog.len());
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(raw)?;
        Self::new(listings)
    }

    /// Read a catalog JSON file
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Reading catalog from {}", path.display());
        let raw = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&raw)?;
        info!("Loaded {} listings from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing for the detail view
    pub fn find(&self, id: ListingId) -> Result<&Listing, CatalogError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or(CatalogError::ListingNotFound(id))
    }

    /// Distinct postcodes, upper-cased and sorted
    pub fn postcodes(&self) -> Vec<String> {
        self.listings
            .iter()
            .map(|listing| listing.postcode.trim().to_uppercase())
            .filter(|code| !code.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Known postcodes containing `fragment`, for autocomplete only
    pub fn suggest_postcodes(&self, fragment: &str) -> Vec<String> {
        let needle = fragment.trim().to_uppercase();
        self.postcodes()
            .into_iter()
            .filter(|code| code.contains(&needle))
            .collect()
    }
}

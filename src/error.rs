use crate::models::ListingId;
use thiserror::Error;

/// Failures loading or querying the listing catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("listing {0} not found")]
    ListingNotFound(ListingId),

    #[error("catalog contains listing {0} more than once")]
    DuplicateId(ListingId),

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the local key-value store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write would push the store past its byte quota
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub mod catalog;
pub mod config;
pub mod error;
pub mod favourites;
pub mod models;
pub mod render;
pub mod search;
pub mod storage;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, StoreError};
pub use favourites::{FavouritesSet, FavouritesStore};
pub use models::{Coordinates, Listing, ListingId};
pub use search::{filter_listings, SearchCriteria};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};

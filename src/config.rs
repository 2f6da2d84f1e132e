use crate::favourites::DEFAULT_FAVOURITES_KEY;
use std::path::PathBuf;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// External catalog file; `None` uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// JSON file backing the local key-value store
    pub store_path: PathBuf,
    /// Key the favourites snapshot is stored under
    pub favourites_key: String,
}

impl Config {
    /// Default store location (`<data dir>/property-search/store.json`)
    pub fn default_store_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("property-search")
            .join("store.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            store_path: Self::default_store_path(),
            favourites_key: DEFAULT_FAVOURITES_KEY.to_string(),
        }
    }
}

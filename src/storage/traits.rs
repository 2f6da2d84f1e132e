use crate::error::StoreError;

/// Common trait for local key-value backends
/// Favourites persist through this, so the file store can be swapped for an
/// in-memory one in tests
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Drop `key` if present
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Get the name of the backend
    fn backend_name(&self) -> &'static str;
}

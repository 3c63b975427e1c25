pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod recent_searches;

pub use error::StorageError;
pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use recent_searches::{push_bounded, read_list, RecentSearches};

/// Minimal string key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Replace the value under `key` with the result of `apply`, holding the
    /// store's lock across the read and the write
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> Result<String, StorageError>,
    ) -> Result<(), StorageError>;
}

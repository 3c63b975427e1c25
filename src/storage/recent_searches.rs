use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageError};

/// Storage key of the recent-search list
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const RECENT_SEARCHES_CAPACITY: usize = 5;

/// Read a JSON string list stored under `key`, empty when absent
pub fn read_list(store: &dyn KeyValueStore, key: &str) -> Result<Vec<String>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Insert `value` at the head of the list under `key`.
///
/// Earlier entries equal to `value` (ignoring case and surrounding
/// whitespace) are removed first, then the list is cut to `capacity`.
pub fn push_bounded(
    store: &dyn KeyValueStore,
    key: &str,
    value: &str,
    capacity: usize,
) -> Result<Vec<String>, StorageError> {
    let value = value.trim();
    let folded = value.to_lowercase();
    let mut list = Vec::new();

    store.update(key, &mut |current| {
        let mut entries: Vec<String> = match current {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        entries.retain(|existing| existing.trim().to_lowercase() != folded);
        entries.insert(0, value.to_string());
        entries.truncate(capacity);

        let encoded = serde_json::to_string(&entries)?;
        list = entries;
        Ok(encoded)
    })?;

    Ok(list)
}

/// Recent city searches, most recent first
#[derive(Clone)]
pub struct RecentSearches {
    store: Arc<dyn KeyValueStore>,
}

impl RecentSearches {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn record(&self, city: &str) -> Result<Vec<String>, StorageError> {
        push_bounded(
            self.store.as_ref(),
            RECENT_SEARCHES_KEY,
            city,
            RECENT_SEARCHES_CAPACITY,
        )
    }

    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        read_list(self.store.as_ref(), RECENT_SEARCHES_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn searches() -> RecentSearches {
        RecentSearches::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_empty_list() {
        assert!(searches().list().unwrap().is_empty());
    }

    #[test]
    fn test_most_recent_first() {
        let recent = searches();
        recent.record("Patna").unwrap();
        recent.record("Delhi").unwrap();
        assert_eq!(recent.list().unwrap(), vec!["Delhi", "Patna"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let recent = searches();
        recent.record("Patna").unwrap();
        recent.record("Delhi").unwrap();
        recent.record("  patna ").unwrap();
        assert_eq!(recent.list().unwrap(), vec!["patna", "Delhi"]);
    }

    #[test]
    fn test_duplicate_detection_folds_non_ascii_case() {
        let recent = searches();
        recent.record("São Paulo").unwrap();
        recent.record("Lima").unwrap();
        recent.record("SÃO PAULO").unwrap();
        assert_eq!(recent.list().unwrap(), vec!["SÃO PAULO", "Lima"]);
    }

    #[test]
    fn test_capacity() {
        let recent = searches();
        for city in ["A", "B", "C", "D", "E", "F"] {
            recent.record(city).unwrap();
        }
        assert_eq!(recent.list().unwrap(), vec!["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_push_bounded_custom_key() {
        let store = MemoryStore::new();
        push_bounded(&store, "other", "x", 2).unwrap();
        push_bounded(&store, "other", "y", 2).unwrap();
        push_bounded(&store, "other", "z", 2).unwrap();

        assert_eq!(read_list(&store, "other").unwrap(), vec!["z", "y"]);
        assert!(read_list(&store, RECENT_SEARCHES_KEY).unwrap().is_empty());
    }
}

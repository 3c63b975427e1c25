use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

use crate::storage::{KeyValueStore, StorageError};

/// Key-value store persisted as a single JSON object on disk.
///
/// Every `set` rewrites the whole file. A missing file reads as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.load()?;
        Ok(values.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.update(key, &mut |_| Ok(value.clone()))
    }

    #[instrument(skip(self, apply), fields(path = %self.path.display()))]
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> Result<String, StorageError>,
    ) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.load()?;
        let next = apply(values.remove(key))?;
        values.insert(key.to_string(), next);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        debug!("Wrote {} keys to store", values.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_values_survive_new_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        JsonFileStore::new(&path)
            .set("recentSearches", "[\"Patna\"]".to_string())
            .unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("recentSearches").unwrap().as_deref(),
            Some("[\"Patna\"]")
        );
    }

    #[test]
    fn test_concurrent_pushes_keep_every_entry() {
        use crate::storage::{push_bounded, read_list};
        use std::sync::{Arc, Barrier};
        use std::thread;

        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("store.json")));
        let workers = 16;
        let barrier = Arc::new(Barrier::new(workers));

        let handles: Vec<_> = (0..workers)
            .map(|i| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    push_bounded(&*store, "recentSearches", &format!("city{}", i), 100)
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut list = read_list(&*store, "recentSearches").unwrap();
        list.sort();
        let mut expected: Vec<String> = (0..workers).map(|i| format!("city{}", i)).collect();
        expected.sort();
        assert_eq!(list, expected);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StorageError::Serde(_))));
    }
}

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{APP_DIR_NAME, HIGH_SCORE_KEY};

const STORE_FILE_NAME: &str = "store.json";

/// Failures of the persistence layer. Never surfaced to gameplay.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("store contents are not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value persistence, in the manner of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Reads the persisted high score.
///
/// Absent keys, non-numeric values and read failures all yield 0.
pub fn load_high_score(store: &dyn KeyValueStore) -> u32 {
    match store.get(HIGH_SCORE_KEY) {
        Ok(Some(raw)) => parse_score(&raw),
        Ok(None) => 0,
        Err(error) => {
            log::warn!("failed to read high score, using 0: {error}");
            0
        }
    }
}

/// Writes the high score under [`HIGH_SCORE_KEY`].
pub fn save_high_score(store: &mut dyn KeyValueStore, score: u32) -> Result<(), StoreError> {
    store.set(HIGH_SCORE_KEY, &score.to_string())
}

fn parse_score(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a JSON object file; every `set` rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform-correct data location.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(default_store_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // Unparseable contents are replaced; any other read failure aborts
        // the write so an unreadable file is never clobbered.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Json(_)) => BTreeMap::new(),
            Err(error) => return Err(error),
        };
        entries.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Returns `<data_local_dir>/grid-snake/store.json`.
#[must_use]
pub fn default_store_path() -> PathBuf {
    app_data_dir().join(STORE_FILE_NAME)
}

/// Returns the per-user application data directory.
#[must_use]
pub fn app_data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        JsonFileStore, KeyValueStore, MemoryStore, StoreError, load_high_score, save_high_score,
    };
    use crate::config::HIGH_SCORE_KEY;

    #[test]
    fn high_score_survives_a_file_store_reopen() {
        let path = unique_test_path("reopen");

        let mut store = JsonFileStore::new(&path);
        save_high_score(&mut store, 42).expect("score save should succeed");

        let reopened = JsonFileStore::new(&path);
        assert_eq!(load_high_score(&reopened), 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_store_file_yields_zero() {
        let path = unique_test_path("missing");
        let store = JsonFileStore::new(&path);

        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn malformed_store_file_yields_zero_and_is_replaced_on_write() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let mut store = JsonFileStore::new(&path);
        assert!(store.get(HIGH_SCORE_KEY).is_err());
        assert_eq!(load_high_score(&store), 0);

        save_high_score(&mut store, 3).expect("write over corrupt file should succeed");
        assert_eq!(load_high_score(&store), 3);

        cleanup_test_path(&path);
    }

    #[test]
    fn non_numeric_value_yields_zero() {
        let mut store = MemoryStore::new();
        store
            .set(HIGH_SCORE_KEY, "lots")
            .expect("memory store never fails");

        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn other_keys_are_preserved_on_write() {
        let path = unique_test_path("other-keys");
        let mut store = JsonFileStore::new(&path);
        store.set("theme", "dark").expect("set should succeed");

        save_high_score(&mut store, 8).expect("set should succeed");

        assert_eq!(
            store.get("theme").expect("get should succeed"),
            Some("dark".to_owned())
        );
        cleanup_test_path(&path);
    }

    #[test]
    fn unreadable_store_path_fails_the_write_without_replacing_it() {
        let path = unique_test_path("unreadable");
        fs::create_dir_all(&path).expect("create directory at store path");
        let mut store = JsonFileStore::new(&path);

        let result = store.set(HIGH_SCORE_KEY, "9");

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert!(path.is_dir());
        fs::remove_dir(&path).expect("remove test directory");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-store-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        // The shared parent stays; tests run in parallel inside it.
        let _ = fs::remove_file(path);
    }
}

//! Durable storage for the topic history
//!
//! [`TopicStore`] is the persistence port: `load` and `save` are its only
//! operations. The stored form is a JSON array of strings.
//!
//! Absent or malformed data is an empty history, never an error.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::StorageError;

pub trait TopicStore: Send + Sync {
    /// Read the stored topics, oldest first
    fn load(&self) -> Vec<String>;

    /// Overwrite the stored topics with `topics`
    fn save(&self, topics: &[String]) -> Result<(), StorageError>;
}

/// Decode a stored topic list, dropping duplicates (first one wins)
pub fn decode_topics(raw: &str) -> Option<Vec<String>> {
    let decoded: Vec<String> = serde_json::from_str(raw).ok()?;
    let mut topics: Vec<String> = Vec::with_capacity(decoded.len());
    for topic in decoded {
        if !topics.contains(&topic) {
            topics.push(topic);
        }
    }
    Some(topics)
}

pub fn encode_topics(topics: &[String]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(topics)?)
}

/// JSON file on disk, replaced atomically on every save
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TopicStore for JsonFileStore {
    fn load(&self) -> Vec<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No topic history at {:?}", self.path);
                return Vec::new();
            }
            Err(err) => {
                warn!("Failed to read topic history from {:?}: {}", self.path, err);
                return Vec::new();
            }
        };

        match decode_topics(&content) {
            Some(topics) => topics,
            None => {
                warn!("Ignoring malformed topic history in {:?}", self.path);
                Vec::new()
            }
        }
    }

    fn save(&self, topics: &[String]) -> Result<(), StorageError> {
        let content = encode_topics(topics)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StorageError::Io(e.error))?;

        debug!("Saved {} topics to {:?}", topics.len(), self.path);
        Ok(())
    }
}

/// In-memory store holding the raw encoded value
///
/// Whatever string was last written (or seeded) is what the next `load`
/// decodes, so tests can plant malformed data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw value, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
            saves: Mutex::new(0),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        *self
            .saves
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TopicStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.raw()
            .and_then(|raw| decode_topics(&raw))
            .unwrap_or_default()
    }

    fn save(&self, topics: &[String]) -> Result<(), StorageError> {
        let encoded = encode_topics(topics)?;
        *self
            .raw
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(encoded);
        *self
            .saves
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn topics(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decode_drops_duplicates_keeping_first() {
        let decoded = decode_topics(r#"["a","b","a","c","b"]"#).unwrap();
        assert_eq!(decoded, topics(&["a", "b", "c"]));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_topics("not json").is_none());
        assert!(decode_topics(r#"{"topics":["a"]}"#).is_none());
        assert!(decode_topics("[1, 2]").is_none());
        assert!(decode_topics("null").is_none());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("topics.json"));

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_malformed_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("topics.json");
        fs::write(&path, "[\"alerts\",").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_round_trip_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested").join("topics.json"));

        store.save(&topics(&["zeta", "alpha", "mid"])).unwrap();

        assert_eq!(store.load(), topics(&["zeta", "alpha", "mid"]));
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, r#"["zeta","alpha","mid"]"#);
    }

    #[test]
    fn test_file_store_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("topics.json"));

        store.save(&topics(&["a", "b"])).unwrap();
        store.save(&topics(&["c"])).unwrap();

        assert_eq!(store.load(), topics(&["c"]));
    }

    #[test]
    fn test_memory_store_seeded_with_garbage_loads_empty() {
        let store = MemoryStore::with_raw("{{{");
        assert!(store.load().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_memory_store_save_replaces_raw() {
        let store = MemoryStore::with_raw("garbage");
        store.save(&topics(&["alerts"])).unwrap();

        assert_eq!(store.raw().as_deref(), Some(r#"["alerts"]"#));
        assert_eq!(store.load(), topics(&["alerts"]));
        assert_eq!(store.save_count(), 1);
    }
}

//! History service for previously used topics
//!
//! Keeps the in-memory topic list for the session and writes it through
//! the [`TopicStore`] whenever a new topic is used successfully.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::StorageError;
use crate::store::TopicStore;

/// History service
///
/// Topics are unique and kept in first-use order. A topic that is used
/// again keeps its original position.
#[derive(Clone)]
pub struct HistoryService {
    store: Arc<dyn TopicStore>,
    topics: Arc<Mutex<Vec<String>>>,
}

impl HistoryService {
    /// Create a history service, loading the stored topics once
    pub fn new(store: Arc<dyn TopicStore>) -> Self {
        let topics = store.load();
        debug!("Loaded {} saved topics", topics.len());
        Self {
            store,
            topics: Arc::new(Mutex::new(topics)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.topics.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the durable topic list
    pub fn load_topics(&self) -> Vec<String> {
        self.store.load()
    }

    /// Topics known to this session
    pub fn topics(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Oldest saved topic, used to preselect a new draft
    pub fn first(&self) -> Option<String> {
        self.lock().first().cloned()
    }

    /// Remember that `topic` was used
    ///
    /// The stored list is reloaded and merged first so topics written by
    /// another session are kept. Returns `true` if `topic` was new and the
    /// list was written back.
    pub fn record_topic_use(&self, topic: &str) -> Result<bool, StorageError> {
        let mut topics = self.lock();

        for stored in self.store.load() {
            if !topics.contains(&stored) {
                topics.push(stored);
            }
        }

        if topics.iter().any(|t| t == topic) {
            return Ok(false);
        }

        let mut updated = topics.clone();
        updated.push(topic.to_string());
        self.store.save(&updated)?;
        *topics = updated;

        debug!("Recorded new topic {}", topic);
        Ok(true)
    }
}

//! Service layer for ntfy Messenger
//!
//! This module provides the API consumed by the front ends (CLI, TUI) so
//! that neither of them talks to the network or the disk directly.
//!
//! # Architecture
//!
//! `MessengerService` is the facade. It owns the two ports and hands out
//! the sub-services built on them:
//!
//! - `SubmissionService`: validation, the single publish call, and the
//!   composer/history side effects
//! - `HistoryService`: the deduplicated list of used topics
//!
//! # Example
//!
//! ```no_run
//! use libntfy::service::MessengerService;
//!
//! # async fn example() -> libntfy::Result<()> {
//! let service = MessengerService::new()?;
//!
//! let mut composer = service.new_composer();
//! composer.set_topic("alerts");
//! composer.set_title("Build");
//! composer.set_body("passed ✅");
//!
//! match service.submission().submit(&mut composer).await {
//!     Ok(ack) => println!("Sent to {}", ack.topic),
//!     Err(e) => println!("{}", e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod history;
pub mod submission;

use std::sync::Arc;
use std::time::Duration;

use self::history::HistoryService;
use self::submission::SubmissionService;
use crate::composer::Composer;
use crate::publisher::ntfy::NtfyPublisher;
use crate::publisher::Publisher;
use crate::store::{JsonFileStore, TopicStore};
use crate::{Config, Result};

/// Main service facade
///
/// All sub-services share the same publisher and topic store.
pub struct MessengerService {
    config: Arc<Config>,
    submission: SubmissionService,
    history: HistoryService,
}

impl MessengerService {
    /// Create a service with configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration exists but cannot be read,
    /// or names an invalid server URL.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(config)
    }

    /// Create a service talking to the configured ntfy server
    ///
    /// Topic history is kept in the configured JSON file.
    pub fn from_config(config: Config) -> Result<Self> {
        let timeout = config.server.timeout_secs.map(Duration::from_secs);
        let publisher = NtfyPublisher::new(&config.server.url, timeout)?;
        let store = JsonFileStore::new(config.topics_path()?);
        Ok(Self::with_parts(config, Arc::new(publisher), Arc::new(store)))
    }

    /// Create a service from explicit ports
    pub fn with_parts(
        config: Config,
        publisher: Arc<dyn Publisher>,
        store: Arc<dyn TopicStore>,
    ) -> Self {
        let history = HistoryService::new(store);
        let submission = SubmissionService::new(publisher, history.clone());

        Self {
            config: Arc::new(config),
            submission,
            history,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the submission gateway
    pub fn submission(&self) -> &SubmissionService {
        &self.submission
    }

    /// Access the topic history
    pub fn history(&self) -> &HistoryService {
        &self.history
    }

    /// Topic a new draft starts with
    ///
    /// The configured default wins; otherwise the oldest saved topic.
    pub fn initial_topic(&self) -> Option<String> {
        self.config
            .defaults
            .topic
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| self.history.first())
    }

    /// Create an empty composer with the initial topic preselected
    pub fn new_composer(&self) -> Composer {
        match self.initial_topic() {
            Some(topic) => Composer::with_topic(topic),
            None => Composer::new(),
        }
    }
}

//! ntfy Messenger - compose and send messages to ntfy topics
//!
//! This library holds the composer state, the submission workflow and
//! the persisted topic history shared by the `ntfy-post` CLI and the
//! `ntfy-tui` terminal interface.

pub mod composer;
pub mod config;
pub mod error;
pub mod logging;
pub mod publisher;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use composer::Composer;
pub use config::Config;
pub use error::{NtfyError, PublishError, Result, StorageError, SubmissionError};
pub use types::{Ack, Draft, FailureReason, Message, SubmissionStatus};

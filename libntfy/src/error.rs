//! Error types for ntfy Messenger

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NtfyError>;

#[derive(Error, Debug)]
pub enum NtfyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("{0}")]
    Submission(#[from] SubmissionError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl NtfyError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NtfyError::InvalidInput(_) => 3,
            NtfyError::Submission(SubmissionError::Validation) => 3,
            NtfyError::Submission(_) => 1,
            NtfyError::Publish(_) => 1,
            NtfyError::Config(_) => 1,
            NtfyError::Storage(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode topics: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone)]
pub enum PublishError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid topic: {0:?}")]
    InvalidTopic(String),
}

/// Outcome of a rejected submission.
///
/// The `Display` output is the exact line shown to the user. Transport
/// details stay reachable through `source()` for logging.
#[derive(Error, Debug, Clone)]
pub enum SubmissionError {
    #[error("Please fill in all fields.")]
    Validation,

    #[error("Error sending message. Please try again.")]
    Delivery(#[source] PublishError),

    #[error("A message is already being sent.")]
    Busy,
}

//! Core types for ntfy Messenger

use serde::{Deserialize, Serialize};

/// Status line shown after a successful send
pub const SENT_MESSAGE: &str = "Message sent successfully!";

/// Status line shown while a message is in flight
pub const SENDING_MESSAGE: &str = "Sending message...";

/// The in-progress, unsent message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub topic: String,
    pub title: String,
    pub body: String,
}

impl Draft {
    pub fn new(
        topic: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Names of the fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.topic.is_empty() {
            missing.push("topic");
        }
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.body.is_empty() {
            missing.push("body");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build the outbound message, or `None` if any field is empty
    pub fn to_message(&self) -> Option<Message> {
        if !self.is_complete() {
            return None;
        }
        Some(Message {
            topic: self.topic.clone(),
            text: format!("{}: {}", self.title, self.body),
        })
    }
}

/// A validated message ready to publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub topic: String,
    /// Plain-text payload, `"{title}: {body}"`
    pub text: String,
}

/// Acknowledgement for a message the server accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub topic: String,
    /// Server-assigned message ID, when the response carried one
    pub id: Option<String>,
    /// Server timestamp (unix seconds), when the response carried one
    pub time: Option<i64>,
}

impl Ack {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            id: None,
            time: None,
        }
    }
}

/// Why the last submission did not go out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    MissingFields,
    Delivery,
}

/// State of the composer's last submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Sent,
    Failed(FailureReason),
}

impl SubmissionStatus {
    /// True once a submission has either gone out or failed
    pub fn is_finished(&self) -> bool {
        matches!(self, SubmissionStatus::Sent | SubmissionStatus::Failed(_))
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => Ok(()),
            SubmissionStatus::Validating => write!(f, "{}", SENDING_MESSAGE),
            SubmissionStatus::Sent => write!(f, "{}", SENT_MESSAGE),
            SubmissionStatus::Failed(FailureReason::MissingFields) => {
                write!(f, "Please fill in all fields.")
            }
            SubmissionStatus::Failed(FailureReason::Delivery) => {
                write!(f, "Error sending message. Please try again.")
            }
        }
    }
}

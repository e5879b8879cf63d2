//! Mock publisher implementation for testing
//!
//! A configurable in-memory publisher that can simulate successes,
//! failures and latency. It records every message it receives so tests
//! can assert on exactly what would have gone over the wire.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use super::Publisher;
use crate::error::PublishError;
use crate::types::{Ack, Message};

/// Configuration for mock publisher behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Error returned from every publish, `None` to succeed
    pub error: Option<PublishError>,

    /// Delay before completing (simulates network latency)
    pub delay: Duration,

    /// Messages received so far, shared with clones
    pub published: Arc<Mutex<Vec<Message>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            error: None,
            delay: Duration::from_millis(0),
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock publisher for testing
#[derive(Debug, Clone, Default)]
pub struct MockPublisher {
    config: MockConfig,
}

impl MockPublisher {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// A publisher that accepts everything
    pub fn success() -> Self {
        Self::default()
    }

    /// A publisher that fails every call with `error`
    pub fn failure(error: PublishError) -> Self {
        Self::new(MockConfig {
            error: Some(error),
            ..Default::default()
        })
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockConfig {
            delay,
            ..Default::default()
        })
    }

    /// Number of publish calls, successful or not
    pub fn publish_count(&self) -> usize {
        self.published().len()
    }

    /// Every message passed to `publish`, in call order
    pub fn published(&self) -> Vec<Message> {
        self.config
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, message: &Message) -> Result<Ack, PublishError> {
        self.config
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match self.config.error {
            Some(ref error) => Err(error.clone()),
            None => {
                let count = self.publish_count();
                Ok(Ack {
                    topic: message.topic.clone(),
                    id: Some(format!("mock-{}", count)),
                    time: None,
                })
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

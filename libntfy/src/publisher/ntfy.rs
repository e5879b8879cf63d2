//! ntfy HTTP publisher
//!
//! Publishes with a plain `POST {server}/{topic}` carrying the message as
//! `text/plain`. The topic is percent-encoded as a single path segment.
//! ntfy answers with a JSON description of the stored
//! message; its `id` and `time` are copied into the [`Ack`] when present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info};

use super::Publisher;
use crate::error::PublishError;
use crate::types::{Ack, Message};

#[derive(Debug, Deserialize)]
struct PublishResponse {
    id: Option<String>,
    time: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NtfyPublisher {
    server_url: String,
    base: Url,
    client: reqwest::Client,
}

impl NtfyPublisher {
    /// Create a publisher for `server_url`
    ///
    /// `timeout` of `None` keeps the transport default (no deadline).
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Result<Self, PublishError> {
        let trimmed = server_url.trim_end_matches('/');
        let base = Url::parse(trimmed)
            .map_err(|e| PublishError::InvalidUrl(format!("{}: {}", server_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(PublishError::InvalidUrl(server_url.to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PublishError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            server_url: trimmed.to_string(),
            base,
            client,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Endpoint a message for `topic` is posted to
    ///
    /// `.` and `..` would resolve to another path, so they are rejected.
    pub fn topic_url(&self, topic: &str) -> Result<Url, PublishError> {
        if topic.is_empty() || topic == "." || topic == ".." {
            return Err(PublishError::InvalidTopic(topic.to_string()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| PublishError::InvalidUrl(self.server_url.clone()))?
            .pop_if_empty()
            .push(topic);
        Ok(url)
    }
}

#[async_trait]
impl Publisher for NtfyPublisher {
    async fn publish(&self, message: &Message) -> Result<Ack, PublishError> {
        let url = self.topic_url(&message.topic)?;
        debug!("POST {} ({} bytes)", url, message.text.len());

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "text/plain")
            .body(message.text.clone())
            .send()
            .await
            .map_err(|e| PublishError::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Status {
                code: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let mut ack = Ack::new(&message.topic);
        match response.json::<PublishResponse>().await {
            Ok(parsed) => {
                ack.id = parsed.id;
                ack.time = parsed.time;
            }
            Err(e) => debug!("Response from {} was not a message receipt: {}", url, e),
        }

        info!("Published to topic {}", message.topic);
        Ok(ack)
    }

    fn name(&self) -> &str {
        "ntfy"
    }
}

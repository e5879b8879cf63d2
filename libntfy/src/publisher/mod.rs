//! Outbound transport for composed messages
//!
//! [`Publisher`] is the seam between the submission gateway and the
//! network. The gateway calls `publish` exactly once per submission and
//! never retries.
//!
//! # Examples
//!
//! ```no_run
//! use libntfy::publisher::{Publisher, ntfy::NtfyPublisher};
//! use libntfy::types::Message;
//!
//! # async fn example() -> Result<(), libntfy::error::PublishError> {
//! let publisher = NtfyPublisher::new("https://ntfy.sh", None)?;
//!
//! let message = Message {
//!     topic: "alerts".to_string(),
//!     text: "Build: passed".to_string(),
//! };
//!
//! let ack = publisher.publish(&message).await?;
//! println!("Delivered to {}", ack.topic);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::PublishError;
use crate::types::{Ack, Message};

pub mod ntfy;

// Available outside tests so integration tests and front ends can use it
pub mod mock;

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Deliver one message to its topic
    ///
    /// Any 2xx answer is an [`Ack`]. Transport failures and non-success
    /// statuses are errors.
    async fn publish(&self, message: &Message) -> Result<Ack, PublishError>;

    /// Short identifier used in logs (e.g. "ntfy", "mock")
    fn name(&self) -> &str;
}

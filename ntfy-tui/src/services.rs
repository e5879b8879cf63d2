//! Service layer adapter for TUI
//!
//! Bridges the async `MessengerService` to the synchronous event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: wraps `MessengerService` and owns a tokio runtime
//! - Submitting: validation runs on the UI thread; the publish call is
//!   spawned on the runtime and its outcome comes back on a crossbeam
//!   channel as a [`PendingSubmission`]
//! - The outcome is applied with [`ServiceHandle::finish_submit`], which
//!   updates the composer and the topic history
//!
//! # Example
//!
//! ```no_run
//! use ntfy_tui::services::ServiceHandle;
//!
//! # fn example() -> ntfy_tui::error::Result<()> {
//! let services = ServiceHandle::new()?;
//! let mut composer = services.new_composer();
//! composer.set_title("Build");
//! composer.set_body("passed");
//!
//! if let Some(pending) = services.begin_submit(&mut composer) {
//!     // In the event loop, poll until the outcome arrives
//!     if let Some(outcome) = pending.poll() {
//!         services.finish_submit(&mut composer, &pending, outcome);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use libntfy::service::MessengerService;
use libntfy::{Ack, Composer, Message, PublishError, SubmissionError};
use tracing::{debug, warn};

use crate::error::Result;

type Outcome = std::result::Result<Ack, SubmissionError>;

/// Service handle for TUI operations
pub struct ServiceHandle {
    service: Arc<MessengerService>,
    runtime: tokio::runtime::Runtime,
}

/// A message handed to the runtime and not yet applied to the composer
pub struct PendingSubmission {
    message: Message,
    rx: Receiver<Outcome>,
}

impl PendingSubmission {
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Non-blocking check for the outcome
    ///
    /// A task that stopped without reporting counts as a delivery failure.
    pub fn poll(&self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(SubmissionError::Delivery(
                PublishError::Network("submission task stopped".to_string()),
            ))),
        }
    }

    /// Block until the outcome arrives
    pub fn wait(&self) -> Outcome {
        self.rx.recv().unwrap_or_else(|_| {
            Err(SubmissionError::Delivery(PublishError::Network(
                "submission task stopped".to_string(),
            )))
        })
    }
}

impl ServiceHandle {
    /// Create a new service handle with configuration from the default
    /// location
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the
    /// tokio runtime cannot be created.
    pub fn new() -> Result<Self> {
        Self::from_service(MessengerService::new()?)
    }

    /// Wrap an already configured service
    pub fn from_service(service: MessengerService) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            service: Arc::new(service),
            runtime,
        })
    }

    /// A composer with the initial topic preselected
    pub fn new_composer(&self) -> Composer {
        self.service.new_composer()
    }

    /// Topics saved so far
    pub fn topics(&self) -> Vec<String> {
        self.service.history().topics()
    }

    /// Validate the draft and start publishing it
    ///
    /// Returns `None` if nothing was sent; the composer's status already
    /// says why.
    pub fn begin_submit(&self, composer: &mut Composer) -> Option<PendingSubmission> {
        let submission = self.service.submission().clone();
        let message = match submission.begin(composer) {
            Ok(message) => message,
            Err(e) => {
                debug!("Submission not started: {}", e);
                return None;
            }
        };

        let (tx, rx) = bounded(1);
        let task_message = message.clone();
        self.runtime.spawn(async move {
            let outcome = submission.deliver(&task_message).await;
            if tx.send(outcome).is_err() {
                warn!("Submission outcome dropped, UI already closed");
            }
        });

        Some(PendingSubmission { message, rx })
    }

    /// Apply an outcome to the composer and the topic history
    pub fn finish_submit(
        &self,
        composer: &mut Composer,
        pending: &PendingSubmission,
        outcome: Outcome,
    ) -> Outcome {
        self.service
            .submission()
            .finish(composer, &pending.message, outcome)
    }
}

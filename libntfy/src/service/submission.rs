//! Submission gateway
//!
//! Turns the composer's draft into exactly one publish call and applies
//! the outcome back onto the composer. The workflow is split into
//! [`begin`](SubmissionService::begin), [`deliver`](SubmissionService::deliver)
//! and [`finish`](SubmissionService::finish) so a front end can run the
//! network step off its UI thread; [`submit`](SubmissionService::submit)
//! runs all three in sequence.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::history::HistoryService;
use crate::composer::Composer;
use crate::error::SubmissionError;
use crate::publisher::Publisher;
use crate::types::{Ack, Message};

/// Submission service
#[derive(Clone)]
pub struct SubmissionService {
    publisher: Arc<dyn Publisher>,
    history: HistoryService,
}

impl SubmissionService {
    pub fn new(publisher: Arc<dyn Publisher>, history: HistoryService) -> Self {
        Self { publisher, history }
    }

    /// Validate the draft and mark the composer as sending
    ///
    /// # Errors
    ///
    /// - `Busy` if an earlier submission has not finished; the composer
    ///   is left untouched.
    /// - `Validation` if topic, title or body is empty; the status
    ///   becomes `Failed(MissingFields)` and nothing is sent.
    pub fn begin(&self, composer: &mut Composer) -> Result<Message, SubmissionError> {
        if composer.is_sending() {
            debug!("Submission ignored, another one is in flight");
            return Err(SubmissionError::Busy);
        }

        match composer.draft().to_message() {
            Some(message) => {
                composer.mark_validating();
                Ok(message)
            }
            None => {
                debug!("Missing fields: {:?}", composer.draft().missing_fields());
                composer.mark_missing_fields();
                Err(SubmissionError::Validation)
            }
        }
    }

    /// Publish `message` once
    pub async fn deliver(&self, message: &Message) -> Result<Ack, SubmissionError> {
        match self.publisher.publish(message).await {
            Ok(ack) => Ok(ack),
            Err(e) => {
                warn!(
                    "Failed to publish to {} via {}: {}",
                    message.topic,
                    self.publisher.name(),
                    e
                );
                Err(SubmissionError::Delivery(e))
            }
        }
    }

    /// Apply a delivery outcome to the composer and the topic history
    ///
    /// On success the title and body are cleared and the topic is
    /// recorded. On failure the draft is kept so the user can retry.
    pub fn finish(
        &self,
        composer: &mut Composer,
        message: &Message,
        outcome: Result<Ack, SubmissionError>,
    ) -> Result<Ack, SubmissionError> {
        match outcome {
            Ok(ack) => {
                composer.mark_sent();
                if let Err(e) = self.history.record_topic_use(&message.topic) {
                    warn!("Failed to save topic {}: {}", message.topic, e);
                }
                info!("Message sent to {}", message.topic);
                Ok(ack)
            }
            Err(e) => {
                composer.mark_delivery_failed();
                Err(e)
            }
        }
    }

    /// Validate, publish and apply the outcome in one call
    pub async fn submit(&self, composer: &mut Composer) -> Result<Ack, SubmissionError> {
        let message = self.begin(composer)?;
        let outcome = self.deliver(&message).await;
        self.finish(composer, &message, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PublishError;
    use crate::publisher::mock::MockPublisher;
    use crate::store::{MemoryStore, TopicStore};
    use crate::types::{Draft, FailureReason, SubmissionStatus};

    fn setup(publisher: MockPublisher) -> (SubmissionService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let history = HistoryService::new(store.clone());
        (SubmissionService::new(Arc::new(publisher), history), store)
    }

    fn filled() -> Composer {
        let mut composer = Composer::with_topic("alerts");
        composer.set_title("Build");
        composer.set_body("passed");
        composer
    }

    #[tokio::test]
    async fn test_begin_rejects_while_sending() {
        let (service, _store) = setup(MockPublisher::success());
        let mut composer = filled();

        service.begin(&mut composer).unwrap();
        let second = service.begin(&mut composer);

        assert!(matches!(second, Err(SubmissionError::Busy)));
        assert_eq!(composer.status(), SubmissionStatus::Validating);
    }

    #[tokio::test]
    async fn test_begin_marks_missing_fields() {
        let (service, _store) = setup(MockPublisher::success());
        let mut composer = Composer::with_topic("alerts");

        let result = service.begin(&mut composer);

        assert!(matches!(result, Err(SubmissionError::Validation)));
        assert_eq!(
            composer.status(),
            SubmissionStatus::Failed(FailureReason::MissingFields)
        );
        assert!(!composer.is_sending());
    }

    #[tokio::test]
    async fn test_submit_success_clears_and_records() {
        let publisher = MockPublisher::success();
        let (service, store) = setup(publisher.clone());
        let mut composer = filled();

        let ack = service.submit(&mut composer).await.unwrap();

        assert_eq!(ack.topic, "alerts");
        assert_eq!(composer.draft(), &Draft::new("alerts", "", ""));
        assert_eq!(composer.status(), SubmissionStatus::Sent);
        assert_eq!(publisher.published()[0].text, "Build: passed");
        assert_eq!(store.load(), vec!["alerts"]);
    }

    #[tokio::test]
    async fn test_finish_records_submitted_topic_not_current_one() {
        let (service, store) = setup(MockPublisher::success());
        let mut composer = filled();

        let message = service.begin(&mut composer).unwrap();
        composer.set_topic("changed-meanwhile");
        let outcome = service.deliver(&message).await;
        service.finish(&mut composer, &message, outcome).unwrap();

        assert_eq!(store.load(), vec!["alerts"]);
        assert_eq!(composer.draft().topic, "changed-meanwhile");
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft() {
        let (service, store) = setup(MockPublisher::failure(PublishError::Status {
            code: 502,
            body: "bad gateway".to_string(),
        }));
        let mut composer = filled();

        let result = service.submit(&mut composer).await;

        assert!(matches!(result, Err(SubmissionError::Delivery(_))));
        assert_eq!(composer.draft(), &Draft::new("alerts", "Build", "passed"));
        assert_eq!(
            composer.status(),
            SubmissionStatus::Failed(FailureReason::Delivery)
        );
        assert!(!composer.is_sending());
        assert!(store.raw().is_none());
    }
}

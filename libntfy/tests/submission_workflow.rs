//! Integration tests for MessengerService
//!
//! Drives the composer through the service facade with a mock publisher
//! and both topic store implementations.

use std::sync::Arc;

use libntfy::publisher::mock::MockPublisher;
use libntfy::service::MessengerService;
use libntfy::store::{JsonFileStore, MemoryStore, TopicStore};
use libntfy::{Config, Draft, FailureReason, PublishError, SubmissionError, SubmissionStatus};
use tempfile::TempDir;

fn setup(publisher: MockPublisher) -> (MessengerService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service =
        MessengerService::with_parts(Config::default_config(), Arc::new(publisher), store.clone());
    (service, store)
}

#[tokio::test]
async fn test_successful_send_posts_title_and_body() {
    let publisher = MockPublisher::success();
    let (service, store) = setup(publisher.clone());

    let mut composer = service.new_composer();
    composer.set_topic("alerts");
    composer.set_title("Build");
    composer.set_body("passed ");
    composer.append_emoji("✅");

    service.submission().submit(&mut composer).await.unwrap();

    let published = publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].topic, "alerts");
    assert_eq!(published[0].text, "Build: passed ✅");

    assert_eq!(composer.draft(), &Draft::new("alerts", "", ""));
    assert_eq!(composer.status(), SubmissionStatus::Sent);
    assert_eq!(composer.status().to_string(), "Message sent successfully!");
    assert_eq!(store.load(), vec!["alerts"]);
}

#[tokio::test]
async fn test_incomplete_draft_is_never_sent() {
    let publisher = MockPublisher::success();
    let (service, store) = setup(publisher.clone());

    let cases = [("", "t", "b"), ("a", "", "b"), ("a", "t", ""), ("", "", "")];
    for (topic, title, body) in cases {
        let mut composer = service.new_composer();
        composer.set_topic(topic);
        composer.set_title(title);
        composer.set_body(body);

        let result = service.submission().submit(&mut composer).await;

        assert!(matches!(result, Err(SubmissionError::Validation)));
        assert_eq!(
            composer.status(),
            SubmissionStatus::Failed(FailureReason::MissingFields)
        );
        assert_eq!(composer.draft(), &Draft::new(topic, title, body));
    }

    assert_eq!(publisher.publish_count(), 0);
    assert!(store.raw().is_none());
}

#[tokio::test]
async fn test_delivery_failure_keeps_draft_for_retry() {
    let publisher = MockPublisher::failure(PublishError::Network("connection refused".into()));
    let (service, store) = setup(publisher.clone());

    let mut composer = service.new_composer();
    composer.set_topic("alerts");
    composer.set_title("Build");
    composer.set_body("failed");

    let result = service.submission().submit(&mut composer).await;

    assert!(matches!(result, Err(SubmissionError::Delivery(_))));
    assert_eq!(publisher.publish_count(), 1);
    assert_eq!(composer.draft(), &Draft::new("alerts", "Build", "failed"));
    assert_eq!(
        composer.status().to_string(),
        "Error sending message. Please try again."
    );
    assert!(service.history().topics().is_empty());
    assert!(store.raw().is_none());
}

#[tokio::test]
async fn test_repeated_topic_is_saved_once() {
    let (service, store) = setup(MockPublisher::success());

    for body in ["one", "two", "three"] {
        let mut composer = service.new_composer();
        composer.set_topic("x");
        composer.set_title("t");
        composer.set_body(body);
        service.submission().submit(&mut composer).await.unwrap();
    }

    assert_eq!(service.history().topics(), vec!["x"]);
    assert_eq!(store.load(), vec!["x"]);
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_topics_keep_first_use_order() {
    let (service, store) = setup(MockPublisher::success());

    for topic in ["a", "b", "a"] {
        let mut composer = service.new_composer();
        composer.set_topic(topic);
        composer.set_title("t");
        composer.set_body("b");
        service.submission().submit(&mut composer).await.unwrap();
    }

    assert_eq!(store.load(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_emoji_selection_appends_to_body() {
    let (service, _store) = setup(MockPublisher::success());

    let mut composer = service.new_composer();
    composer.set_body("Hi");
    composer.toggle_picker_visible();
    assert!(composer.picker_visible());

    composer.select_emoji("😀");

    assert_eq!(composer.draft().body, "Hi😀");
    assert!(!composer.picker_visible());
}

#[tokio::test]
async fn test_fresh_session_sees_saved_topics() {
    let temp_dir = TempDir::new().unwrap();
    let topics_path = temp_dir.path().join("nested").join("topics.json");

    {
        let store = Arc::new(JsonFileStore::new(&topics_path));
        let service = MessengerService::with_parts(
            Config::default_config(),
            Arc::new(MockPublisher::success()),
            store,
        );
        for topic in ["deploys", "alerts"] {
            let mut composer = service.new_composer();
            composer.set_topic(topic);
            composer.set_title("t");
            composer.set_body("b");
            service.submission().submit(&mut composer).await.unwrap();
        }
    }

    let raw = std::fs::read_to_string(&topics_path).unwrap();
    let on_disk: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, vec!["deploys", "alerts"]);

    let store = Arc::new(JsonFileStore::new(&topics_path));
    let service = MessengerService::with_parts(
        Config::default_config(),
        Arc::new(MockPublisher::success()),
        store,
    );

    assert_eq!(service.history().topics(), vec!["deploys", "alerts"]);
    assert_eq!(service.new_composer().draft().topic, "deploys");
}

#[tokio::test]
async fn test_configured_default_topic_wins_over_history() {
    let store = Arc::new(MemoryStore::with_raw(r#"["alerts"]"#));
    let mut config = Config::default_config();
    config.defaults.topic = Some("builds".to_string());

    let service = MessengerService::with_parts(config, Arc::new(MockPublisher::success()), store);

    assert_eq!(service.new_composer().draft().topic, "builds");
}

#[tokio::test]
async fn test_new_composer_without_history_is_empty() {
    let (service, _store) = setup(MockPublisher::success());

    let composer = service.new_composer();

    assert_eq!(composer.draft(), &Draft::default());
    assert_eq!(composer.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_from_config_uses_configured_topics_file() {
    let temp_dir = TempDir::new().unwrap();
    let topics_path = temp_dir.path().join("topics.json");
    std::fs::write(&topics_path, r#"["ops","ops","builds"]"#).unwrap();

    let mut config = Config::default_config();
    config.storage.topics_file = Some(topics_path.to_string_lossy().into_owned());

    let service = MessengerService::from_config(config).unwrap();

    assert_eq!(service.history().topics(), vec!["ops", "builds"]);
}

//! Composer state
//!
//! Holds the current draft, the emoji picker flag and the status of the
//! last submission. Field setters never validate; validation happens when
//! the draft is handed to [`SubmissionService`](crate::service::submission::SubmissionService).
//!
//! Status and the in-flight flag are private to the crate so that only
//! the submission gateway can move the composer between states.

use crate::types::{Draft, FailureReason, SubmissionStatus};

#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: Draft,
    picker_visible: bool,
    status: SubmissionStatus,
    sending: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft with a preselected topic
    pub fn with_topic(topic: impl Into<String>) -> Self {
        Self {
            draft: Draft {
                topic: topic.into(),
                ..Draft::default()
            },
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn picker_visible(&self) -> bool {
        self.picker_visible
    }

    /// True while a submitted message is waiting on the server
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn set_topic(&mut self, value: impl Into<String>) {
        self.draft.topic = value.into();
        self.touch();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
        self.touch();
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.draft.body = value.into();
        self.touch();
    }

    /// Append a symbol to the end of the body
    pub fn append_emoji(&mut self, symbol: &str) {
        self.draft.body.push_str(symbol);
        self.touch();
    }

    pub fn toggle_picker_visible(&mut self) {
        self.picker_visible = !self.picker_visible;
    }

    /// Picker dismissed without a selection
    pub fn hide_picker(&mut self) {
        self.picker_visible = false;
    }

    /// Picker selection: append and close
    pub fn select_emoji(&mut self, symbol: &str) {
        self.append_emoji(symbol);
        self.picker_visible = false;
    }

    // An edit after a finished submission starts a new cycle.
    fn touch(&mut self) {
        if self.status.is_finished() {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub(crate) fn mark_validating(&mut self) {
        self.status = SubmissionStatus::Validating;
        self.sending = true;
    }

    pub(crate) fn mark_missing_fields(&mut self) {
        self.status = SubmissionStatus::Failed(FailureReason::MissingFields);
    }

    pub(crate) fn mark_sent(&mut self) {
        self.draft.title.clear();
        self.draft.body.clear();
        self.status = SubmissionStatus::Sent;
        self.sending = false;
    }

    pub(crate) fn mark_delivery_failed(&mut self) {
        self.status = SubmissionStatus::Failed(FailureReason::Delivery);
        self.sending = false;
    }
}

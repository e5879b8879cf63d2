//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`),
//! except the submission status, which only the libntfy submission
//! gateway may change.

use libntfy::Composer;

/// Root application state
///
/// This is the single source of truth for the entire application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Draft, picker flag and submission status
    pub composer: Composer,

    /// Field receiving text input
    pub focus: Field,

    /// Saved topics, in first-use order
    pub topics: Vec<String>,

    /// Entry of `topics` currently shown in the topic field
    pub topic_index: Option<usize>,

    /// Highlighted cell in the emoji picker
    pub picker_index: usize,

    /// Ctrl+S was pressed and the event loop has not started sending yet
    pub submit_requested: bool,

    /// UI configuration
    pub config: UiConfig,
}

/// Form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Topic,
    Title,
    Body,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Topic, Field::Title, Field::Body];

    pub fn next(self) -> Self {
        match self {
            Field::Topic => Field::Title,
            Field::Title => Field::Body,
            Field::Body => Field::Topic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Topic => Field::Body,
            Field::Title => Field::Topic,
            Field::Body => Field::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Topic => "Topic",
            Field::Title => "Title",
            Field::Body => "Message",
        }
    }

    /// Whether Enter inserts a line break
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Body)
    }
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            composer: Composer::new(),
            focus: Field::default(),
            topics: Vec::new(),
            topic_index: None,
            picker_index: 0,
            submit_requested: false,
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var_os("NO_COLOR").is_none()
            && std::env::var_os("NTFY_TUI_NO_COLOR").is_none();

        let tick_rate_ms = std::env::var("NTFY_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state for a session with a prepared composer and saved topics
    ///
    /// Focus starts on the title when the topic is already filled in.
    pub fn with_session(composer: Composer, topics: Vec<String>) -> Self {
        let topic_index = topics.iter().position(|t| *t == composer.draft().topic);
        let focus = if composer.draft().topic.is_empty() {
            Field::Topic
        } else {
            Field::Title
        };

        Self {
            composer,
            focus,
            topics,
            topic_index,
            ..Self::default()
        }
    }

    /// Current value of `field`
    pub fn field_value(&self, field: Field) -> &str {
        let draft = self.composer.draft();
        match field {
            Field::Topic => &draft.topic,
            Field::Title => &draft.title,
            Field::Body => &draft.body,
        }
    }

    /// Is an overlay capturing the keyboard?
    pub fn overlay_active(&self) -> bool {
        self.help_visible || self.composer.picker_visible()
    }

    /// Can Ctrl+S start a submission right now?
    pub fn can_submit(&self) -> bool {
        !self.composer.is_sending() && !self.submit_requested
    }
}

//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;

use super::state::Field;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick, used to poll the in-flight submission
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    ShowHelp,
    HideHelp,

    /// Move focus to the next field (Tab)
    FocusNext,

    /// Move focus to the previous field (Shift+Tab)
    FocusPrev,

    // === Form ===
    /// A field editor changed its content
    FieldChanged(Field, String),

    /// Select the next saved topic
    TopicNext,

    /// Select the previous saved topic
    TopicPrev,

    /// Saved topics were (re)loaded from the history
    TopicsLoaded(Vec<String>),

    // === Emoji Picker ===
    TogglePicker,
    PickerMove(PickerMove),

    /// Append the highlighted emoji and close the picker
    PickerSelect,

    /// Close the picker without a selection
    PickerDismiss,

    // === Submission ===
    /// User asked to send the draft
    SubmitRequested,

    /// The event loop picked up the request
    SubmitStarted,
}

/// Direction of a picker cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMove {
    Left,
    Right,
    Up,
    Down,
}

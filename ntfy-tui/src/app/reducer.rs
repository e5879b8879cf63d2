//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State` with no side effects. Keybindings are
//! defined here too; keys that are plain text input are left to the
//! field editors (see [`is_text_input`]).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, PickerMove};
use super::emoji::{self, PICKER_COLUMNS};
use super::state::{AppState, Field};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No network requests
/// - No file I/O
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut state = state;

    match action {
        Action::Key(key) => return handle_key(state, key),
        Action::Tick | Action::Resize(_, _) => {}

        Action::Quit => state.should_quit = true,
        Action::ShowHelp => state.help_visible = true,
        Action::HideHelp => state.help_visible = false,
        Action::FocusNext => state.focus = state.focus.next(),
        Action::FocusPrev => state.focus = state.focus.prev(),

        Action::FieldChanged(field, value) => {
            // Cursor movement reports an unchanged value
            if state.field_value(field) == value {
                return state;
            }
            match field {
                Field::Topic => {
                    state.topic_index = state.topics.iter().position(|t| *t == value);
                    state.composer.set_topic(value);
                }
                Field::Title => state.composer.set_title(value),
                Field::Body => state.composer.set_body(value),
            }
        }

        Action::TopicNext => return cycle_topic(state, true),
        Action::TopicPrev => return cycle_topic(state, false),

        Action::TopicsLoaded(topics) => {
            state.topic_index = topics
                .iter()
                .position(|t| t == &state.composer.draft().topic);
            state.topics = topics;
        }

        Action::TogglePicker => {
            state.composer.toggle_picker_visible();
            state.picker_index = 0;
        }
        Action::PickerMove(direction) => {
            state.picker_index = move_picker(state.picker_index, direction);
        }
        Action::PickerSelect => {
            if let Some(symbol) = emoji::get(state.picker_index) {
                state.composer.select_emoji(symbol);
            }
        }
        Action::PickerDismiss => state.composer.hide_picker(),

        Action::SubmitRequested => {
            if state.can_submit() {
                state.submit_requested = true;
            }
        }
        Action::SubmitStarted => state.submit_requested = false,
    }

    state
}

/// Does `key` belong to the focused field editor?
///
/// False for every key bound in [`reduce`] and whenever an overlay is
/// open, so the editor and the keymap never both see a key.
pub fn is_text_input(state: &AppState, key: &KeyEvent) -> bool {
    if state.overlay_active() {
        return false;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q' | 's' | 'e') if ctrl => false,
        KeyCode::F(_) | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => false,
        KeyCode::Up | KeyCode::Down if state.focus == Field::Topic => false,
        KeyCode::Enter => state.focus.is_multiline(),
        _ => true,
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings (work everywhere)
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return reduce(state, Action::Quit),
        KeyCode::F(1) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }
        _ => {}
    }

    if state.help_visible {
        return match key.code {
            KeyCode::Esc => reduce(state, Action::HideHelp),
            _ => state,
        };
    }

    if state.composer.picker_visible() {
        return handle_picker_key(state, key);
    }

    match key.code {
        KeyCode::Char('s') if ctrl => reduce(state, Action::SubmitRequested),
        KeyCode::Char('e') if ctrl => reduce(state, Action::TogglePicker),
        KeyCode::Tab => reduce(state, Action::FocusNext),
        KeyCode::BackTab => reduce(state, Action::FocusPrev),
        KeyCode::Down if state.focus == Field::Topic => reduce(state, Action::TopicNext),
        KeyCode::Up if state.focus == Field::Topic => reduce(state, Action::TopicPrev),
        _ => state,
    }
}

fn handle_picker_key(state: AppState, key: KeyEvent) -> AppState {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Left => reduce(state, Action::PickerMove(PickerMove::Left)),
        KeyCode::Right => reduce(state, Action::PickerMove(PickerMove::Right)),
        KeyCode::Up => reduce(state, Action::PickerMove(PickerMove::Up)),
        KeyCode::Down => reduce(state, Action::PickerMove(PickerMove::Down)),
        KeyCode::Enter => reduce(state, Action::PickerSelect),
        KeyCode::Esc => reduce(state, Action::PickerDismiss),
        KeyCode::Char('e') if ctrl => reduce(state, Action::TogglePicker),
        _ => state,
    }
}

fn cycle_topic(mut state: AppState, forward: bool) -> AppState {
    let len = state.topics.len();
    if len == 0 {
        return state;
    }

    let index = match (state.topic_index, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };

    state.topic_index = Some(index);
    state.composer.set_topic(state.topics[index].clone());
    state
}

fn move_picker(index: usize, direction: PickerMove) -> usize {
    let last = emoji::EMOJIS.len().saturating_sub(1);

    match direction {
        PickerMove::Left => index.saturating_sub(1),
        PickerMove::Right => (index + 1).min(last),
        PickerMove::Up => index.checked_sub(PICKER_COLUMNS).unwrap_or(index),
        PickerMove::Down => {
            let below = index + PICKER_COLUMNS;
            if below <= last {
                below
            } else {
                index
            }
        }
    }
}

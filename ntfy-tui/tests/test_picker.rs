//! Test the emoji picker overlay through the reducer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ntfy_tui::app::emoji::{EMOJIS, PICKER_COLUMNS};
use ntfy_tui::app::{reduce, Action, AppState, Field};

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn open_picker(state: AppState) -> AppState {
    reduce(
        state,
        Action::Key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL)),
    )
}

#[test]
fn test_picker_opens_on_first_emoji() {
    let state = open_picker(AppState::new());

    assert!(state.composer.picker_visible());
    assert_eq!(state.picker_index, 0);
}

#[test]
fn test_enter_appends_and_closes() {
    let state = reduce(
        AppState::new(),
        Action::FieldChanged(Field::Body, "Hi".to_string()),
    );
    let state = open_picker(state);

    let state = press(state, KeyCode::Enter);

    assert_eq!(state.field_value(Field::Body), format!("Hi{}", EMOJIS[0]));
    assert!(!state.composer.picker_visible());
}

#[test]
fn test_arrows_move_selection() {
    let state = open_picker(AppState::new());

    let state = press(state, KeyCode::Right);
    assert_eq!(state.picker_index, 1);
    let state = press(state, KeyCode::Down);
    assert_eq!(state.picker_index, 1 + PICKER_COLUMNS);
    let state = press(state, KeyCode::Left);
    assert_eq!(state.picker_index, PICKER_COLUMNS);
    let state = press(state, KeyCode::Up);
    assert_eq!(state.picker_index, 0);

    let state = press(state, KeyCode::Enter);
    assert_eq!(state.field_value(Field::Body), EMOJIS[0]);
}

#[test]
fn test_selected_emoji_is_appended() {
    let state = open_picker(AppState::new());
    let state = press(state, KeyCode::Right);
    let state = press(state, KeyCode::Right);

    let state = press(state, KeyCode::Enter);

    assert_eq!(state.field_value(Field::Body), EMOJIS[2]);
}

#[test]
fn test_esc_dismisses_without_selection() {
    let state = open_picker(AppState::new());

    let state = press(state, KeyCode::Esc);

    assert!(!state.composer.picker_visible());
    assert_eq!(state.field_value(Field::Body), "");
}

#[test]
fn test_picker_keys_do_not_reach_form() {
    let state = open_picker(AppState::new());
    assert_eq!(state.focus, Field::Topic);

    let state = press(state, KeyCode::Tab);

    assert_eq!(state.focus, Field::Topic);
    assert!(state.composer.picker_visible());
}

#[test]
fn test_ctrl_e_closes_picker() {
    let state = open_picker(AppState::new());
    let state = open_picker(state);

    assert!(!state.composer.picker_visible());
}

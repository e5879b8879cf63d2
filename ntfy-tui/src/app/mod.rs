//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! Anything that talks to the network or the disk (submitting, loading
//! topics) happens in the event loop, never in the reducer.

pub mod actions;
pub mod emoji;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, PickerMove};
pub use reducer::{is_text_input, reduce};
pub use state::{AppState, Field, UiConfig};

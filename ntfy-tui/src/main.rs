//! ntfy-tui - Terminal UI for ntfy Messenger
//!
//! Interactive form for composing a message (topic, title, body with an
//! emoji picker) and sending it to an ntfy topic.

use libntfy::{config, logging};
use ntfy_tui::{
    app::{event::EventHandler, event::TuiEvent, is_text_input, reduce, Action, AppState},
    error::Result,
    services::{PendingSubmission, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, editors::FieldEditors},
};
use tracing::{debug, info};

const LOG_FILE: &str = "ntfy-tui.log";

fn main() -> Result<()> {
    init_logging();

    // Load config and history before touching the terminal so errors
    // are printed normally
    let services = ServiceHandle::new()?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &services);

    restore_terminal(terminal)?;

    result
}

// Logs go to a file; stderr would draw over the alternate screen.
fn init_logging() {
    let Ok(data_dir) = config::resolve_data_path() else {
        return;
    };
    if let Err(e) = logging::from_env(false).init_to_file(&data_dir.join(LOG_FILE)) {
        eprintln!("Warning: file logging disabled: {}", e);
    }
}

fn run_app(terminal: &mut Tui, services: &ServiceHandle) -> Result<()> {
    let mut state = AppState::with_session(services.new_composer(), services.topics());
    let mut editors = FieldEditors::new(&state);
    let mut pending: Option<PendingSubmission> = None;

    let event_handler = EventHandler::new(state.config.tick_rate_ms);
    info!("ntfy-tui started with {} saved topics", state.topics.len());

    loop {
        terminal.draw(|frame| ui::render(frame, &state, &mut editors))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) if is_text_input(&state, &key) => {
                let value = editors.input(state.focus, key);
                Action::FieldChanged(state.focus, value)
            }
            other => other.into(),
        };
        state = reduce(state, action);

        if state.submit_requested {
            state = reduce(state, Action::SubmitStarted);
            if let Some(submission) = services.begin_submit(&mut state.composer) {
                pending = Some(submission);
            }
        }

        if let Some(outcome) = pending.as_ref().and_then(PendingSubmission::poll) {
            if let Some(submission) = pending.take() {
                if let Err(e) = services.finish_submit(&mut state.composer, &submission, outcome) {
                    debug!("Submission to {} failed: {}", submission.message().topic, e);
                }
                state = reduce(state, Action::TopicsLoaded(services.topics()));
            }
        }

        editors.sync(&state);

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

//! Main TUI runner - terminal lifecycle and event loop

use tokio::sync::mpsc;

use synthesia_app::process::process_message;
use synthesia_app::signals;
use synthesia_app::{AppState, Message};
use synthesia_core::prelude::*;

use crate::{event, render, terminal};

/// Take over the terminal and run until the user quits.
///
/// `state` arrives fully wired: catalog loaded, theme context installed and
/// the start route applied. The terminal is restored on every exit path,
/// panics included.
pub async fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(terminal::init_error)?;

    // External messages (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx);

    let result = match term.size() {
        Ok(size) => {
            process_message(
                &mut state,
                Message::Resize {
                    width: size.width,
                    height: size.height,
                },
            );
            info!("Terminal {}x{}", size.width, size.height);
            run_loop(&mut term, &mut state, msg_rx)
        }
        Err(e) => Err(terminal::init_error(e)),
    };

    ratatui::restore();
    result
}

/// Drain external messages, draw, then wait briefly for input.
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    debug!("Event loop finished on {}", state.current_path());
    Ok(())
}

//! TUI mode execution

use super::{
    SessionData,
    setup::stop_workers,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the dashboard in the terminal UI
///
/// Sets up the terminal, runs the UI loop until the user quits, restores the
/// terminal and waits for the refresh worker to stop.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.environment, session.refresh_interval);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(with_background, session.refresh_interval);
    let app = ui::App::new(
        session.environment.clone(),
        session.event_receiver,
        session.refresh_sender,
        session.shutdown_sender.clone(),
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    let cleanup = restore_terminal(&mut terminal);

    // The worker must stop even when the UI loop or cleanup failed
    print_session_shutdown();
    stop_workers(&session.shutdown_sender, session.join_handles).await;

    result?;
    cleanup?;
    print_session_exit_success();

    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::QUICK_ACTIONS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            refresh_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Loan statistics dashboard.
    Dashboard(Box<DashboardState>),
}

/// What the loop should do after a key press
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment stats are fetched from.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the refresh worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Events received while the splash screen is up, replayed into the dashboard.
    splash_backlog: VecDeque<WorkerEvent>,

    /// Asks the refresh worker for an immediate cycle.
    refresh_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to the worker.
    shutdown_sender: broadcast::Sender<()>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        refresh_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            splash_backlog: VecDeque::new(),
            refresh_sender,
            shutdown_sender,
            ui_config,
        }
    }

    fn open_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        // The startup cycle usually finishes before the splash is dismissed
        for event in self.splash_backlog.drain(..) {
            state.add_event(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
            let _ = self.shutdown_sender.send(());
            return KeyOutcome::Quit;
        }

        match &mut self.current_screen {
            // Any key press skips the splash screen
            Screen::Splash => self.open_dashboard(),
            Screen::Dashboard(state) => {
                if state.dismiss_popup() {
                    return KeyOutcome::Continue;
                }
                match code {
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        // A full queue means a refresh is already pending
                        if self.refresh_sender.try_send(()).is_err() {
                            log::debug!("Refresh request dropped: queue full");
                        }
                    }
                    KeyCode::Char('a') | KeyCode::Char('A') => {
                        state.show_popup("Redirecting to pending applications...");
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        let index = (c as usize) - ('1' as usize);
                        state.show_popup(format!(
                            "{} - This would navigate to the appropriate page.",
                            QUICK_ACTIONS[index]
                        ));
                    }
                    _ => {}
                }
            }
        }
        KeyOutcome::Continue
    }

    /// Move queued worker events into the dashboard.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match &mut self.current_screen {
                Screen::Splash => self.splash_backlog.push_back(event),
                Screen::Dashboard(state) => state.add_event(event),
            }
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        app.drain_events();

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration
        {
            app.open_dashboard();
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CyclePhase;
    use crate::stats::FetchOutcome;
    use crate::ui::dashboard::state::DashboardPhase;
    use crate::ui::dashboard::surfaces::StatField;

    struct Harness {
        app: App,
        refresh_rx: mpsc::Receiver<()>,
        shutdown_rx: broadcast::Receiver<()>,
        event_tx: mpsc::Sender<WorkerEvent>,
    }

    fn harness() -> Harness {
        let (event_tx, event_rx) = mpsc::channel(8);
        let (refresh_tx, refresh_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let app = App::new(
            Environment::Local,
            event_rx,
            refresh_tx,
            shutdown_tx,
            UIConfig::new(false, Duration::from_secs(30)),
        );
        Harness {
            app,
            refresh_rx,
            shutdown_rx,
            event_tx,
        }
    }

    fn popup(app: &App) -> Option<&str> {
        match &app.current_screen {
            Screen::Dashboard(state) => state.popup.as_deref(),
            Screen::Splash => None,
        }
    }

    #[test]
    fn test_any_key_leaves_splash() {
        let mut h = harness();
        assert_eq!(h.app.handle_key(KeyCode::Enter), KeyOutcome::Continue);
        assert!(matches!(h.app.current_screen, Screen::Dashboard(_)));
    }

    #[test]
    fn test_startup_outcome_received_during_splash_is_rendered() {
        let mut h = harness();
        h.event_tx
            .try_send(WorkerEvent::state_change(
                CyclePhase::Loading,
                "loading".to_string(),
            ))
            .unwrap();
        h.event_tx
            .try_send(WorkerEvent::stats(FetchOutcome::fallback(
                "Connection refused",
            )))
            .unwrap();

        // Still on the splash screen
        h.app.drain_events();
        h.app.handle_key(KeyCode::Enter);

        let Screen::Dashboard(state) = &mut h.app.current_screen else {
            panic!("dashboard should be open");
        };
        state.update();
        assert_eq!(state.phase(), &DashboardPhase::Loaded);
        assert_eq!(state.view.field(StatField::PendingCount), Some("2"));
        assert!(h.app.splash_backlog.is_empty());
    }

    #[test]
    fn test_refresh_key_requests_cycle() {
        let mut h = harness();
        h.app.handle_key(KeyCode::Enter);
        h.app.handle_key(KeyCode::Char('r'));
        assert!(h.refresh_rx.try_recv().is_ok());
        // Second press with a full queue is dropped, not blocked
        h.app.handle_key(KeyCode::Char('R'));
        h.app.handle_key(KeyCode::Char('R'));
        assert!(h.refresh_rx.try_recv().is_ok());
        assert!(h.refresh_rx.try_recv().is_err());
    }

    #[test]
    fn test_review_and_quick_action_popups() {
        let mut h = harness();
        h.app.handle_key(KeyCode::Enter);

        h.app.handle_key(KeyCode::Char('a'));
        assert_eq!(
            popup(&h.app),
            Some("Redirecting to pending applications...")
        );

        // Any key dismisses without acting
        h.app.handle_key(KeyCode::Char('r'));
        assert_eq!(popup(&h.app), None);
        assert!(h.refresh_rx.try_recv().is_err());

        h.app.handle_key(KeyCode::Char('3'));
        assert_eq!(
            popup(&h.app),
            Some("Risk Reports - This would navigate to the appropriate page.")
        );
    }

    #[test]
    fn test_quit_broadcasts_shutdown() {
        let mut h = harness();
        assert_eq!(h.app.handle_key(KeyCode::Char('q')), KeyOutcome::Quit);
        assert!(h.shutdown_rx.try_recv().is_ok());
    }
}

//! Headless mode execution

use super::{
    SessionData,
    setup::stop_workers,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::EventType;
use crate::logging::init_console_logger;
use crate::ui::dashboard::{DashboardView, render_stats};
use std::error::Error;

/// Runs the refresh loop without a terminal UI
///
/// Worker events are printed as they arrive. Each fetch outcome is rendered
/// into a [`DashboardView`] and its fields are printed. Ctrl+C shuts down.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    init_console_logger();
    print_session_starting("headless", &session.environment, session.refresh_interval);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut view = DashboardView::standard();

    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
                if event.event_type != EventType::Stats {
                    continue;
                }
                if let Some(outcome) = &event.outcome {
                    match render_stats(outcome.stats(), &mut view) {
                        Ok(()) => {
                            print_view(&view);
                            println!("Dashboard loaded successfully!");
                        }
                        Err(e) => log::error!("Error rendering dashboard: {}", e),
                    }
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    stop_workers(&session.shutdown_sender, session.join_handles).await;
    print_session_exit_success();

    Ok(())
}

/// Print the text surfaces and chart tooltips of `view`, one per line.
pub fn print_view(view: &DashboardView) {
    for (field, value) in view.fields() {
        println!("  {:<22} {}", field, value);
    }
    if let Some(chart) = view.chart().and_then(|owner| owner.current()) {
        for i in 0..chart.spec.slices.len() {
            println!("  {:<22} {}", "loanChart", chart.spec.tooltip_label(i));
        }
    }
}

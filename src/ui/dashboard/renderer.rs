//! Dashboard main renderer

use super::components::{chart_panel, footer, header, logs, popup, stats_grid};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    stats_grid::render_stats_grid(f, main_chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[2]);

    chart_panel::render_chart_panel(f, content_chunks[0], state);
    logs::render_logs_panel(f, content_chunks[1], state);
    footer::render_footer(f, main_chunks[3]);

    if let Some(message) = &state.popup {
        popup::render_popup(f, f.area(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::Event as WorkerEvent;
    use crate::stats::{DashboardStats, FetchOutcome};
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn draw(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(30)),
        )
    }

    #[test]
    fn test_initial_frame_shows_loading_placeholders() {
        let screen = draw(&state());
        assert!(screen.contains("Loading dashboard data..."));
        assert!(screen.contains("Loading chart..."));
        assert!(screen.contains("[Q] Quit"));
    }

    #[test]
    fn test_loaded_frame_shows_counts_and_tooltips() {
        let mut state = state();
        state.add_event(WorkerEvent::stats(FetchOutcome::Live(DashboardStats {
            approved: 3,
            pending: 5,
            rejected: 2,
            total: 10,
            recent_count: 5,
            role: Some("loan_officer".to_string()),
        })));
        state.update();

        let screen = draw(&state);
        assert!(screen.contains("5 new applications pending review"));
        assert!(screen.contains("Approved: 3 (30%)"));
        assert!(screen.contains("Pending: 5 (50%)"));
        assert!(screen.contains("Rejected: 2 (20%)"));
        assert!(screen.contains("Dashboard loaded successfully!"));
        assert!(!screen.contains("Loading chart..."));
    }

    #[test]
    fn test_popup_is_drawn_over_dashboard() {
        let mut state = state();
        state.show_popup("Redirecting to pending applications...");
        let screen = draw(&state);
        assert!(screen.contains("Redirecting to pending applications..."));
    }
}

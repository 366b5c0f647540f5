//! Dashboard header component
//!
//! Renders the title and refresh gauge

use super::super::state::{DashboardPhase, DashboardState};
use super::super::utils::spinner_frame;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and time until the next refresh.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = match state.role() {
        Some(role) => format!("LOAN DASHBOARD v{} | {}", version, role),
        None => format!("LOAN DASHBOARD v{}", version),
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let interval_secs = state.refresh_interval.as_secs().max(1);
    let (progress_text, gauge_color, progress_percent) = match state.phase() {
        DashboardPhase::Loading => {
            // Loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("{} REFRESHING - {}", spinner_frame(state.tick), state.environment),
                Color::LightGreen,
                progress,
            )
        }
        DashboardPhase::Failed { .. } => (
            "FAILED - Press [R] to retry".to_string(),
            Color::LightRed,
            100,
        ),
        DashboardPhase::Loaded => match state.next_refresh_in() {
            Some(remaining) => {
                let elapsed = interval_secs.saturating_sub(remaining);
                let progress = ((elapsed as f64 / interval_secs as f64) * 100.0) as u16;
                (
                    format!("UP TO DATE - Next refresh in {}s", remaining),
                    Color::LightBlue,
                    progress.min(100),
                )
            }
            None => ("UP TO DATE".to_string(), Color::LightBlue, 100),
        },
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}

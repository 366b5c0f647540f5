//! Stats grid component
//!
//! Four count cards plus the recent activity line, or the loading/error placeholder

use super::super::state::DashboardState;
use super::super::surfaces::{StatField, StatsGrid};
use super::super::utils::spinner_frame;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const CARDS: [(StatField, &str, Color); 4] = [
    (StatField::ApprovedCount, "APPROVED", Color::LightGreen),
    (StatField::PendingCount, "PENDING", Color::Yellow),
    (StatField::RejectedCount, "REJECTED", Color::LightRed),
    (StatField::TotalCount, "TOTAL", Color::Cyan),
];

pub fn render_stats_grid(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("LOAN STATISTICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    match state.view.stats_grid() {
        StatsGrid::Loading => {
            let placeholder = Paragraph::new(Line::from(format!(
                "{} Loading dashboard data...",
                spinner_frame(state.tick)
            )))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
            f.render_widget(placeholder, area);
        }
        StatsGrid::Error { message } => {
            let placeholder = Paragraph::new(vec![
                Line::from(Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled("[R] Retry", Style::default().fg(Color::Cyan))),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(placeholder, area);
        }
        StatsGrid::Stats => render_cards(f, area, state, block),
    }
}

fn render_cards(f: &mut Frame, area: Rect, state: &DashboardState, block: Block) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    for ((field, label, color), column) in CARDS.iter().zip(columns.iter()) {
        let value = state.view.field(*field).unwrap_or("-");
        let card = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(*label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(card, *column);
    }

    let recent = state
        .view
        .field(StatField::RecentActivityText)
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(recent.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        rows[1],
    );
}

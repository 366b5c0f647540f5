//! Loan status chart panel
//!
//! Draws the live chart as bars with a tooltip legend. A terminal has no arc
//! primitive, so the doughnut's three slices become three bars in the same
//! colours and order, and the legend carries the per-slice percentages.

use super::super::state::DashboardState;
use super::super::utils::spinner_frame;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

pub fn render_chart_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("LOAN STATUS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let instance = state.view.chart().and_then(|owner| owner.current());
    let instance = match instance {
        Some(instance) if !state.view.chart_loading() => instance,
        _ => {
            let placeholder = Paragraph::new(format!(
                "{} Loading chart...",
                spinner_frame(state.tick)
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
            f.render_widget(placeholder, area);
            return;
        }
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    let bars: Vec<Bar> = instance
        .spec
        .slices
        .iter()
        .map(|slice| {
            Bar::default()
                .label(Line::from(slice.label))
                .value(slice.value)
                .style(Style::default().fg(slice.color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);
    f.render_widget(chart, chunks[0]);

    let legend: Vec<Line> = instance
        .spec
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice.color)),
                Span::raw(instance.spec.tooltip_label(i)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);
}

//! Static message popup

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

/// Render `message` in a box centered over `area`.
pub fn render_popup(f: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let height = 5.min(area.height);
    let popup_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let popup = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::styled("Press any key", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

//! Dashboard metrics component
//!
//! Renders the four metrics of the first forecast day

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Value color per metric, in panel order.
const VALUE_COLORS: [Color; 4] = [
    Color::LightGreen,
    Color::LightRed,
    Color::LightBlue,
    Color::LightYellow,
];

/// Render the metrics panel as four equal boxes.
pub fn render_metrics_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((chunk, (label, value)), color) in chunks
        .iter()
        .zip(state.metrics.today.labeled_values())
        .zip(VALUE_COLORS)
    {
        let metric = Paragraph::new(value)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(label)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(metric, *chunk);
    }
}

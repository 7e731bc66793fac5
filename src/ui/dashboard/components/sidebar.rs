//! Dashboard sidebar component
//!
//! Renders dataset information and the static "about" text

use super::super::state::DashboardState;
use crate::consts::dashboard_consts::ABOUT_LINES;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Label/value lines shown at the top of the sidebar.
pub fn info_lines(state: &DashboardState) -> Vec<(&'static str, String)> {
    let info = &state.metrics.info;
    vec![
        ("Última actualización:", info.last_update_text()),
        ("Total de registros:", info.record_count.to_string()),
        ("Período de pronóstico:", info.period_text()),
    ]
}

/// Render the information sidebar.
pub fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    for (label, value) in info_lines(state) {
        lines.push(Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            value,
            Style::default().fg(Color::LightCyan),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(area.width.saturating_sub(4) as usize),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "📊 Acerca de este dashboard",
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )));
    for text in ABOUT_LINES {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::White),
        )));
    }

    let block = Block::default()
        .title("ℹ️ Información")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

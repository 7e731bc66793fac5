//! Dashboard main renderer

use super::components::{charts, footer, header, metrics, sidebar, tables};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.ui_config.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(main_chunks[1]);

    sidebar::render_sidebar(f, body_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Fill(1),
        ])
        .split(body_chunks[1]);

    metrics::render_metrics_section(f, content_chunks[0], state);
    charts::render_charts_section(f, content_chunks[1], state);
    tables::render_tables_section(f, content_chunks[2], state);
    footer::render_footer(f, main_chunks[2]);
}

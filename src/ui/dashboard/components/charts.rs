//! Dashboard chart components
//!
//! Renders the daily and hourly temperature charts with their hover cursor

use super::super::state::{ChartFocus, DashboardState};
use crate::views::{ChartModel, LineStyle};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, LegendPosition};

/// Render both charts side by side.
pub fn render_charts_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let selection = &state.selection;
    render_chart(
        f,
        chunks[0],
        &state.daily_chart,
        selection.daily_cursor,
        selection.chart_focus == ChartFocus::Daily,
    );
    render_chart(
        f,
        chunks[1],
        &state.hourly_chart,
        selection.hourly_cursor,
        selection.chart_focus == ChartFocus::Hourly,
    );
}

/// Render one chart; the focused chart shows its cursor and hover text.
pub fn render_chart(f: &mut Frame, area: Rect, model: &ChartModel, cursor: usize, focused: bool) {
    // Braille gives 2x4 dots per cell
    let band_points = model
        .band
        .as_ref()
        .map(|band| {
            band.raster(
                area.width.saturating_sub(2) as usize * 2,
                area.height.saturating_sub(2) as usize * 4,
                model.x_bounds,
                model.y_bounds,
            )
        })
        .unwrap_or_default();
    let cursor_line = if focused {
        model.cursor_line(cursor)
    } else {
        None
    };

    let mut datasets = Vec::new();
    if let Some(band) = &model.band {
        datasets.push(
            Dataset::default()
                .name(band.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(band.color))
                .data(&band_points),
        );
    }
    for series in &model.series {
        let marker = match series.style {
            LineStyle::Solid => Marker::Braille,
            LineStyle::Dotted => Marker::Dot,
        };
        datasets.push(
            Dataset::default()
                .name(series.name)
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(&series.points),
        );
    }
    if let Some(line) = &cursor_line {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::White))
                .data(line),
        );
    }

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let mut block = Block::default()
        .title(Span::styled(
            model.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    if focused {
        if let Some(hover) = model.unified_hover(cursor) {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", hover),
                Style::default().fg(Color::White),
            )));
        }
    }

    let axis_style = Style::default().fg(Color::Gray);
    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Percentage(60), Constraint::Percentage(60)))
        .x_axis(
            Axis::default()
                .title(model.x_title)
                .style(axis_style)
                .bounds(model.x_bounds)
                .labels(model.axis_x_labels.iter().map(String::as_str)),
        )
        .y_axis(
            Axis::default()
                .title(model.y_title)
                .style(axis_style)
                .bounds(model.y_bounds)
                .labels(model.axis_y_labels.iter().map(String::as_str)),
        );

    f.render_widget(chart, area);
}

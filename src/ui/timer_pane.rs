use crate::app::AppState;
use crate::domain::{format_clock, primary_action_label};
use crate::ui::styles::{
    border_style, clock_style, gauge_style, hint_style, muted_style, phase_style, status_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the countdown: phase badge, clock, progress gauge and controls
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let snapshot = app.snapshot();
    let progress = app.timer.progress().clamp(0.0, 100.0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" {} Timer ", app.active_plan.name),
            title_style(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Phase badge
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Controls
            Constraint::Min(0),    // Status
        ])
        .split(inner);

    let badge = Paragraph::new(Line::from(Span::styled(
        snapshot.phase.badge(app.use_emoji),
        phase_style(snapshot.phase),
    )))
    .alignment(Alignment::Center);
    f.render_widget(badge, chunks[0]);

    let clock = Paragraph::new(Line::from(Span::styled(
        format_clock(snapshot.remaining_secs),
        clock_style(snapshot.phase),
    )))
    .alignment(Alignment::Center);
    f.render_widget(clock, chunks[1]);

    let gauge_area = centered(chunks[3], 60);
    let gauge = Gauge::default()
        .gauge_style(gauge_style(snapshot.phase))
        .ratio(progress / 100.0)
        .label(format!("{:.0}% Complete", progress));
    f.render_widget(gauge, gauge_area);

    let controls = Line::from(vec![
        Span::styled("[Space] ", hint_style()),
        Span::raw(primary_action_label(snapshot.running)),
        Span::styled("   [r] ", hint_style()),
        Span::raw("Reset"),
    ]);
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[5],
    );

    let mut status_lines = Vec::new();
    if let Some(started) = app.timer.started_at() {
        status_lines.push(Line::from(Span::styled(
            format!("Running since {}", started.format("%H:%M")),
            muted_style(),
        )));
    }
    if let Some(message) = &app.status_message {
        status_lines.push(Line::from(Span::styled(message.clone(), status_style())));
    }
    f.render_widget(
        Paragraph::new(status_lines).alignment(Alignment::Center),
        chunks[6],
    );
}

/// Horizontally centred strip taking `percent` of the width
fn centered(area: Rect, percent: u16) -> Rect {
    let side = (100 - percent) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent),
            Constraint::Percentage(side),
        ])
        .split(area)[1]
}

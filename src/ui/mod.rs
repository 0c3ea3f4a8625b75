pub mod keybindings;
pub mod layout;
pub mod plans_pane;
pub mod stats_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::catalog;
use keybindings::render_keybindings;
use layout::create_layout;
use plans_pane::render_plans_pane;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use stats_pane::render_stats_pane;
use styles::{muted_style, title_style};
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, catalog().len());

    render_keybindings(f, layout.keybindings_area);
    render_header(f, layout.header_area);
    render_stats_pane(f, app, layout.stats_areas);
    render_timer_pane(f, app, layout.timer_area);
    render_plans_pane(f, app, layout.plans_area);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Intermittent Fasting", title_style())),
        Line::from(Span::styled("Simple. Elegant. Effective.", muted_style())),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

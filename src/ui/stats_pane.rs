use crate::app::AppState;
use crate::domain::{stat_cards, StatCard};
use crate::ui::styles::{border_style, default_style, muted_style, phase_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the three stats cards from the latest snapshot
pub fn render_stats_pane(f: &mut Frame, app: &AppState, areas: [Rect; 3]) {
    let cards = stat_cards(app.stats, app.snapshot());

    for (card, area) in cards.iter().zip(areas) {
        render_card(f, card, area);
    }
}

fn render_card(f: &mut Frame, card: &StatCard, area: Rect) {
    let value_style = card
        .accent
        .map(phase_style)
        .unwrap_or_else(default_style)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(card.value.clone(), value_style))];
    if !card.suffix.is_empty() {
        lines.push(Line::from(Span::styled(card.suffix.clone(), muted_style())));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(format!(" {} ", card.label), title_style())),
    );

    f.render_widget(paragraph, area);
}

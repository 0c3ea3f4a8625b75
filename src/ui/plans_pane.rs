use crate::app::AppState;
use crate::domain::catalog;
use crate::ui::styles::{
    border_style, default_style, difficulty_style, muted_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the plan list with difficulty badges and selection markers
pub fn render_plans_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = catalog()
        .iter()
        .enumerate()
        .map(|(idx, plan)| {
            let is_selected = plan.id == app.selected_plan.id;
            let marker = if idx == app.cursor { "▶ " } else { "  " };

            let mut header = vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<6}", plan.name),
                    default_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("[{}]", plan.difficulty.name()),
                    difficulty_style(plan.difficulty),
                ),
                Span::styled(
                    format!("  {}h fasting • {}h eating", plan.fasting_hours, plan.eating_hours),
                    muted_style(),
                ),
            ];
            if is_selected {
                let label = if app.has_pending_plan() {
                    "  ● Selected (on reset)"
                } else {
                    "  ● Selected"
                };
                header.push(Span::styled(label, title_style()));
            }

            let description = Line::from(Span::styled(
                format!("    {}", plan.description),
                muted_style(),
            ));

            let item = ListItem::new(vec![Line::from(header), description]);
            if idx == app.cursor {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Choose Your Plan ", title_style())),
    );

    f.render_widget(list, area);
}

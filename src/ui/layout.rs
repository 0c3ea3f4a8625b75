use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one plan entry in the plan list
pub const PLAN_ROW_HEIGHT: u16 = 2;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub stats_areas: [Rect; 3],
    pub timer_area: Rect,
    pub plans_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: app title
/// - Stats row: three equal cards
/// - Timer pane: takes the remaining space
/// - Plan list: one entry per plan
pub fn create_layout(area: Rect, plan_count: usize) -> MainLayout {
    let plans_height = plan_count as u16 * PLAN_ROW_HEIGHT + 2;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Keybindings bar
            Constraint::Length(2),            // Header
            Constraint::Length(5),            // Stats cards
            Constraint::Min(8),               // Timer
            Constraint::Length(plans_height), // Plan list
        ])
        .split(area);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[2]);

    MainLayout {
        keybindings_area: rows[0],
        header_area: rows[1],
        stats_areas: [stats[0], stats[1], stats[2]],
        timer_area: rows[3],
        plans_area: rows[4],
    }
}

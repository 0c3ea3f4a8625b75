use crate::domain::{Difficulty, Phase};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Cursor row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Accent colour of a phase
pub fn phase_style(phase: Phase) -> Style {
    match phase {
        Phase::Fasting => Style::default().fg(Color::Cyan),
        Phase::Eating => Style::default().fg(Color::Green),
    }
}

/// Large countdown digits
pub fn clock_style(phase: Phase) -> Style {
    phase_style(phase).add_modifier(Modifier::BOLD)
}

/// Progress gauge in the phase colour
pub fn gauge_style(phase: Phase) -> Style {
    match phase {
        Phase::Fasting => Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        Phase::Eating => Style::default().fg(Color::Green).bg(Color::DarkGray),
    }
}

/// Difficulty badge style
pub fn difficulty_style(difficulty: Difficulty) -> Style {
    match difficulty {
        Difficulty::Beginner => Style::default().fg(Color::Green),
        Difficulty::Intermediate => Style::default().fg(Color::Yellow),
        Difficulty::Advanced => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    }
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Secondary text (descriptions, suffixes)
pub fn muted_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Status line under the timer
pub fn status_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::ITALIC)
}

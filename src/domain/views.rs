use super::enums::Phase;
use super::timer::TimerUpdate;
use serde::{Deserialize, Serialize};

/// Streak counters shown in the stats row. Supplied from outside, never computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub streak_days: u32,
    pub total_fasts: u32,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            streak_days: 3,
            total_fasts: 12,
        }
    }
}

/// One card of the stats row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub suffix: String,
    /// Which phase colour the card uses, if any
    pub accent: Option<Phase>,
}

/// Format seconds as a "HH:MM:SS" clock
pub fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format seconds as "Xh Ym", or "Ym" under an hour
pub fn format_remaining(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Build the three stats cards: streak, total fasts, and the live countdown
pub fn stat_cards(stats: SessionStats, snapshot: TimerUpdate) -> [StatCard; 3] {
    let countdown = if snapshot.running {
        StatCard {
            label: format!("{} ends in", snapshot.phase.name()),
            value: format_remaining(snapshot.remaining_secs),
            suffix: "remaining".to_string(),
            accent: Some(snapshot.phase),
        }
    } else {
        StatCard {
            label: "Ready to start".to_string(),
            value: "--".to_string(),
            suffix: String::new(),
            accent: Some(snapshot.phase),
        }
    };

    [
        StatCard {
            label: "Current Streak".to_string(),
            value: stats.streak_days.to_string(),
            suffix: if stats.streak_days == 1 { "day" } else { "days" }.to_string(),
            accent: Some(Phase::Fasting),
        },
        StatCard {
            label: "Total Fasts".to_string(),
            value: stats.total_fasts.to_string(),
            suffix: "completed".to_string(),
            accent: None,
        },
        countdown,
    ]
}

/// Label of the primary control for the given running flag
pub fn primary_action_label(running: bool) -> &'static str {
    if running {
        "Pause"
    } else {
        "Start Fasting"
    }
}

pub mod enums;
pub mod plan;
pub mod timer;
pub mod views;

pub use enums::{Difficulty, Phase, PlanChangePolicy};
pub use plan::{catalog, default_plan, find_plan, Plan};
pub use timer::{PhaseTimer, TimerUpdate};
pub use views::{format_clock, primary_action_label, stat_cards, SessionStats, StatCard};
